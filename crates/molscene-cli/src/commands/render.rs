use crate::cli::RenderArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use molscene::core::io::rt::RtFile;
use molscene::core::io::traits::SceneFile;
use molscene::workflows::render::{self, RenderOutcome};
use std::io::{self, Write};
use tracing::{info, warn};

pub fn run(args: RenderArgs) -> Result<()> {
    info!("Building scene configuration...");
    let app_config = build_config(&args)?;

    info!("Loading input structure from {:?}", &app_config.input_path);
    let outcome = render::run_from_path(
        &app_config.input_path,
        &app_config.xyz_options,
        &app_config.scene_config,
    )
    .map_err(|e| CliError::FileParsing {
        path: app_config.input_path.clone(),
        source: e.into(),
    })?;

    if outcome.is_empty() {
        warn!("Input contained no atoms; writing lighting and camera only.");
        eprintln!(
            "Warning: no atoms were read from {}. The scene contains no primitives.",
            app_config.input_path.display()
        );
    }

    match &app_config.output_path {
        Some(path) => {
            info!("Writing scene to {:?}", path);
            RtFile::write_to_path(&outcome.scene, path)?;
            eprintln!(
                "✓ Scene with {} atoms and {} bonds written to: {}",
                outcome.atom_count,
                outcome.bond_count,
                path.display()
            );
        }
        None => write_to_stdout(&outcome)?,
    }

    Ok(())
}

fn write_to_stdout(outcome: &RenderOutcome) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    RtFile::write_to(&outcome.scene, &mut handle)?;
    handle.flush()?;
    Ok(())
}
