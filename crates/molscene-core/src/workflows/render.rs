use crate::core::io::traits::MoleculeFile;
use crate::core::io::xyz::{XyzError, XyzFile, XyzOptions};
use crate::core::models::atom::Atom;
use crate::core::models::scene::Scene;
use crate::engine::config::SceneConfig;
use crate::engine::generator::SceneGenerator;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Failed to read structure: {0}")]
    Read(#[from] XyzError),
}

/// The generated scene together with what it was generated from.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub scene: Scene,
    pub atom_count: usize,
    pub bond_count: usize,
}

impl RenderOutcome {
    /// True when the input held no atoms; the scene then carries only its preamble.
    pub fn is_empty(&self) -> bool {
        self.atom_count == 0
    }
}

#[instrument(skip_all, name = "render_workflow")]
pub fn run(atoms: &[Atom], config: &SceneConfig) -> RenderOutcome {
    info!("Generating scene for {} atoms.", atoms.len());

    let scene = SceneGenerator::new(config).generate(atoms);
    let outcome = RenderOutcome {
        atom_count: atoms.len(),
        bond_count: scene.cylinders.len(),
        scene,
    };

    if outcome.is_empty() {
        warn!("No atoms were read; the scene contains only lighting and camera.");
    }
    info!(
        "Scene complete: {} atoms, {} bonds.",
        outcome.atom_count, outcome.bond_count
    );
    outcome
}

pub fn run_from_reader(
    reader: &mut impl BufRead,
    options: &XyzOptions,
    config: &SceneConfig,
) -> Result<RenderOutcome, WorkflowError> {
    let atoms = XyzFile::read_from(reader, options)?;
    Ok(run(&atoms, config))
}

pub fn run_from_path<P: AsRef<Path>>(
    path: P,
    options: &XyzOptions,
    config: &SceneConfig,
) -> Result<RenderOutcome, WorkflowError> {
    info!("Loading structure from {:?}", path.as_ref());
    let atoms = XyzFile::read_from_path(path, options)?;
    Ok(run(&atoms, config))
}
