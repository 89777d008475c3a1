use crate::config::FileConfig;
use crate::error::Result;
use molscene::engine::config::SceneConfig;
use tracing::info;

pub fn run() -> Result<()> {
    info!("Rendering built-in configuration as TOML.");
    let text = FileConfig::from(&SceneConfig::default()).to_toml()?;
    print!("{}", text);
    Ok(())
}
