use molscene::core::io::xyz::XyzOptions;
use molscene::engine::config::SceneConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub xyz_options: XyzOptions,
    pub scene_config: SceneConfig,
}
