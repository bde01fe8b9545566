//! Top-level application error.

use std::path::PathBuf;

use tessera_config::ConfigError;
use tessera_scene::SceneError;

use crate::platform::PlatformError;

/// Anything that can stop a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("scene rejected an update: {0}")]
    Scene(#[from] SceneError),

    #[error("failed to serialize tiles: {0}")]
    Serialize(#[from] ron::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
