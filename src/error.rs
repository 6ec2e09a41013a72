use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = CreateError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CreateError {
    #[error("cannot read source image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot write image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid package descriptor {}: {source}", path.display())]
    Package {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CreateError {
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| CreateError::Io { path, source }
    }
}
