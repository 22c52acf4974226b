use std::path::PathBuf;

use crate::pattern::Pattern;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read scene file {path:?} -> {source}")]
    ReadScene {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scene description -> {0}")]
    Parse(#[from] serde_json::Error),

    #[error("sphere '{name}' has a non-positive radius {radius}")]
    InvalidRadius { name: String, radius: f32 },

    #[error("material '{name}' has a negative or undefined shininess {ns}")]
    InvalidMaterial { name: String, ns: f32 },

    #[error("sphere '{name}' has a degenerate pattern {pattern:?}")]
    InvalidPattern { name: String, pattern: Pattern },

    #[error("cannot create output directory {path:?} -> {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write image -> {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
