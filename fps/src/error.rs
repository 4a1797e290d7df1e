use std::fmt::Display;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a placement or extraction run.
/// None of these are retried: each one is a deterministic consequence of the inputs.
#[derive(Debug, Error)]
pub enum FpsError {
    /// Non-positive dimensions, an invalid sampling stride, a photo whose aspect ratio
    /// differs from the canvas, ...
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The candidate grid of the placement search does not contain a single point
    #[error(
        "canvas of {width} x {height} contains no candidate points at a sampling stride of {stride}"
    )]
    DegenerateCanvas { width: f64, height: f64, stride: f64 },

    /// The source photo could not be read or decoded
    #[error("could not decode source image {path:?}")]
    SourceDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not encode image {path:?}")]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A persisted position list could not be (de)serialized
    #[error("could not (de)serialize positions in {path:?}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("i/o error on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FpsError {
    /// Wraps a validation failure of one of the `tessera` primitives
    pub fn configuration(reason: impl Display) -> Self {
        FpsError::Configuration(format!("{reason:#}"))
    }
}
