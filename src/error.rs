use thiserror::Error;

/// Errors raised outside the per-pixel algorithm, which itself cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    #[error("sphere shininess must be finite and non-negative, got {0}")]
    InvalidShininess(f32),

    #[error("invalid arguments: {0}")]
    Args(#[from] getopts::Fail),

    #[error("invalid value {value:?} for --{option}")]
    InvalidValue { option: &'static str, value: String },

    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),

    #[error("unknown render mode {0:?}")]
    UnknownMode(String),

    #[error("render aborted")]
    Aborted,

    #[error("render worker panicked")]
    WorkerPanicked,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] ::image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
