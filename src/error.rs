use thiserror::Error;

/// Errors raised while building gradients, looking up presets or
/// drawing bars.
#[derive(Error, Debug)]
pub enum Error {
    /// A gradient needs at least two steps to hold both endpoints.
    #[error("invalid step count {0} (a gradient needs at least 2 steps)")]
    InvalidStepCount(usize),
    /// The name is neither a shade preset nor a two-color preset.
    #[error("color '{0}' is not a valid pre-populated gradient")]
    UnknownGradientName(String),
    #[error("failed to draw progress bar\n{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
