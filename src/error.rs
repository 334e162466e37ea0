use perlin_noise::NoiseError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Noise(#[from] NoiseError),

    #[error("invalid settings file {path}: {reason}")]
    Config { path: String, reason: String },

    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("could not draw a random seed: {0}")]
    Seed(String),

    #[error("image error: {0}")]
    Image(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
