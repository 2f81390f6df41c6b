use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Custom error type for model loading and prediction failures
#[derive(Debug, Clone)]
pub enum ModelError {
    /// Artifact file absent at the expected path
    NotFound(PathBuf),
    /// Artifact present but could not be read or deserialized
    Unreadable(PathBuf, String),
    /// The predict call itself failed; carries the underlying cause text
    Prediction(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::NotFound(path) => write!(
                f,
                "Model file '{}' not found. Make sure the model is in the working directory.",
                path.display()
            ),
            ModelError::Unreadable(path, cause) => {
                write!(f, "Model file '{}' could not be loaded: {}", path.display(), cause)
            }
            ModelError::Prediction(cause) => {
                write!(f, "An error occurred while running the prediction: {}", cause)
            }
        }
    }
}

impl Error for ModelError {}
