//! Translation from the classifier's discrete output code to a label.
use std::fmt;

/// Predicted graduation-timing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    OnTime,
    Late,
    /// Code outside the trained {0, 1} set; a lenient fallback, not an error.
    Unknown,
}

impl Outcome {
    /// Map a class code to its category. The default arm keeps unexpected
    /// codes auditable instead of failing the prediction.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Outcome::OnTime,
            0 => Outcome::Late,
            _ => Outcome::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::OnTime => "On Time",
            Outcome::Late => "Late",
            Outcome::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
