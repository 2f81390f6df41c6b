use anyhow::Result;

use crate::features::FeatureRecord;

/// A small trait abstraction over the pre-trained model. The prediction
/// boundary and the CLI only see this contract, so tests can substitute
/// stub implementations for the real artifact.
pub trait Classifier {
    /// Predict the discrete class code for exactly one record.
    fn predict_code(&self, record: &FeatureRecord) -> Result<i32>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
