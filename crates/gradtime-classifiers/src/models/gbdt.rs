use anyhow::{anyhow, ensure, Result};
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;

use crate::features::FeatureRecord;
use crate::models::classifier_trait::Classifier;

/// Gradient Boosting Decision Tree (GBDT) classifier backed by a loaded
/// artifact. Read-only after construction.
pub struct GbdtClassifier {
    model: GBDT,
}

impl std::fmt::Debug for GbdtClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The underlying `gbdt::GBDT` does not implement `Debug`.
        f.debug_struct("GbdtClassifier").finish_non_exhaustive()
    }
}

impl GbdtClassifier {
    pub fn new(model: GBDT) -> Self {
        GbdtClassifier { model }
    }
}

impl Classifier for GbdtClassifier {
    fn predict_code(&self, record: &FeatureRecord) -> Result<i32> {
        let mut batch = DataVec::new();
        batch.push(Data::new_training_data(record.to_row(), 1.0, 0.0, None));

        let predictions = self.model.predict(&batch);
        let score = predictions
            .first()
            .copied()
            .ok_or_else(|| anyhow!("model returned no prediction for the record"))?;
        ensure!(score.is_finite(), "model returned a non-finite score: {}", score);

        // The backend emits a float score; the nearest integer is the class
        // code. Artifacts trained with other objectives can land outside
        // {0, 1}, which the label mapping handles as Unknown.
        Ok(score.round() as i32)
    }

    fn name(&self) -> &str {
        "gbdt"
    }
}
