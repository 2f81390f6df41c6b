//! The prediction boundary: one record in, one label out.
use crate::error::ModelError;
use crate::features::FeatureRecord;
use crate::labels::Outcome;
use crate::models::classifier_trait::Classifier;

/// Run one prediction against the loaded classifier.
///
/// Any failure from the predict call, whatever its cause, is collapsed into
/// `ModelError::Prediction` carrying the underlying cause text; it never
/// propagates further. Codes outside the trained set are not failures and
/// come back as `Outcome::Unknown`.
pub fn predict_outcome(
    classifier: &dyn Classifier,
    record: &FeatureRecord,
) -> Result<Outcome, ModelError> {
    let code = classifier
        .predict_code(record)
        .map_err(|e| ModelError::Prediction(format!("{:#}", e)))?;

    let outcome = Outcome::from_code(code);
    log::debug!(
        "{} predicted code {} -> {}",
        classifier.name(),
        code,
        outcome
    );
    Ok(outcome)
}
