//! gradtime-classifiers: model loading and prediction for graduation timing.
//!
//! This crate wraps a pre-trained GBDT classifier behind a small trait,
//! loads the serialized artifact from a conventional path (memoized for the
//! process lifetime), and maps the classifier's discrete output code to a
//! human-readable graduation-timing label.
//!
//! The design favors small, testable modules: the `Classifier` trait is the
//! seam that lets tests substitute stub models for the real artifact.
pub mod error;
pub mod features;
pub mod labels;
pub mod loader;
pub mod models;
pub mod predictor;
