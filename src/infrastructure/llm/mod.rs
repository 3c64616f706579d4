//! Chat-completion client used for link classification.

pub mod openai_classifier;
pub mod types;

pub use openai_classifier::{ClassifierSettings, OpenAiClassifier};
