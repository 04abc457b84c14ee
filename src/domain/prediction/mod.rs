//! Prediction domain - feature vectors, model capabilities and results

mod classifier;
mod features;
mod result;
mod vectorizer;

pub use classifier::Classifier;
pub use features::SparseVector;
pub use result::{confidence_from_probabilities, Prediction};
pub use vectorizer::TextVectorizer;

#[cfg(test)]
pub use classifier::MockClassifier;
#[cfg(test)]
pub use vectorizer::MockTextVectorizer;
