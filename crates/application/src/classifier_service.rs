//! Statistical intent classification over free-text input.
//!
//! The model is a TF-IDF weighted multinomial Naive Bayes classifier fitted
//! once, at construction, on an embedded training corpus. The fitted model is
//! immutable; concurrent detection needs no locking.

use std::str::FromStr;

use gatekeep_domain::Intent;
use thiserror::Error;

mod corpus;
mod model;
mod normalize;
mod vectorizer;

use self::model::MultinomialNaiveBayes;
use self::normalize::tokenize;
use self::vectorizer::TfidfVectorizer;

#[cfg(test)]
mod tests;

/// Failure modes of intent detection.
///
/// Both variants collapse to "intent not recognized" at the access-decision
/// boundary; the distinction exists for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// The model has no trained classes to predict from.
    #[error("intent model has no trained classes")]
    NoPrediction,

    /// The top-1 prediction is a label outside the closed intent set.
    #[error("predicted label '{0}' is outside the recognized intent set")]
    UnrecognizedLabel(String),
}

/// A fitted text classifier mapping utterances to intents.
pub struct IntentClassifier {
    vectorizer: TfidfVectorizer,
    model: MultinomialNaiveBayes,
}

impl IntentClassifier {
    /// Fits a classifier on `(utterance, label)` training pairs.
    ///
    /// Total: an empty corpus yields a classifier whose [`detect`] reports
    /// [`ClassificationError::NoPrediction`] instead of panicking.
    ///
    /// [`detect`]: IntentClassifier::detect
    #[must_use]
    pub fn new(corpus: &[(&str, &str)]) -> Self {
        let token_documents: Vec<Vec<String>> =
            corpus.iter().map(|(text, _)| tokenize(text)).collect();
        let vectorizer = TfidfVectorizer::fit(&token_documents);
        let vectors: Vec<Vec<f64>> = token_documents
            .iter()
            .map(|tokens| vectorizer.transform(tokens))
            .collect();
        let labels: Vec<&str> = corpus.iter().map(|(_, label)| *label).collect();
        let model = MultinomialNaiveBayes::fit(&vectors, &labels);

        Self { vectorizer, model }
    }

    /// Fits a classifier on the compiled-in training corpus.
    #[must_use]
    pub fn with_embedded_corpus() -> Self {
        Self::new(corpus::TRAINING_CORPUS)
    }

    /// Detects the intent of a free-text utterance.
    ///
    /// Normalizes and vectorizes the text with the fitted transform
    /// (out-of-vocabulary tokens contribute zero weight), takes the top-1
    /// posterior label, and parses it into the closed intent set. Never
    /// panics: every failure is reported as a [`ClassificationError`].
    pub fn detect(&self, text: &str) -> Result<Intent, ClassificationError> {
        let tokens = tokenize(text);
        let features = self.vectorizer.transform(&tokens);
        let label = self
            .model
            .predict(&features)
            .ok_or(ClassificationError::NoPrediction)?;

        Intent::from_str(label)
            .map_err(|_| ClassificationError::UnrecognizedLabel(label.to_owned()))
    }

    /// Returns the number of distinct tokens in the fitted vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    /// Returns the number of trained class labels.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.model.label_count()
    }
}
