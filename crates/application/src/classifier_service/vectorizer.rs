//! Term-weighting transform fitted over the training vocabulary.

use std::collections::{BTreeSet, HashMap};

/// TF-IDF vectorizer with smoothed inverse document frequencies and
/// L2-normalized document vectors.
#[derive(Debug, Clone)]
pub(crate) struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fits the vocabulary and idf weights over tokenized documents.
    pub(crate) fn fit(documents: &[Vec<String>]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        for tokens in documents {
            for token in tokens {
                if !vocabulary.contains_key(token.as_str()) {
                    let index = vocabulary.len();
                    vocabulary.insert(token.clone(), index);
                }
            }
        }

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in documents {
            let unique: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in unique {
                if let Some(&index) = vocabulary.get(token) {
                    document_frequency[index] += 1;
                }
            }
        }

        let document_count = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&frequency| ((1.0 + document_count) / (1.0 + frequency as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Maps a token stream onto the fitted feature space.
    ///
    /// Out-of-vocabulary tokens contribute zero weight; an empty token stream
    /// yields a zero vector. Never fails.
    pub(crate) fn transform(&self, tokens: &[String]) -> Vec<f64> {
        let mut vector = vec![0.0f64; self.idf.len()];
        for token in tokens {
            if let Some(&index) = self.vocabulary.get(token.as_str()) {
                vector[index] += 1.0;
            }
        }

        for (index, value) in vector.iter_mut().enumerate() {
            *value *= self.idf[index];
        }

        let norm = vector.iter().map(|value| value * value).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }

    /// Returns the number of distinct tokens in the vocabulary.
    pub(crate) fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::TfidfVectorizer;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| (*word).to_owned()).collect()
    }

    #[test]
    fn transform_ignores_out_of_vocabulary_tokens() {
        let vectorizer = TfidfVectorizer::fit(&[tokens(&["edit", "document"])]);
        let vector = vectorizer.transform(&tokens(&["edit", "spaceship"]));
        assert_eq!(vector.len(), 2);
        assert!(vector[0] > 0.0);
        assert!((vector[1] - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn transform_of_empty_input_is_a_zero_vector() {
        let vectorizer = TfidfVectorizer::fit(&[tokens(&["edit", "document"])]);
        let vector = vectorizer.transform(&[]);
        assert!(vector.iter().all(|value| *value == 0.0));
    }

    #[test]
    fn document_vectors_are_unit_length() {
        let vectorizer = TfidfVectorizer::fit(&[
            tokens(&["edit", "this", "document"]),
            tokens(&["view", "this", "document"]),
        ]);
        let vector = vectorizer.transform(&tokens(&["edit", "document"]));
        let norm = vector.iter().map(|value| value * value).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rarer_terms_weigh_more() {
        let vectorizer = TfidfVectorizer::fit(&[
            tokens(&["edit", "document"]),
            tokens(&["view", "document"]),
            tokens(&["delete", "document"]),
        ]);
        let vector = vectorizer.transform(&tokens(&["edit", "document"]));
        let edit_weight = vector[0];
        let document_weight = vector[1];
        assert!(edit_weight > document_weight);
    }

    #[test]
    fn fitting_no_documents_yields_an_empty_feature_space() {
        let vectorizer = TfidfVectorizer::fit(&[]);
        assert_eq!(vectorizer.vocabulary_size(), 0);
        assert!(vectorizer.transform(&tokens(&["edit"])).is_empty());
    }
}
