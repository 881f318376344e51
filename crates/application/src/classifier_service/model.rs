//! Multinomial Naive Bayes over TF-IDF weighted features.

/// Laplace smoothing factor for feature likelihoods.
const SMOOTHING: f64 = 1.0;

/// A fitted generative classifier scoring classes in log space.
#[derive(Debug, Clone)]
pub(crate) struct MultinomialNaiveBayes {
    labels: Vec<String>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNaiveBayes {
    /// Fits class priors and smoothed feature likelihoods.
    ///
    /// `vectors` and `labels` are parallel slices; labels are registered in
    /// first-seen order, which also decides exact score ties at prediction.
    pub(crate) fn fit(vectors: &[Vec<f64>], labels: &[&str]) -> Self {
        let feature_count = vectors.first().map(Vec::len).unwrap_or(0);

        let mut class_labels: Vec<String> = Vec::new();
        for label in labels {
            if !class_labels.iter().any(|known| known.as_str() == *label) {
                class_labels.push((*label).to_owned());
            }
        }

        let class_count = class_labels.len();
        let mut document_counts = vec![0usize; class_count];
        let mut weight_sums = vec![vec![0.0f64; feature_count]; class_count];

        for (vector, label) in vectors.iter().zip(labels) {
            if let Some(class) = class_labels
                .iter()
                .position(|known| known.as_str() == *label)
            {
                document_counts[class] += 1;
                for (feature, weight) in vector.iter().enumerate() {
                    weight_sums[class][feature] += weight;
                }
            }
        }

        let total_documents = vectors.len() as f64;
        let class_log_prior = document_counts
            .iter()
            .map(|&count| (count as f64 / total_documents).ln())
            .collect();

        let feature_log_prob = weight_sums
            .iter()
            .map(|sums| {
                let total = sums.iter().sum::<f64>() + SMOOTHING * feature_count as f64;
                sums.iter().map(|&sum| ((sum + SMOOTHING) / total).ln()).collect()
            })
            .collect();

        Self {
            labels: class_labels,
            class_log_prior,
            feature_log_prob,
        }
    }

    /// Returns the label with the highest posterior score, or `None` when the
    /// model has no classes.
    ///
    /// A zero feature vector reduces the score to the class prior, so even
    /// empty input yields a label. Never panics.
    pub(crate) fn predict(&self, features: &[f64]) -> Option<&str> {
        let mut best: Option<usize> = None;
        let mut best_score = f64::NEG_INFINITY;

        for (class, prior) in self.class_log_prior.iter().enumerate() {
            let mut score = *prior;
            for (feature, weight) in features.iter().enumerate() {
                if *weight != 0.0
                    && let Some(log_prob) = self.feature_log_prob[class].get(feature)
                {
                    score += weight * log_prob;
                }
            }

            if score > best_score {
                best_score = score;
                best = Some(class);
            }
        }

        best.map(|class| self.labels[class].as_str())
    }

    /// Returns the number of trained class labels.
    pub(crate) fn label_count(&self) -> usize {
        self.labels.len()
    }
}
