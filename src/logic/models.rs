//! Model Panel Logic
//!
//! Read-only projections over the backend's model listing.

use std::cmp::Ordering;

use crate::logic::backend::{ModelInfo, ModelPerformance};

/// Sort models for presentation: available models first, then higher
/// accuracy first within the same availability tier.
///
/// When accuracy is missing on either side the pair keeps its input order
/// (the sort is stable).
pub fn sort_models(models: &mut [ModelInfo]) {
    models.sort_by(|a, b| {
        if a.available != b.available {
            return if a.available { Ordering::Less } else { Ordering::Greater };
        }
        match (a.performance.map(|p| p.accuracy), b.performance.map(|p| p.accuracy)) {
            (Some(a_acc), Some(b_acc)) => b_acc.partial_cmp(&a_acc).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    });
}

/// (available, unavailable) tally for the panel footer
pub fn availability_counts(models: &[ModelInfo]) -> (usize, usize) {
    let available = models.iter().filter(|m| m.available).count();
    (available, models.len() - available)
}

/// Mean of the reported metrics, used for the overall performance figure
pub fn overall_score(performance: &ModelPerformance) -> f64 {
    (performance.accuracy + performance.f1_score + performance.precision + performance.recall)
        / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, available: bool, accuracy: Option<f64>) -> ModelInfo {
        ModelInfo {
            name: name.to_string(),
            model_type: "transformer".to_string(),
            available,
            performance: accuracy.map(|a| ModelPerformance {
                accuracy: a,
                f1_score: a,
                precision: a,
                recall: a,
            }),
            description: None,
        }
    }

    #[test]
    fn available_models_sort_before_unavailable_and_by_accuracy() {
        let mut models = vec![
            model("unavailable", false, Some(0.9)),
            model("weak", true, Some(0.5)),
            model("strong", true, Some(0.9)),
        ];

        sort_models(&mut models);

        let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["strong", "weak", "unavailable"]);
    }

    #[test]
    fn missing_accuracy_keeps_input_order() {
        let mut models = vec![
            model("first", true, None),
            model("second", true, Some(0.8)),
            model("third", true, None),
        ];

        sort_models(&mut models);

        let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn availability_tally() {
        let models = vec![
            model("a", true, None),
            model("b", false, None),
            model("c", true, Some(0.7)),
        ];
        assert_eq!(availability_counts(&models), (2, 1));
    }

    #[test]
    fn overall_score_is_metric_mean() {
        let perf =
            ModelPerformance { accuracy: 0.9, f1_score: 0.8, precision: 0.7, recall: 0.6 };
        assert!((overall_score(&perf) - 0.75).abs() < 1e-9);
    }
}
