use serde::Serialize;

/// Outcome of a successful prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub disease: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Prediction {
    pub fn new(disease: impl Into<String>, confidence: Option<f64>) -> Self {
        Self {
            disease: disease.into(),
            confidence,
        }
    }
}

/// Highest class probability expressed as a percentage in [0, 100].
///
/// Returns `None` for an empty or non-finite probability row.
pub fn confidence_from_probabilities(probabilities: &[f64]) -> Option<f64> {
    let max = probabilities
        .iter()
        .copied()
        .filter(|p| p.is_finite())
        .fold(None, |acc: Option<f64>, p| Some(acc.map_or(p, |m| m.max(p))))?;

    Some((max * 100.0).clamp(0.0, 100.0))
}
