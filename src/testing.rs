//! Fixtures shared by unit tests

use std::path::PathBuf;

use crate::infrastructure::artifact::ArtifactPaths;
use crate::infrastructure::services::PredictionService;

/// Paths of the demo artifacts shipped in `models/`
pub fn sample_paths() -> ArtifactPaths {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models");
    ArtifactPaths::new(
        root.join("disease_prediction_model.json"),
        root.join("tfidf_vectorizer.json"),
    )
}

/// Prediction service backed by the demo artifacts
pub fn sample_service() -> PredictionService {
    PredictionService::from_artifacts(&sample_paths()).expect("demo artifacts load")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_artifacts_predict_expected_diseases() {
        let service = sample_service();

        let cases = [
            ("fever cough headache", "Influenza"),
            ("itchy skin rash with redness", "Allergic Dermatitis"),
            ("nausea vomiting diarrhea", "Food Poisoning"),
            ("runny nose sneezing", "Common Cold"),
            ("throbbing headache light", "Migraine"),
        ];

        for (symptoms, expected) in cases {
            let prediction = service.predict(symptoms).unwrap();
            assert_eq!(prediction.disease, expected, "symptoms: {}", symptoms);

            let confidence = prediction.confidence.unwrap();
            assert!((0.0..=100.0).contains(&confidence));
        }
    }

    #[test]
    fn test_empty_text_still_predicts_from_priors() {
        let prediction = sample_service().predict("").unwrap();

        assert!(!prediction.disease.is_empty());
        assert!((prediction.confidence.unwrap() - 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_words_only() {
        let prediction = sample_service().predict("zzz qqq").unwrap();
        assert!(!prediction.disease.is_empty());
    }
}
