use crate::types::{ClassificationInput, DriftType};

/// Combines detector flags into a drift type.
#[derive(Clone, Copy, Debug, Default)]
pub struct DriftClassifier;

impl DriftClassifier {
    pub fn classify(&self, input_shifted: bool, quality_dropped: bool) -> DriftType {
        match (input_shifted, quality_dropped) {
            (true, false) => DriftType::Covariate,
            (false, true) => DriftType::Concept,
            (true, true) => DriftType::Both,
            (false, false) => DriftType::None,
        }
    }

    pub fn classify_input(&self, input: &ClassificationInput) -> DriftType {
        self.classify(input.input_shifted, input.quality_dropped)
    }
}
