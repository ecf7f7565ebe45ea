//! Detection and classification commands

use crate::error::CliResult;
use crate::output::{flag, print_single, FieldRow, OutputFormat};
use drift_engine::{Classification, DetectionResult, DriftEngine};

/// Run the covariate detector.
pub fn covariate(
    engine: &DriftEngine,
    input_shift: f64,
    quality_change: f64,
    format: OutputFormat,
) -> CliResult<()> {
    let result = engine.covariate().detect(input_shift, quality_change);
    print_single(&result, detection_rows(&result), format)
}

/// Run the concept detector. `quality_drop` is positive for degradation.
pub fn concept(
    engine: &DriftEngine,
    quality_drop: f64,
    input_shift: f64,
    format: OutputFormat,
) -> CliResult<()> {
    let result = engine.concept().detect(quality_drop, input_shift);
    print_single(&result, detection_rows(&result), format)
}

/// Classify a pair of detector flags.
pub fn classify(
    engine: &DriftEngine,
    input_shifted: bool,
    quality_dropped: bool,
    format: OutputFormat,
) -> CliResult<()> {
    let result = Classification {
        drift_type: engine.classifier().classify(input_shifted, quality_dropped),
    };
    let rows = vec![FieldRow::new("type", result.drift_type)];
    print_single(&result, rows, format)
}

fn detection_rows(result: &DetectionResult) -> Vec<FieldRow> {
    vec![
        FieldRow::new("detected", flag(result.detected)),
        FieldRow::new(
            "drift",
            result.drift.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
        ),
    ]
}
