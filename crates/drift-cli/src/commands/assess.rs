//! Full-pipeline assessment command

use std::io::Read;
use std::path::Path;

use crate::error::CliResult;
use crate::output::{colorize_action, flag, print_single, FieldRow, OutputFormat};
use drift_engine::{AssessmentRequest, DriftAssessment, DriftEngine};
use serde::Deserialize;

/// A request document holds one request or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RequestDocument {
    One(AssessmentRequest),
    Many(Vec<AssessmentRequest>),
}

/// Read requests from `file`, or stdin when absent, and print the assessments.
pub fn execute(engine: &DriftEngine, file: Option<&Path>, format: OutputFormat) -> CliResult<()> {
    let contents = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    match parse(&contents)? {
        RequestDocument::One(request) => {
            let assessment = engine.assess(&request);
            print_single(&assessment, assessment_rows(&assessment), format)
        }
        RequestDocument::Many(requests) => {
            let assessments = engine.assess_batch(&requests);
            match format {
                OutputFormat::Table => {
                    for (i, assessment) in assessments.iter().enumerate() {
                        println!("Request {}", i + 1);
                        print_single(assessment, assessment_rows(assessment), format)?;
                    }
                    Ok(())
                }
                _ => print_single(&assessments, vec![], format),
            }
        }
    }
}

pub fn parse(contents: &str) -> CliResult<RequestDocument> {
    Ok(serde_json::from_str(contents)?)
}

fn assessment_rows(a: &DriftAssessment) -> Vec<FieldRow> {
    let mut rows = vec![
        FieldRow::new("input_shift", a.signal.input_shift),
        FieldRow::new("quality_change", a.signal.quality_change),
        FieldRow::new("covariate", flag(a.covariate.detected)),
        FieldRow::new("concept", flag(a.concept.detected)),
        FieldRow::new("drift_type", a.drift_type),
        FieldRow::new("severity", a.severity),
        FieldRow::new("action", colorize_action(a.action)),
    ];
    if let Some(impact) = &a.impact {
        rows.push(FieldRow::new("predictions_affected", impact.predictions_affected));
        rows.push(FieldRow::new("errors", impact.errors));
        rows.push(FieldRow::new(
            "financial_impact",
            format!("{:.2}", impact.financial_impact),
        ));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_request() {
        let doc = parse(r#"{"signal": {"input_shift": 0.3, "quality_change": 0.0}, "severity": 0.4}"#)
            .unwrap();
        assert!(matches!(doc, RequestDocument::One(_)));
    }

    #[test]
    fn parses_request_array() {
        let doc = parse(
            r#"[
                {"signal": {"input_shift": 0.3, "quality_change": 0.0}, "severity": 0.4},
                {"signal": {"input_shift": 0.0, "quality_change": -0.2}, "severity": 0.95,
                 "impact": {"daily_predictions": 10000, "days": 2.5, "error_rate": 0.01, "cost_per_error": 100.0}}
            ]"#,
        )
        .unwrap();
        match doc {
            RequestDocument::Many(reqs) => {
                assert_eq!(reqs.len(), 2);
                assert!(reqs[1].impact.is_some());
            }
            RequestDocument::One(_) => panic!("expected array"),
        }
    }

    #[test]
    fn rejects_malformed_request() {
        assert!(parse(r#"{"severity": "high"}"#).is_err());
    }

    #[test]
    fn rows_include_impact_when_present() {
        let req = AssessmentRequest {
            signal: drift_engine::DriftSignal::new(0.0, -0.2),
            severity: 0.6,
            impact: Some(drift_engine::ImpactParameters {
                daily_predictions: 100,
                days: 1.0,
                error_rate: 0.1,
                cost_per_error: 5.0,
            }),
        };
        let a = DriftEngine::default().assess(&req);
        let rows = assessment_rows(&a);
        assert!(rows.iter().any(|r| r.field == "financial_impact" && r.value == "50.00"));
    }
}
