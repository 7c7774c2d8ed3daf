use crate::report::ModelReport;

pub fn to_json(report: &ModelReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
