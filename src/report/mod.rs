pub mod json;
pub mod md;

use crate::configure::{build_configured_model, describe_changes, ConfigState};
use crate::data::DataContext;
use crate::error::Result;
use crate::score_context::{interpretation, score_context, ScoreContext};
use crate::scoring::graphics::{gaming_assessment, GamingAssessment};
use crate::scoring::model_scores;
use crate::types::laptop::{Laptop, LinuxCompat};
use crate::types::scoring::{Dimension, ModelScores, ScoreWeights};
use serde::Serialize;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionReport {
    #[serde(flatten)]
    pub context: ScoreContext,
    pub interpretation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelReport {
    pub id: String,
    pub name: String,
    pub series: String,
    pub year: u16,
    /// Components swapped away from the base configuration; empty for the base model.
    pub configured_changes: Vec<String>,
    pub weights: ScoreWeights,
    pub scores: ModelScores,
    pub gaming: GamingAssessment,
    pub dimensions: Vec<DimensionReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linux: Option<LinuxCompat>,
}

/// Scores `base` with `state` applied and places every dimension among its peers.
pub fn build_model_report(
    data: &DataContext,
    base: &Laptop,
    state: &ConfigState,
    weights: &ScoreWeights,
    peer_group_min: usize,
) -> ModelReport {
    let model = build_configured_model(base, state);
    let dimensions = Dimension::iter()
        .map(|dimension| {
            let context = score_context(data, &model, dimension, peer_group_min);
            DimensionReport {
                interpretation: interpretation(dimension, context.score),
                context,
            }
        })
        .collect();

    ModelReport {
        id: model.id.clone(),
        name: model.name.clone(),
        series: model.series.clone(),
        year: model.year,
        configured_changes: describe_changes(base, &model),
        weights: *weights,
        scores: model_scores(&data.benchmarks, &model, weights),
        gaming: gaming_assessment(&data.benchmarks, &model.gpu),
        dimensions,
        summary: model.editorial.as_ref().map(|editorial| editorial.summary.clone()),
        linux: model.linux.clone(),
    }
}

pub fn render(report: &ModelReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::to_json(report)?),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
