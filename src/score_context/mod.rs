pub mod interpretation;

use crate::data::DataContext;
use crate::scoring::dimension_score;
use crate::types::laptop::Laptop;
use crate::types::scoring::{Dimension, Score};
use serde::Serialize;

pub use interpretation::interpretation;

/// Score gap (in points) treated as "in line with" the peer average.
const IN_LINE_MARGIN: f32 = 3.0;
/// Score gap beyond which the comparison reads "well above/below".
const WIDE_MARGIN: f32 = 15.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum PeerGroup {
    Series(String),
    Catalog,
}

impl PeerGroup {
    pub fn label(&self) -> String {
        match self {
            PeerGroup::Series(series) => format!("{series} series"),
            PeerGroup::Catalog => "all models".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreContext {
    pub dimension: Dimension,
    pub score: Score,
    pub average: Score,
    /// 1..=100, 100 = best in group.
    pub percentile: u8,
    pub group: PeerGroup,
    pub group_label: String,
    pub peer_count: usize,
    pub comparison_text: String,
}

/// Series members when the series has at least `min_series_size` models in
/// the catalog, otherwise the whole catalog.
pub fn peer_group<'a>(
    data: &'a DataContext,
    laptop: &Laptop,
    min_series_size: usize,
) -> (PeerGroup, Vec<&'a Laptop>) {
    let series = data.catalog.series_members(&laptop.series);
    if series.len() >= min_series_size {
        (PeerGroup::Series(laptop.series.clone()), series)
    } else {
        (PeerGroup::Catalog, data.catalog.iter().collect())
    }
}

/// Places `laptop`'s score for `dimension` among its peers.
///
/// The model under evaluation always takes its own slot in the group: a
/// catalog entry with the same id is replaced by `laptop`, so configured
/// variants are ranked against the other models rather than against their
/// own base configuration.
///
/// Percentile is inclusive: `round(100 * peers_at_or_below / peers)`,
/// clamped to `1..=100`. Equal scores therefore share a percentile and the
/// best model in the group is always 100.
pub fn score_context(
    data: &DataContext,
    laptop: &Laptop,
    dimension: Dimension,
    min_series_size: usize,
) -> ScoreContext {
    let (group, members) = peer_group(data, laptop, min_series_size);
    let score = dimension_score(&data.benchmarks, laptop, dimension);

    let mut peer_scores: Vec<Score> = members
        .iter()
        .filter(|peer| peer.id != laptop.id)
        .map(|peer| dimension_score(&data.benchmarks, peer, dimension))
        .collect();
    peer_scores.push(score);

    let peer_count = peer_scores.len();
    let average = (peer_scores.iter().sum::<Score>() / peer_count as Score).clamp(0.0, 100.0);
    let at_or_below = peer_scores.iter().filter(|peer| **peer <= score).count();
    let percentile = ((at_or_below as f32 / peer_count as f32) * 100.0)
        .round()
        .clamp(1.0, 100.0) as u8;

    let group_label = group.label();
    let comparison_text = comparison_text(score, average, &group_label);

    ScoreContext {
        dimension,
        score,
        average,
        percentile,
        group,
        group_label,
        peer_count,
        comparison_text,
    }
}

fn comparison_text(score: Score, average: Score, group_label: &str) -> String {
    let delta = score - average;
    let phrase = if delta.abs() < IN_LINE_MARGIN {
        "In line with"
    } else if delta >= WIDE_MARGIN {
        "Well above"
    } else if delta > 0.0 {
        "Above"
    } else if delta <= -WIDE_MARGIN {
        "Well below"
    } else {
        "Below"
    };
    format!("{phrase} the {group_label} average of {average:.0} (this model: {score:.0}).")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::benchmarks::Benchmarks;
    use crate::data::fixtures::laptop;
    use crate::data::Catalog;
    use crate::types::config::DEFAULT_PEER_GROUP_MIN;
    use std::collections::HashMap;
    use strum::IntoEnumIterator;

    fn synthetic(models: Vec<(&str, &str, &str)>) -> DataContext {
        let cpu = HashMap::from([
            ("Slow".to_string(), 20.0),
            ("Mid".to_string(), 50.0),
            ("Fast".to_string(), 80.0),
        ]);
        let laptops = models
            .into_iter()
            .map(|(id, series, cpu)| {
                let mut model = laptop(id, series);
                model.processor.name = cpu.to_string();
                model
            })
            .collect();
        DataContext {
            catalog: Catalog::new(laptops),
            benchmarks: Benchmarks::new(cpu, HashMap::new()),
            ..DataContext::default()
        }
    }

    #[test]
    fn large_series_is_used_as_peer_group() {
        let data = synthetic(vec![
            ("a", "X1", "Slow"),
            ("b", "X1", "Mid"),
            ("c", "X1", "Fast"),
            ("d", "T", "Fast"),
        ]);
        let model = data.model("a").expect("model should exist");
        let ctx = score_context(&data, model, Dimension::Cpu, DEFAULT_PEER_GROUP_MIN);
        assert_eq!(ctx.group, PeerGroup::Series("X1".to_string()));
        assert_eq!(ctx.group_label, "X1 series");
        assert_eq!(ctx.peer_count, 3);
        assert!((ctx.average - 50.0).abs() < 0.001);
        assert_eq!(ctx.percentile, 33);
        assert!(ctx.comparison_text.starts_with("Well below the X1 series"));
    }

    #[test]
    fn small_series_falls_back_to_catalog() {
        let data = synthetic(vec![
            ("a", "X1", "Slow"),
            ("b", "X1", "Mid"),
            ("c", "P", "Fast"),
            ("d", "T", "Fast"),
        ]);
        let model = data.model("c").expect("model should exist");
        let ctx = score_context(&data, model, Dimension::Cpu, DEFAULT_PEER_GROUP_MIN);
        assert_eq!(ctx.group, PeerGroup::Catalog);
        assert_eq!(ctx.group_label, "all models");
        assert_eq!(ctx.peer_count, 4);
        assert_eq!(ctx.percentile, 100);
    }

    #[test]
    fn ties_share_a_percentile() {
        let data = synthetic(vec![
            ("a", "X1", "Mid"),
            ("b", "X1", "Mid"),
            ("c", "X1", "Slow"),
            ("d", "X1", "Fast"),
        ]);
        let a = score_context(
            &data,
            data.model("a").expect("a"),
            Dimension::Cpu,
            DEFAULT_PEER_GROUP_MIN,
        );
        let b = score_context(
            &data,
            data.model("b").expect("b"),
            Dimension::Cpu,
            DEFAULT_PEER_GROUP_MIN,
        );
        assert_eq!(a.percentile, b.percentile);
        assert_eq!(a.percentile, 75);
    }

    #[test]
    fn configured_variant_replaces_its_catalog_entry() {
        let data = synthetic(vec![
            ("a", "X1", "Slow"),
            ("b", "X1", "Mid"),
            ("c", "X1", "Mid"),
        ]);
        let mut upgraded = data.model("a").expect("model should exist").clone();
        upgraded.processor.name = "Fast".to_string();
        let ctx = score_context(&data, &upgraded, Dimension::Cpu, DEFAULT_PEER_GROUP_MIN);
        assert_eq!(ctx.peer_count, 3);
        assert_eq!(ctx.percentile, 100);
        assert!((ctx.average - 60.0).abs() < 0.001);
    }

    #[test]
    fn model_outside_catalog_with_empty_catalog_is_its_own_peer() {
        let data = DataContext::default();
        let model = laptop("lonely", "Z");
        let ctx = score_context(&data, &model, Dimension::Display, DEFAULT_PEER_GROUP_MIN);
        assert_eq!(ctx.peer_count, 1);
        assert_eq!(ctx.percentile, 100);
        assert!(ctx.comparison_text.starts_with("In line with"));
    }

    #[test]
    fn bundled_contexts_respect_bounds() {
        let data = DataContext::bundled().expect("bundled data should parse");
        for model in data.catalog.iter() {
            for dimension in Dimension::iter() {
                let ctx = score_context(&data, model, dimension, DEFAULT_PEER_GROUP_MIN);
                assert!((1..=100).contains(&ctx.percentile));
                assert!((0.0..=100.0).contains(&ctx.average));
                assert!(!ctx.comparison_text.is_empty());
            }
        }
    }

    #[test]
    fn all_unknown_hardware_scores_give_floor_context() {
        let data = synthetic(vec![("a", "X1", "?"), ("b", "X1", "?"), ("c", "X1", "?")]);
        let ctx = score_context(
            &data,
            data.model("b").expect("model should exist"),
            Dimension::Cpu,
            DEFAULT_PEER_GROUP_MIN,
        );
        assert_eq!(ctx.score, 0.0);
        assert_eq!(ctx.average, 0.0);
        assert_eq!(ctx.percentile, 100);
    }
}
