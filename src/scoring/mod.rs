pub mod bands;
pub mod connectivity;
pub mod display;
pub mod graphics;
pub mod memory;
pub mod performance;
pub mod portability;

use crate::data::benchmarks::Benchmarks;
use crate::data::Catalog;
use crate::types::laptop::Laptop;
use crate::types::scoring::{Dimension, ModelScores, Score, ScoreDimensions, ScoreWeights};

pub use graphics::{gaming_tier, gpu_score, GamingTier};
pub use performance::performance_score;
pub use portability::{portability_score, portability_score_for};

pub fn dimension_score(benchmarks: &Benchmarks, laptop: &Laptop, dimension: Dimension) -> Score {
    match dimension {
        Dimension::Cpu => performance_score(benchmarks, &laptop.processor.name),
        Dimension::Gpu => gpu_score(benchmarks, &laptop.gpu.name),
        Dimension::Display => display::display_score(&laptop.display),
        Dimension::Memory => memory::memory_score(&laptop.ram, &laptop.storage),
        Dimension::Connectivity => connectivity::connectivity_score(&laptop.connectivity),
        Dimension::Portability => portability_score(laptop),
    }
}

pub fn score_dimensions(benchmarks: &Benchmarks, laptop: &Laptop) -> ScoreDimensions {
    ScoreDimensions::new(
        dimension_score(benchmarks, laptop, Dimension::Cpu),
        dimension_score(benchmarks, laptop, Dimension::Gpu),
        dimension_score(benchmarks, laptop, Dimension::Display),
        dimension_score(benchmarks, laptop, Dimension::Memory),
        dimension_score(benchmarks, laptop, Dimension::Connectivity),
        dimension_score(benchmarks, laptop, Dimension::Portability),
    )
}

pub fn model_scores(benchmarks: &Benchmarks, laptop: &Laptop, weights: &ScoreWeights) -> ModelScores {
    let dimensions = score_dimensions(benchmarks, laptop);
    ModelScores {
        overall: dimensions.weighted(weights),
        dimensions,
    }
}

/// Catalog models (optionally one series) by overall score, best first;
/// equal scores are ordered by id.
pub fn rank_catalog<'a>(
    benchmarks: &Benchmarks,
    catalog: &'a Catalog,
    weights: &ScoreWeights,
    series: Option<&str>,
) -> Vec<(&'a Laptop, ModelScores)> {
    let mut ranked: Vec<(&Laptop, ModelScores)> = catalog
        .iter()
        .filter(|laptop| series.map_or(true, |series| laptop.series == series))
        .map(|laptop| (laptop, model_scores(benchmarks, laptop, weights)))
        .collect();
    ranked.sort_by(|(a, a_scores), (b, b_scores)| {
        b_scores
            .overall
            .total_cmp(&a_scores.overall)
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::laptop;
    use crate::data::DataContext;
    use strum::IntoEnumIterator;

    #[test]
    fn unknown_components_score_zero_without_failing() {
        let benchmarks = Benchmarks::default();
        let model = laptop("synthetic", "X");
        let scores = model_scores(&benchmarks, &model, &ScoreWeights::DEFAULT);
        assert_eq!(scores.dimensions.cpu, 0.0);
        assert_eq!(scores.dimensions.gpu, 0.0);
        assert!(scores.dimensions.display > 0.0);
        assert!((0.0..=100.0).contains(&scores.overall));
    }

    #[test]
    fn bundled_catalog_scores_stay_in_range() {
        let data = DataContext::bundled().expect("bundled data should parse");
        for model in data.catalog.iter() {
            let scores = model_scores(&data.benchmarks, model, &ScoreWeights::DEFAULT);
            for dimension in Dimension::iter() {
                let score = scores.dimensions.get(dimension);
                assert!(
                    (0.0..=100.0).contains(&score),
                    "{} {dimension} = {score}",
                    model.id
                );
            }
            assert!((0.0..=100.0).contains(&scores.overall));
        }
    }

    #[test]
    fn overall_is_the_weighted_sum() {
        let data = DataContext::bundled().expect("bundled data should parse");
        let model = data.model("x1-carbon-g12").expect("model should exist");
        let scores = model_scores(&data.benchmarks, model, &ScoreWeights::DEFAULT);
        let w = ScoreWeights::DEFAULT;
        let d = scores.dimensions;
        let expected = d.cpu * w.cpu
            + d.gpu * w.gpu
            + d.display * w.display
            + d.memory * w.memory
            + d.connectivity * w.connectivity
            + d.portability * w.portability;
        assert!((scores.overall - expected).abs() < 0.001);
    }

    #[test]
    fn cpu_only_weights_reduce_overall_to_cpu_score() {
        let data = DataContext::bundled().expect("bundled data should parse");
        let model = data.model("legion-pro-7i-g9").expect("model should exist");
        let weights = ScoreWeights {
            cpu: 1.0,
            gpu: 0.0,
            display: 0.0,
            memory: 0.0,
            connectivity: 0.0,
            portability: 0.0,
        };
        let scores = model_scores(&data.benchmarks, model, &weights);
        assert!((scores.overall - scores.dimensions.cpu).abs() < 0.001);
    }

    #[test]
    fn ranking_is_descending_and_filters_series() {
        let data = DataContext::bundled().expect("bundled data should parse");
        let ranked = rank_catalog(&data.benchmarks, &data.catalog, &ScoreWeights::DEFAULT, None);
        assert_eq!(ranked.len(), data.catalog.len());
        for pair in ranked.windows(2) {
            assert!(pair[0].1.overall >= pair[1].1.overall);
        }

        let x1 = rank_catalog(
            &data.benchmarks,
            &data.catalog,
            &ScoreWeights::DEFAULT,
            Some("X1"),
        );
        assert_eq!(x1.len(), data.catalog.series_members("X1").len());
        assert!(x1.iter().all(|(laptop, _)| laptop.series == "X1"));
    }

    #[test]
    fn equal_scores_rank_by_id() {
        let catalog = Catalog::new(vec![laptop("b", "X"), laptop("a", "X")]);
        let ranked = rank_catalog(
            &Benchmarks::default(),
            &catalog,
            &ScoreWeights::DEFAULT,
            None,
        );
        let ids: Vec<&str> = ranked.iter().map(|(laptop, _)| laptop.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
