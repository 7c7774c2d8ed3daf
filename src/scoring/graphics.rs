use super::bands::{Band, Thresholds};
use crate::data::benchmarks::Benchmarks;
use crate::types::laptop::Gpu;
use crate::types::scoring::{clamp_score, Score};
use serde::Serialize;
use std::collections::BTreeMap;
use strum::{Display, EnumIter};

/// Exact-name lookup in the GPU table. Unknown GPUs score 0.
pub fn gpu_score(benchmarks: &Benchmarks, gpu_name: &str) -> Score {
    benchmarks
        .gpu(gpu_name)
        .map(|row| clamp_score(row.score))
        .unwrap_or(0.0)
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GamingTier {
    None,
    Light,
    Medium,
    Heavy,
}

/// AAA titles at high settings.
pub const HEAVY_GAMING_MIN: f32 = 70.0;
/// Current titles at 1080p medium.
pub const MEDIUM_GAMING_MIN: f32 = 45.0;
/// Esports and indie titles at low settings.
pub const LIGHT_GAMING_MIN: f32 = 20.0;

pub const GAMING_TIERS: Thresholds<GamingTier> = Thresholds {
    bands: &[
        Band {
            min: HEAVY_GAMING_MIN,
            value: GamingTier::Heavy,
        },
        Band {
            min: MEDIUM_GAMING_MIN,
            value: GamingTier::Medium,
        },
        Band {
            min: LIGHT_GAMING_MIN,
            value: GamingTier::Light,
        },
    ],
    floor: GamingTier::None,
};

/// VRAM at which an unbenchmarked discrete GPU is assumed to handle medium settings.
const HEURISTIC_MEDIUM_VRAM_GB: u8 = 8;

impl GamingTier {
    pub fn advice(self) -> &'static str {
        match self {
            GamingTier::None => {
                "Not meant for gaming: office work, video and browser games only."
            }
            GamingTier::Light => {
                "Light gaming: esports and indie titles at low settings, older games at 1080p."
            }
            GamingTier::Medium => {
                "Solid 1080p gaming: current titles at medium to high settings."
            }
            GamingTier::Heavy => {
                "Enthusiast gaming: demanding AAA titles at high settings, 1440p capable."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GamingAssessment {
    pub tier: GamingTier,
    pub advice: &'static str,
    /// True when the tier comes from a benchmark row, false for the VRAM heuristic.
    pub benchmarked: bool,
    pub fps_estimates: BTreeMap<String, u16>,
}

/// Tier from the GPU's benchmark row, or from integrated/VRAM heuristics
/// when the table has no row for it.
pub fn gaming_tier(benchmarks: &Benchmarks, gpu: &Gpu) -> GamingTier {
    match benchmarks.gpu(&gpu.name) {
        Some(row) => GAMING_TIERS.classify(clamp_score(row.score)),
        None => heuristic_tier(gpu),
    }
}

fn heuristic_tier(gpu: &Gpu) -> GamingTier {
    if gpu.integrated {
        return GamingTier::None;
    }
    match gpu.vram_gb {
        Some(vram) if vram >= HEURISTIC_MEDIUM_VRAM_GB => GamingTier::Medium,
        _ => GamingTier::Light,
    }
}

pub fn gaming_assessment(benchmarks: &Benchmarks, gpu: &Gpu) -> GamingAssessment {
    let row = benchmarks.gpu(&gpu.name);
    let tier = gaming_tier(benchmarks, gpu);
    GamingAssessment {
        tier,
        advice: tier.advice(),
        benchmarked: row.is_some(),
        fps_estimates: row.map(|row| row.fps_estimates.clone()).unwrap_or_default(),
    }
}
