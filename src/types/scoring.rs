use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

pub type Score = f32;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Dimension {
    Cpu,
    Gpu,
    Display,
    Memory,
    Connectivity,
    Portability,
}

/// Per-dimension scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDimensions {
    pub cpu: Score,
    pub gpu: Score,
    pub display: Score,
    pub memory: Score,
    pub connectivity: Score,
    pub portability: Score,
}

impl ScoreDimensions {
    pub fn new(
        cpu: Score,
        gpu: Score,
        display: Score,
        memory: Score,
        connectivity: Score,
        portability: Score,
    ) -> Self {
        Self {
            cpu: clamp_score(cpu),
            gpu: clamp_score(gpu),
            display: clamp_score(display),
            memory: clamp_score(memory),
            connectivity: clamp_score(connectivity),
            portability: clamp_score(portability),
        }
    }

    pub fn get(&self, dimension: Dimension) -> Score {
        match dimension {
            Dimension::Cpu => self.cpu,
            Dimension::Gpu => self.gpu,
            Dimension::Display => self.display,
            Dimension::Memory => self.memory,
            Dimension::Connectivity => self.connectivity,
            Dimension::Portability => self.portability,
        }
    }

    pub fn weighted(&self, weights: &ScoreWeights) -> Score {
        let total = self.cpu * weights.cpu
            + self.gpu * weights.gpu
            + self.display * weights.display
            + self.memory * weights.memory
            + self.connectivity * weights.connectivity
            + self.portability * weights.portability;
        clamp_score(total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub cpu: f32,
    pub gpu: f32,
    pub display: f32,
    pub memory: f32,
    pub connectivity: f32,
    pub portability: f32,
}

impl ScoreWeights {
    pub const DEFAULT: ScoreWeights = ScoreWeights {
        cpu: 0.25,
        gpu: 0.15,
        display: 0.20,
        memory: 0.15,
        connectivity: 0.10,
        portability: 0.15,
    };

    pub fn as_array(&self) -> [f32; 6] {
        [
            self.cpu,
            self.gpu,
            self.display,
            self.memory,
            self.connectivity,
            self.portability,
        ]
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelScores {
    pub dimensions: ScoreDimensions,
    pub overall: Score,
}

pub fn clamp_score(score: Score) -> Score {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn default_weights_sum_to_one() {
        let sum: f32 = ScoreWeights::DEFAULT.as_array().iter().sum();
        assert!((sum - 1.0).abs() < 0.001);
    }

    #[test]
    fn dimensions_are_clamped_on_construction() {
        let dims = ScoreDimensions::new(120.0, -4.0, f32::NAN, 50.0, 100.0, 0.0);
        assert_eq!(dims.cpu, 100.0);
        assert_eq!(dims.gpu, 0.0);
        assert_eq!(dims.display, 0.0);
        assert_eq!(dims.get(Dimension::Memory), 50.0);
    }

    #[test]
    fn dimension_parses_case_insensitively() {
        assert_eq!(Dimension::from_str("CPU").expect("should parse"), Dimension::Cpu);
        assert_eq!(Dimension::Portability.to_string(), "portability");
    }
}
