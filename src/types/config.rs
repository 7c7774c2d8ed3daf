use crate::error::LapscoreError;
use crate::types::scoring::ScoreWeights;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

pub const DEFAULT_PEER_GROUP_MIN: usize = 3;
pub const DEFAULT_API_KEY_ENV: &str = "PRICE_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LapscoreConfig {
    pub scoring: Option<ScoringConfig>,
    pub data: Option<DataConfig>,
    pub prices: Option<PricesConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub weights: Option<HashMap<String, f32>>,
    pub peer_group_min: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricesConfig {
    pub remote_url: Option<String>,
    pub api_url: Option<String>,
    pub api_key_env: Option<String>,
}

const ALLOWED_WEIGHT_KEYS: [&str; 6] = [
    "cpu",
    "gpu",
    "display",
    "memory",
    "connectivity",
    "portability",
];

impl LapscoreConfig {
    pub fn weights(&self) -> ScoreWeights {
        let defaults = ScoreWeights::DEFAULT;
        match self.scoring.as_ref().and_then(|s| s.weights.as_ref()) {
            Some(weights) => ScoreWeights {
                cpu: *weights.get("cpu").unwrap_or(&defaults.cpu),
                gpu: *weights.get("gpu").unwrap_or(&defaults.gpu),
                display: *weights.get("display").unwrap_or(&defaults.display),
                memory: *weights.get("memory").unwrap_or(&defaults.memory),
                connectivity: *weights
                    .get("connectivity")
                    .unwrap_or(&defaults.connectivity),
                portability: *weights.get("portability").unwrap_or(&defaults.portability),
            },
            None => defaults,
        }
    }

    pub fn peer_group_min(&self) -> usize {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.peer_group_min)
            .unwrap_or(DEFAULT_PEER_GROUP_MIN)
    }

    pub fn data_dir(&self) -> Option<&PathBuf> {
        self.data.as_ref().and_then(|data| data.dir.as_ref())
    }

    pub fn remote_url(&self) -> Option<&str> {
        self.prices
            .as_ref()
            .and_then(|prices| prices.remote_url.as_deref())
    }

    pub fn api_url(&self) -> Option<&str> {
        self.prices.as_ref().and_then(|prices| prices.api_url.as_deref())
    }

    pub fn api_key_env(&self) -> &str {
        self.prices
            .as_ref()
            .and_then(|prices| prices.api_key_env.as_deref())
            .unwrap_or(DEFAULT_API_KEY_ENV)
    }

    pub fn validate(&self) -> Result<(), LapscoreError> {
        if let Some(weights) = self.scoring.as_ref().and_then(|s| s.weights.as_ref()) {
            let mut unknown = weights
                .keys()
                .filter(|key| !ALLOWED_WEIGHT_KEYS.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(LapscoreError::ConfigParse(format!(
                    "scoring.weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.weights().as_array();
        if weights.iter().any(|weight| !(0.0..=1.0).contains(weight)) {
            return Err(LapscoreError::ConfigParse(
                "scoring.weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum: f32 = weights.iter().sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(LapscoreError::ConfigParse(format!(
                "scoring.weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        if self.peer_group_min() == 0 {
            return Err(LapscoreError::ConfigParse(
                "scoring.peer_group_min must be greater than 0".to_string(),
            ));
        }

        if let Some(prices) = &self.prices {
            if prices
                .api_key_env
                .as_deref()
                .is_some_and(|name| name.trim().is_empty())
            {
                return Err(LapscoreError::ConfigParse(
                    "prices.api_key_env must be a non-empty variable name".to_string(),
                ));
            }
        }

        Ok(())
    }
}
