use crate::types::pricing::PriceTier;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    Rising,
    Stable,
    Falling,
}

/// Price trend of one hardware component category (RAM, SSD, GPU...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMarket {
    pub component: String,
    pub label: String,
    pub trend: Trend,
    pub change_percent: f64,
    #[serde(default)]
    pub affected_tiers: Vec<PriceTier>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ComponentMarket {
    pub fn affects(&self, tier: PriceTier) -> bool {
        self.affected_tiers.is_empty() || self.affected_tiers.contains(&tier)
    }

    /// Rise in percent, zero unless the trend is rising with a positive change.
    pub fn rise_percent(&self) -> f64 {
        match self.trend {
            Trend::Rising => self.change_percent.max(0.0),
            Trend::Stable | Trend::Falling => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlertSeverity {
    Good,
    Warning,
    Critical,
}
