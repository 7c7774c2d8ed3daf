use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBaseline {
    pub msrp: f64,
    pub historical_low: f64,
    pub typical_retail: f64,
}

impl PriceBaseline {
    /// `historical_low <= typical_retail <= msrp`, all non-negative.
    pub fn is_consistent(&self) -> bool {
        self.historical_low >= 0.0
            && self.historical_low <= self.typical_retail
            && self.typical_retail <= self.msrp
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PriceType {
    #[default]
    Retail,
    Sale,
    Refurbished,
    Used,
}

impl PriceType {
    pub fn is_new_condition(self) -> bool {
        matches!(self, Self::Retail | Self::Sale)
    }
}

/// One price observation from a retailer in the regional market (CHF).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwissPrice {
    pub id: String,
    pub laptop_id: String,
    pub retailer: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub date_added: NaiveDate,
    #[serde(default)]
    pub is_user_added: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_type: Option<PriceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SwissPrice {
    pub fn kind(&self) -> PriceType {
        self.price_type.unwrap_or_default()
    }
}

/// Market segment a model sells in, derived from its MSRP.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PriceTier {
    Budget,
    Mainstream,
    Premium,
}

impl PriceTier {
    pub const MAINSTREAM_FROM: f64 = 1000.0;
    pub const PREMIUM_FROM: f64 = 1800.0;

    pub fn from_msrp(msrp: f64) -> Self {
        if msrp >= Self::PREMIUM_FROM {
            PriceTier::Premium
        } else if msrp >= Self::MAINSTREAM_FROM {
            PriceTier::Mainstream
        } else {
            PriceTier::Budget
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_consistency_requires_ordered_prices() {
        let ok = PriceBaseline {
            msrp: 2000.0,
            historical_low: 1400.0,
            typical_retail: 1700.0,
        };
        assert!(ok.is_consistent());

        let inverted = PriceBaseline {
            msrp: 1500.0,
            historical_low: 1400.0,
            typical_retail: 1700.0,
        };
        assert!(!inverted.is_consistent());
    }

    #[test]
    fn price_tier_boundaries() {
        assert_eq!(PriceTier::from_msrp(999.0), PriceTier::Budget);
        assert_eq!(PriceTier::from_msrp(1000.0), PriceTier::Mainstream);
        assert_eq!(PriceTier::from_msrp(1800.0), PriceTier::Premium);
    }

    #[test]
    fn missing_price_type_reads_as_retail() {
        let price: SwissPrice = serde_json::from_str(
            r#"{"id":"p1","laptopId":"x1-carbon-g12","retailer":"Digitec","price":1899.0,
                "dateAdded":"2024-11-02"}"#,
        )
        .expect("price should parse");
        assert_eq!(price.kind(), PriceType::Retail);
        assert!(!price.is_user_added);
    }
}
