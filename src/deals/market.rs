use crate::types::market::{AlertSeverity, ComponentMarket, Trend};
use crate::types::pricing::PriceTier;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendMeta {
    pub color: &'static str,
    pub arrow: &'static str,
    pub label: &'static str,
}

pub fn trend_meta(trend: Trend) -> TrendMeta {
    match trend {
        Trend::Rising => TrendMeta {
            color: "#dc2626",
            arrow: "↑",
            label: "Rising",
        },
        Trend::Stable => TrendMeta {
            color: "#6b7280",
            arrow: "→",
            label: "Stable",
        },
        Trend::Falling => TrendMeta {
            color: "#16a34a",
            arrow: "↓",
            label: "Falling",
        },
    }
}

/// A single rise at or above this is critical on its own.
pub const CRITICAL_SINGLE_RISE_PERCENT: f64 = 25.0;
/// Rises at or above this count towards the multi-component critical rule.
pub const CRITICAL_BROAD_RISE_PERCENT: f64 = 10.0;
/// Number of components rising at `CRITICAL_BROAD_RISE_PERCENT` that is critical.
pub const CRITICAL_BROAD_RISE_COUNT: usize = 2;
/// Smallest rise that raises a warning.
pub const WARNING_RISE_PERCENT: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketAlert {
    pub severity: AlertSeverity,
    /// Components whose rise drove the severity, largest first.
    pub drivers: Vec<String>,
    pub message: String,
}

/// Decision table, first matching row wins:
///
/// | # | condition                                            | severity |
/// |---|------------------------------------------------------|----------|
/// | 1 | any rising market with change >= 25%                 | critical |
/// | 2 | >= 2 rising markets with change >= 10%               | critical |
/// | 3 | any rising market with change >= 5%                  | warning  |
/// | 4 | otherwise (stable, falling, or rising under 5%)      | good     |
pub fn alert_severity<'a, I>(markets: I) -> AlertSeverity
where
    I: IntoIterator<Item = &'a ComponentMarket>,
{
    let rises: Vec<f64> = markets.into_iter().map(ComponentMarket::rise_percent).collect();
    let count_at = |threshold: f64| rises.iter().filter(|rise| **rise >= threshold).count();

    if count_at(CRITICAL_SINGLE_RISE_PERCENT) >= 1 {
        AlertSeverity::Critical
    } else if count_at(CRITICAL_BROAD_RISE_PERCENT) >= CRITICAL_BROAD_RISE_COUNT {
        AlertSeverity::Critical
    } else if count_at(WARNING_RISE_PERCENT) >= 1 {
        AlertSeverity::Warning
    } else {
        AlertSeverity::Good
    }
}

pub fn market_alert<'a, I>(markets: I) -> MarketAlert
where
    I: IntoIterator<Item = &'a ComponentMarket>,
{
    let markets: Vec<&ComponentMarket> = markets.into_iter().collect();
    let severity = alert_severity(markets.iter().copied());

    let mut rising: Vec<&ComponentMarket> = markets
        .iter()
        .copied()
        .filter(|market| market.rise_percent() >= WARNING_RISE_PERCENT)
        .collect();
    rising.sort_by(|a, b| b.rise_percent().total_cmp(&a.rise_percent()));
    let drivers: Vec<String> = rising.iter().map(|market| market.label.clone()).collect();

    let message = match severity {
        AlertSeverity::Critical => format!(
            "Component prices are climbing fast ({}); expect laptop prices to follow.",
            drivers.join(", ")
        ),
        AlertSeverity::Warning => format!(
            "Some component prices are rising ({}); current deals may not last.",
            drivers.join(", ")
        ),
        AlertSeverity::Good => {
            "Component prices are stable or falling; no pressure to buy early.".to_string()
        }
    };

    MarketAlert {
        severity,
        drivers,
        message,
    }
}

/// Alert over only the markets that affect `tier`.
pub fn market_alert_for_tier(markets: &[ComponentMarket], tier: PriceTier) -> MarketAlert {
    market_alert(markets.iter().filter(|market| market.affects(tier)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn market(component: &str, trend: Trend, change: f64, tiers: Vec<PriceTier>) -> ComponentMarket {
        ComponentMarket {
            component: component.to_string(),
            label: component.to_uppercase(),
            trend,
            change_percent: change,
            affected_tiers: tiers,
            summary: String::new(),
            source: None,
        }
    }

    #[test]
    fn every_trend_has_meta() {
        for trend in Trend::iter() {
            let meta = trend_meta(trend);
            assert!(!meta.arrow.is_empty());
            assert!(!meta.label.is_empty());
            assert!(meta.color.starts_with('#'));
        }
    }

    #[test]
    fn decision_table_rows() {
        let cases = [
            (vec![market("ram", Trend::Rising, 30.0, vec![])], AlertSeverity::Critical),
            (
                vec![
                    market("ram", Trend::Rising, 12.0, vec![]),
                    market("ssd", Trend::Rising, 10.0, vec![]),
                ],
                AlertSeverity::Critical,
            ),
            (
                vec![
                    market("ram", Trend::Rising, 12.0, vec![]),
                    market("ssd", Trend::Rising, 8.0, vec![]),
                ],
                AlertSeverity::Warning,
            ),
            (vec![market("ram", Trend::Rising, 5.0, vec![])], AlertSeverity::Warning),
            (vec![market("ram", Trend::Rising, 4.9, vec![])], AlertSeverity::Good),
            (vec![market("ram", Trend::Falling, -30.0, vec![])], AlertSeverity::Good),
            (vec![market("ram", Trend::Stable, 40.0, vec![])], AlertSeverity::Good),
            (vec![market("ram", Trend::Rising, -30.0, vec![])], AlertSeverity::Good),
            (vec![], AlertSeverity::Good),
        ];
        for (markets, expected) in cases {
            assert_eq!(alert_severity(&markets), expected, "{markets:?}");
        }
    }

    #[test]
    fn tier_filter_ignores_unrelated_markets() {
        let markets = vec![
            market("gpu", Trend::Rising, 30.0, vec![PriceTier::Premium]),
            market("ram", Trend::Rising, 6.0, vec![]),
        ];
        assert_eq!(
            market_alert_for_tier(&markets, PriceTier::Premium).severity,
            AlertSeverity::Critical
        );
        assert_eq!(
            market_alert_for_tier(&markets, PriceTier::Budget).severity,
            AlertSeverity::Warning
        );
    }

    #[test]
    fn alert_lists_drivers_largest_first() {
        let markets = vec![
            market("ssd", Trend::Rising, 8.0, vec![]),
            market("ram", Trend::Rising, 12.0, vec![]),
            market("panel", Trend::Falling, -6.0, vec![]),
        ];
        let alert = market_alert(&markets);
        assert_eq!(alert.severity, AlertSeverity::Warning);
        assert_eq!(alert.drivers, vec!["RAM".to_string(), "SSD".to_string()]);
        assert!(alert.message.contains("RAM, SSD"));
    }
}
