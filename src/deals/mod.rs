pub mod market;

use crate::scoring::bands::{Band, Thresholds};
use crate::types::market::{AlertSeverity, ComponentMarket};
use crate::types::pricing::{PriceBaseline, PriceTier, SwissPrice};
use market::{market_alert_for_tier, MarketAlert};
use serde::Serialize;
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BuySignal {
    BuyNow,
    GoodDeal,
    Neutral,
    Wait,
    Overpriced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuySignalMeta {
    pub label: &'static str,
    pub color: &'static str,
    pub bg_class: &'static str,
    pub text_class: &'static str,
    pub border_class: &'static str,
}

pub fn buy_signal_meta(signal: BuySignal) -> BuySignalMeta {
    match signal {
        BuySignal::BuyNow => BuySignalMeta {
            label: "Buy now",
            color: "#16a34a",
            bg_class: "bg-green-50",
            text_class: "text-green-700",
            border_class: "border-green-300",
        },
        BuySignal::GoodDeal => BuySignalMeta {
            label: "Good deal",
            color: "#65a30d",
            bg_class: "bg-lime-50",
            text_class: "text-lime-700",
            border_class: "border-lime-300",
        },
        BuySignal::Neutral => BuySignalMeta {
            label: "Fair price",
            color: "#6b7280",
            bg_class: "bg-gray-50",
            text_class: "text-gray-700",
            border_class: "border-gray-300",
        },
        BuySignal::Wait => BuySignalMeta {
            label: "Wait",
            color: "#d97706",
            bg_class: "bg-amber-50",
            text_class: "text-amber-700",
            border_class: "border-amber-300",
        },
        BuySignal::Overpriced => BuySignalMeta {
            label: "Overpriced",
            color: "#dc2626",
            bg_class: "bg-red-50",
            text_class: "text-red-700",
            border_class: "border-red-300",
        },
    }
}

/// Position used when the baseline has no usable range
/// (`msrp <= historical_low`, or a non-finite bound).
pub const DEGENERATE_POSITION: f64 = 50.0;

/// Where `best_price` sits between MSRP (0) and the historical low (100),
/// clamped to `[0, 100]`.
pub fn price_position(baseline: &PriceBaseline, best_price: f64) -> f64 {
    let range = baseline.msrp - baseline.historical_low;
    if range.is_nan() || range <= f64::EPSILON {
        return DEGENERATE_POSITION;
    }
    let position = (baseline.msrp - best_price) / range * 100.0;
    if position.is_nan() {
        return DEGENERATE_POSITION;
    }
    // `<=` also folds -0.0 into 0.0.
    if position <= 0.0 {
        0.0
    } else {
        position.min(100.0)
    }
}

const SIGNALS: Thresholds<BuySignal> = Thresholds {
    bands: &[
        Band {
            min: 80.0,
            value: BuySignal::BuyNow,
        },
        Band {
            min: 60.0,
            value: BuySignal::GoodDeal,
        },
        Band {
            min: 40.0,
            value: BuySignal::Neutral,
        },
        Band {
            min: 15.0,
            value: BuySignal::Wait,
        },
    ],
    floor: BuySignal::Overpriced,
};

/// Signal from price alone; anything above MSRP is overpriced.
pub fn signal_for_position(baseline: &PriceBaseline, best_price: f64) -> BuySignal {
    if best_price > baseline.msrp {
        return BuySignal::Overpriced;
    }
    SIGNALS.classify(price_position(baseline, best_price) as f32)
}

/// Market pressure adjustment: rising component costs make waiting
/// expensive, falling ones make it cheap.
pub fn adjust_for_market(signal: BuySignal, severity: AlertSeverity) -> BuySignal {
    match (signal, severity) {
        (BuySignal::Wait, AlertSeverity::Critical) => BuySignal::Neutral,
        (BuySignal::Neutral, AlertSeverity::Good) => BuySignal::Wait,
        (signal, _) => signal,
    }
}

/// Cheapest new-condition observation for `laptop_id`.
pub fn best_price<'a>(prices: &'a [SwissPrice], laptop_id: &str) -> Option<&'a SwissPrice> {
    prices
        .iter()
        .filter(|price| price.laptop_id == laptop_id)
        .filter(|price| price.kind().is_new_condition())
        .filter(|price| price.price.is_finite() && price.price > 0.0)
        .min_by(|a, b| a.price.total_cmp(&b.price))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealAssessment {
    pub laptop_id: String,
    pub baseline: PriceBaseline,
    pub tier: PriceTier,
    pub best_price: Option<SwissPrice>,
    pub position: Option<f64>,
    pub signal: BuySignal,
    pub meta: BuySignalMeta,
    pub market: MarketAlert,
}

/// Full buy/wait view for one model. Without any observed price the
/// signal is neutral before the market adjustment.
pub fn assess_deal(
    laptop_id: &str,
    baseline: &PriceBaseline,
    prices: &[SwissPrice],
    markets: &[ComponentMarket],
) -> DealAssessment {
    let tier = PriceTier::from_msrp(baseline.msrp);
    let best = best_price(prices, laptop_id).cloned();
    let position = best
        .as_ref()
        .map(|price| price_position(baseline, price.price));
    let base_signal = best
        .as_ref()
        .map(|price| signal_for_position(baseline, price.price))
        .unwrap_or(BuySignal::Neutral);
    let market = market_alert_for_tier(markets, tier);
    let signal = adjust_for_market(base_signal, market.severity);

    DealAssessment {
        laptop_id: laptop_id.to_string(),
        baseline: *baseline,
        tier,
        best_price: best,
        position,
        signal,
        meta: buy_signal_meta(signal),
        market,
    }
}
