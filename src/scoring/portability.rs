use crate::types::laptop::Laptop;
use crate::types::scoring::{clamp_score, Score};

/// Weight at which the weight term sits at 50.
const WEIGHT_MIDPOINT_KG: f32 = 1.9;
/// Logistic steepness; smaller means a sharper drop around the midpoint.
const WEIGHT_SPREAD_KG: f32 = 0.35;
/// Wh per kg at which the endurance term reaches ~63.
const ENDURANCE_SCALE_WH_PER_KG: f32 = 30.0;
/// Lighter inputs are treated as this weight to keep Wh/kg finite.
const MIN_WEIGHT_KG: f32 = 0.5;

const WEIGHT_SHARE: f32 = 0.65;
const ENDURANCE_SHARE: f32 = 0.35;

/// Smooth blend of a logistic weight term (decreasing in weight) and a
/// saturating battery-per-kilogram term.
///
/// 1.0 kg / 57 Wh scores about 90; 2.8 kg / 80 Wh about 26.
pub fn portability_score_for(weight_kg: f32, battery_wh: f32) -> Score {
    if !weight_kg.is_finite() || !battery_wh.is_finite() {
        return 0.0;
    }
    let weight = weight_kg.max(MIN_WEIGHT_KG);
    let lightness = 100.0 / (1.0 + ((weight - WEIGHT_MIDPOINT_KG) / WEIGHT_SPREAD_KG).exp());
    let wh_per_kg = battery_wh.max(0.0) / weight;
    let endurance = 100.0 * (1.0 - (-wh_per_kg / ENDURANCE_SCALE_WH_PER_KG).exp());

    clamp_score(lightness * WEIGHT_SHARE + endurance * ENDURANCE_SHARE)
}

pub fn portability_score(laptop: &Laptop) -> Score {
    portability_score_for(laptop.weight_kg, laptop.battery_wh)
}
