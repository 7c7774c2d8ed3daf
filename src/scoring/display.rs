use crate::types::laptop::{Display, PanelType};
use crate::types::scoring::{clamp_score, Score};

const PPI_FLOOR: f32 = 100.0;
const PPI_CEILING: f32 = 250.0;
const REFRESH_FLOOR_HZ: f32 = 60.0;
const REFRESH_CEILING_HZ: f32 = 144.0;
const NITS_FLOOR: f32 = 250.0;
const NITS_CEILING: f32 = 500.0;
const SRGB_FLOOR: f32 = 45.0;

const WEIGHT_SHARPNESS: f32 = 0.25;
const WEIGHT_REFRESH: f32 = 0.15;
const WEIGHT_BRIGHTNESS: f32 = 0.20;
const WEIGHT_GAMUT: f32 = 0.20;
const WEIGHT_PANEL: f32 = 0.20;

fn ramp(value: f32, floor: f32, ceiling: f32) -> f32 {
    ((value - floor) / (ceiling - floor)).clamp(0.0, 1.0) * 100.0
}

fn panel_score(panel: PanelType) -> f32 {
    match panel {
        PanelType::Oled => 100.0,
        PanelType::MiniLed => 90.0,
        PanelType::Ips => 60.0,
        PanelType::Tn => 20.0,
    }
}

pub fn pixel_density(display: &Display) -> f32 {
    if display.size_inch <= 0.0 {
        return 0.0;
    }
    let diagonal_px = (display.width as f32).hypot(display.height as f32);
    diagonal_px / display.size_inch
}

pub fn display_score(display: &Display) -> Score {
    let sharpness = ramp(pixel_density(display), PPI_FLOOR, PPI_CEILING);
    let refresh = ramp(display.refresh_hz as f32, REFRESH_FLOOR_HZ, REFRESH_CEILING_HZ);
    let brightness = ramp(display.brightness_nits as f32, NITS_FLOOR, NITS_CEILING);
    let gamut = ramp(display.srgb_coverage as f32, SRGB_FLOOR, 100.0);

    clamp_score(
        sharpness * WEIGHT_SHARPNESS
            + refresh * WEIGHT_REFRESH
            + brightness * WEIGHT_BRIGHTNESS
            + gamut * WEIGHT_GAMUT
            + panel_score(display.panel) * WEIGHT_PANEL,
    )
}
