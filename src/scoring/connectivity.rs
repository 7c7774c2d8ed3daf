use crate::types::laptop::{Connectivity, WifiStandard};
use crate::types::scoring::{clamp_score, Score};

const POINTS_PER_THUNDERBOLT: f32 = 15.0;
const POINTS_PER_USB_C: f32 = 5.0;
const POINTS_PER_USB_A: f32 = 7.5;
const PORTS_COUNTED: u8 = 2;
const POINTS_HDMI: f32 = 10.0;
const POINTS_ETHERNET: f32 = 10.0;
const POINTS_SD_CARD: f32 = 5.0;
const POINTS_CELLULAR: f32 = 5.0;

fn wifi_points(wifi: WifiStandard) -> f32 {
    match wifi {
        WifiStandard::Wifi5 => 0.0,
        WifiStandard::Wifi6 => 5.0,
        WifiStandard::Wifi6e => 10.0,
        WifiStandard::Wifi7 => 15.0,
    }
}

/// Additive port inventory; only the first two ports of each kind count.
pub fn connectivity_score(ports: &Connectivity) -> Score {
    let mut score = 0.0;
    score += f32::from(ports.thunderbolt.min(PORTS_COUNTED)) * POINTS_PER_THUNDERBOLT;
    score += f32::from(ports.usb_c.min(PORTS_COUNTED)) * POINTS_PER_USB_C;
    score += f32::from(ports.usb_a.min(PORTS_COUNTED)) * POINTS_PER_USB_A;
    if ports.hdmi {
        score += POINTS_HDMI;
    }
    if ports.ethernet {
        score += POINTS_ETHERNET;
    }
    if ports.sd_card {
        score += POINTS_SD_CARD;
    }
    if ports.cellular {
        score += POINTS_CELLULAR;
    }
    score += wifi_points(ports.wifi);
    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ports(wifi: WifiStandard) -> Connectivity {
        Connectivity {
            thunderbolt: 0,
            usb_c: 0,
            usb_a: 0,
            hdmi: false,
            ethernet: false,
            sd_card: false,
            wifi,
            cellular: false,
        }
    }

    #[test]
    fn full_inventory_scores_one_hundred() {
        let full = Connectivity {
            thunderbolt: 4,
            usb_c: 3,
            usb_a: 3,
            hdmi: true,
            ethernet: true,
            sd_card: true,
            wifi: WifiStandard::Wifi7,
            cellular: true,
        };
        assert_eq!(connectivity_score(&full), 100.0);
    }

    #[test]
    fn bare_wifi5_scores_zero() {
        assert_eq!(connectivity_score(&ports(WifiStandard::Wifi5)), 0.0);
    }

    #[test]
    fn thunderbolt_outweighs_plain_usb_c() {
        let mut tb = ports(WifiStandard::Wifi6e);
        tb.thunderbolt = 2;
        let mut usb = ports(WifiStandard::Wifi6e);
        usb.usb_c = 2;
        assert!(connectivity_score(&tb) > connectivity_score(&usb));
    }
}
