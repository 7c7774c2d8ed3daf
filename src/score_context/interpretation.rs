use crate::scoring::bands::{Band, Thresholds};
use crate::types::scoring::{Dimension, Score};

pub const EXCEPTIONAL_MIN: f32 = 90.0;
pub const STRONG_MIN: f32 = 70.0;
pub const ADEQUATE_MIN: f32 = 50.0;

static CPU: Thresholds<&str> = Thresholds {
    bands: &[
        Band {
            min: EXCEPTIONAL_MIN,
            value: "Desktop-class processor: compiles, renders and simulates without compromise.",
        },
        Band {
            min: STRONG_MIN,
            value: "Fast processor: comfortable with development, photo editing and heavy multitasking.",
        },
        Band {
            min: ADEQUATE_MIN,
            value: "Capable processor for office work, browsing and light creative tasks.",
        },
    ],
    floor: "Entry-level processor: fine for documents and video, slow under sustained load.",
};

static GPU: Thresholds<&str> = Thresholds {
    bands: &[
        Band {
            min: EXCEPTIONAL_MIN,
            value: "Top-tier graphics: high-refresh 1440p gaming and GPU compute workloads.",
        },
        Band {
            min: STRONG_MIN,
            value: "Strong dedicated graphics: AAA games at high settings and 3D work.",
        },
        Band {
            min: ADEQUATE_MIN,
            value: "Entry dedicated graphics: 1080p gaming at medium settings and CAD.",
        },
    ],
    floor: "Integrated-class graphics: display output, video playback and light games.",
};

static DISPLAY: Thresholds<&str> = Thresholds {
    bands: &[
        Band {
            min: EXCEPTIONAL_MIN,
            value: "Reference-grade panel: sharp, bright, wide gamut and fluid motion.",
        },
        Band {
            min: STRONG_MIN,
            value: "Very good panel suited to color work and long sessions.",
        },
        Band {
            min: ADEQUATE_MIN,
            value: "Solid everyday panel with acceptable brightness and colors.",
        },
    ],
    floor: "Basic panel: dim or washed out, an upgrade option is worth checking.",
};

static MEMORY: Thresholds<&str> = Thresholds {
    bands: &[
        Band {
            min: EXCEPTIONAL_MIN,
            value: "Workstation memory and storage: large VMs and datasets fit comfortably.",
        },
        Band {
            min: STRONG_MIN,
            value: "Generous memory and storage for years of heavy use.",
        },
        Band {
            min: ADEQUATE_MIN,
            value: "Enough memory and storage for typical work today.",
        },
    ],
    floor: "Tight memory or storage: expect swapping and cleanup sooner than later.",
};

static CONNECTIVITY: Thresholds<&str> = Thresholds {
    bands: &[
        Band {
            min: EXCEPTIONAL_MIN,
            value: "Complete port selection: no dongles needed, latest wireless.",
        },
        Band {
            min: STRONG_MIN,
            value: "Well connected: Thunderbolt or USB-C plus legacy ports and modern Wi-Fi.",
        },
        Band {
            min: ADEQUATE_MIN,
            value: "Covers the essentials; some setups will need an adapter.",
        },
    ],
    floor: "Sparse ports: plan on a dock or hub.",
};

static PORTABILITY: Thresholds<&str> = Thresholds {
    bands: &[
        Band {
            min: EXCEPTIONAL_MIN,
            value: "Ultraportable: light enough to forget and lasts a full day.",
        },
        Band {
            min: STRONG_MIN,
            value: "Easy to carry daily with good battery life for its weight.",
        },
        Band {
            min: ADEQUATE_MIN,
            value: "Portable for occasional travel; bring the charger.",
        },
    ],
    floor: "Desk-bound: heavy for its battery, best used near an outlet.",
};

fn table(dimension: Dimension) -> &'static Thresholds<&'static str> {
    match dimension {
        Dimension::Cpu => &CPU,
        Dimension::Gpu => &GPU,
        Dimension::Display => &DISPLAY,
        Dimension::Memory => &MEMORY,
        Dimension::Connectivity => &CONNECTIVITY,
        Dimension::Portability => &PORTABILITY,
    }
}

/// Static explanation of what a score means for one dimension.
pub fn interpretation(dimension: Dimension, score: Score) -> &'static str {
    table(dimension).classify(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_dimension_and_band_has_text() {
        let probes = [
            0.0,
            ADEQUATE_MIN - 0.01,
            ADEQUATE_MIN,
            STRONG_MIN - 0.01,
            STRONG_MIN,
            EXCEPTIONAL_MIN - 0.01,
            EXCEPTIONAL_MIN,
            100.0,
        ];
        for dimension in Dimension::iter() {
            for score in probes {
                assert!(
                    !interpretation(dimension, score).is_empty(),
                    "{dimension} at {score}"
                );
            }
        }
    }

    #[test]
    fn boundaries_select_the_upper_band() {
        for dimension in Dimension::iter() {
            assert_eq!(
                interpretation(dimension, EXCEPTIONAL_MIN),
                interpretation(dimension, 100.0)
            );
            assert_ne!(
                interpretation(dimension, EXCEPTIONAL_MIN),
                interpretation(dimension, EXCEPTIONAL_MIN - 0.01)
            );
            assert_ne!(
                interpretation(dimension, ADEQUATE_MIN),
                interpretation(dimension, ADEQUATE_MIN - 0.01)
            );
        }
    }
}
