/// One row of a threshold table: scores `>= min` map to `value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<T> {
    pub min: f32,
    pub value: T,
}

/// Ordered threshold table. `bands` are sorted by descending `min`; scores
/// below every band (and NaN) map to `floor`.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds<T: 'static> {
    pub bands: &'static [Band<T>],
    pub floor: T,
}

impl<T: Copy> Thresholds<T> {
    pub fn classify(&self, score: f32) -> T {
        self.bands
            .iter()
            .find(|band| score >= band.min)
            .map(|band| band.value)
            .unwrap_or(self.floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: Thresholds<&str> = Thresholds {
        bands: &[
            Band {
                min: 70.0,
                value: "high",
            },
            Band {
                min: 40.0,
                value: "mid",
            },
        ],
        floor: "low",
    };

    #[test]
    fn classify_is_inclusive_at_boundaries() {
        assert_eq!(TABLE.classify(70.0), "high");
        assert_eq!(TABLE.classify(69.99), "mid");
        assert_eq!(TABLE.classify(40.0), "mid");
        assert_eq!(TABLE.classify(0.0), "low");
    }

    #[test]
    fn classify_maps_nan_to_floor() {
        assert_eq!(TABLE.classify(f32::NAN), "low");
    }

    #[test]
    fn bands_are_sorted_descending() {
        assert!(TABLE.bands.windows(2).all(|pair| pair[0].min > pair[1].min));
    }
}
