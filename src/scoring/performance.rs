use crate::data::benchmarks::Benchmarks;
use crate::types::scoring::{clamp_score, Score};

/// Exact-name lookup in the CPU table. Unknown processors score 0.
pub fn performance_score(benchmarks: &Benchmarks, cpu_name: &str) -> Score {
    benchmarks
        .cpu_score(cpu_name)
        .map(clamp_score)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn table() -> Benchmarks {
        let cpu = HashMap::from([
            ("Intel Core Ultra 7 155H".to_string(), 70.0),
            ("Overclocked Sample".to_string(), 140.0),
        ]);
        Benchmarks::new(cpu, HashMap::new())
    }

    #[test]
    fn known_cpu_returns_table_score() {
        assert_eq!(performance_score(&table(), "Intel Core Ultra 7 155H"), 70.0);
    }

    #[test]
    fn unknown_cpu_scores_zero() {
        let benchmarks = table();
        for name in ["", "Intel Core Ultra 7 155h", "Apple M3", " Intel Core Ultra 7 155H"] {
            assert_eq!(performance_score(&benchmarks, name), 0.0, "{name:?}");
        }
    }

    #[test]
    fn out_of_range_table_values_are_clamped() {
        assert_eq!(performance_score(&table(), "Overclocked Sample"), 100.0);
    }
}
