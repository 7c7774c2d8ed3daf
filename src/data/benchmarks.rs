use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuBenchmark {
    /// Normalized score in `[0, 100]`.
    pub score: f32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fps_estimates: BTreeMap<String, u16>,
}

/// Read-only lookup tables keyed by the exact component name.
#[derive(Debug, Clone, Default)]
pub struct Benchmarks {
    cpu: HashMap<String, f32>,
    gpu: HashMap<String, GpuBenchmark>,
}

impl Benchmarks {
    pub fn new(cpu: HashMap<String, f32>, gpu: HashMap<String, GpuBenchmark>) -> Self {
        Self { cpu, gpu }
    }

    pub fn cpu_score(&self, name: &str) -> Option<f32> {
        self.cpu.get(name).copied()
    }

    pub fn gpu(&self, name: &str) -> Option<&GpuBenchmark> {
        self.gpu.get(name)
    }

    pub fn cpu_len(&self) -> usize {
        self.cpu.len()
    }

    pub fn gpu_len(&self) -> usize {
        self.gpu.len()
    }
}
