pub mod benchmarks;

use crate::error::{LapscoreError, Result};
use crate::types::laptop::Laptop;
use crate::types::market::ComponentMarket;
use crate::types::pricing::SwissPrice;
use benchmarks::{Benchmarks, GpuBenchmark};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

pub const CATALOG_FILE: &str = "catalog.json";
pub const CPU_BENCHMARKS_FILE: &str = "cpu_benchmarks.json";
pub const GPU_BENCHMARKS_FILE: &str = "gpu_benchmarks.json";
pub const SEED_PRICES_FILE: &str = "seed_prices.json";
pub const COMPONENT_MARKET_FILE: &str = "component_market.json";

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");
const BUNDLED_CPU: &str = include_str!("../../data/cpu_benchmarks.json");
const BUNDLED_GPU: &str = include_str!("../../data/gpu_benchmarks.json");
const BUNDLED_SEED_PRICES: &str = include_str!("../../data/seed_prices.json");
const BUNDLED_MARKET: &str = include_str!("../../data/component_market.json");

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    laptops: Vec<Laptop>,
}

impl Catalog {
    pub fn new(laptops: Vec<Laptop>) -> Self {
        Self { laptops }
    }

    pub fn get(&self, id: &str) -> Option<&Laptop> {
        self.laptops.iter().find(|laptop| laptop.id == id)
    }

    pub fn series_members(&self, series: &str) -> Vec<&Laptop> {
        self.laptops
            .iter()
            .filter(|laptop| laptop.series == series)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Laptop> {
        self.laptops.iter()
    }

    pub fn len(&self) -> usize {
        self.laptops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laptops.is_empty()
    }
}

/// Everything the engines read. Built once, then only borrowed.
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    pub catalog: Catalog,
    pub benchmarks: Benchmarks,
    pub seed_prices: Vec<SwissPrice>,
    pub market: Vec<ComponentMarket>,
}

impl DataContext {
    pub fn bundled() -> Result<Self> {
        Self::from_sources(
            ("bundled catalog", BUNDLED_CATALOG),
            ("bundled cpu benchmarks", BUNDLED_CPU),
            ("bundled gpu benchmarks", BUNDLED_GPU),
            ("bundled seed prices", BUNDLED_SEED_PRICES),
            ("bundled component market", BUNDLED_MARKET),
        )
    }

    pub fn load(dir: &Path) -> Result<Self> {
        let read = |file: &str| -> Result<(String, String)> {
            let path = dir.join(file);
            let content = std::fs::read_to_string(&path)?;
            Ok((path.display().to_string(), content))
        };
        let catalog = read(CATALOG_FILE)?;
        let cpu = read(CPU_BENCHMARKS_FILE)?;
        let gpu = read(GPU_BENCHMARKS_FILE)?;
        let seed = read(SEED_PRICES_FILE)?;
        let market = read(COMPONENT_MARKET_FILE)?;
        Self::from_sources(
            (catalog.0.as_str(), catalog.1.as_str()),
            (cpu.0.as_str(), cpu.1.as_str()),
            (gpu.0.as_str(), gpu.1.as_str()),
            (seed.0.as_str(), seed.1.as_str()),
            (market.0.as_str(), market.1.as_str()),
        )
    }

    fn from_sources(
        catalog: (&str, &str),
        cpu: (&str, &str),
        gpu: (&str, &str),
        seed: (&str, &str),
        market: (&str, &str),
    ) -> Result<Self> {
        let laptops: Vec<Laptop> = parse(catalog)?;
        let cpu: HashMap<String, f32> = parse(cpu)?;
        let gpu: HashMap<String, GpuBenchmark> = parse(gpu)?;
        let seed_prices: Vec<SwissPrice> = parse(seed)?;
        let market: Vec<ComponentMarket> = parse(market)?;

        for laptop in laptops.iter().filter(|l| !l.pricing.is_consistent()) {
            warn!(model = %laptop.id, "price baseline is not ordered low <= typical <= msrp");
        }

        let context = Self {
            catalog: Catalog::new(laptops),
            benchmarks: Benchmarks::new(cpu, gpu),
            seed_prices,
            market,
        };
        debug!(
            models = context.catalog.len(),
            cpus = context.benchmarks.cpu_len(),
            gpus = context.benchmarks.gpu_len(),
            prices = context.seed_prices.len(),
            "data context loaded"
        );
        Ok(context)
    }

    pub fn model(&self, id: &str) -> Result<&Laptop> {
        self.catalog
            .get(id)
            .ok_or_else(|| LapscoreError::ModelNotFound(id.to_string()))
    }
}

fn parse<T: DeserializeOwned>((origin, content): (&str, &str)) -> Result<T> {
    serde_json::from_str(content).map_err(|e| LapscoreError::DataParse(format!("{origin}: {e}")))
}
