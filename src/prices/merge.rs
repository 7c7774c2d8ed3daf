use crate::error::{LapscoreError, Result};
use crate::types::pricing::SwissPrice;
use sha2::{Digest, Sha256};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub seed: usize,
    pub community: usize,
    /// Seed ids replaced by a community entry.
    pub overridden: usize,
    pub total: usize,
    pub sha256: String,
}

pub fn read_price_file(path: &Path) -> Result<Vec<SwissPrice>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| LapscoreError::PriceParse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Like [`read_price_file`], but a missing file is an empty list.
pub fn read_optional_price_file(path: &Path) -> Result<Vec<SwissPrice>> {
    if !path.exists() {
        warn!(path = %path.display(), "community price file not found, using seed prices only");
        return Ok(Vec::new());
    }
    read_price_file(path)
}

/// Union by id; community entries replace seed entries with the same id.
/// Output is sorted by id with digit runs compared numerically.
pub fn merge_prices(seed: Vec<SwissPrice>, community: Vec<SwissPrice>) -> Vec<SwissPrice> {
    let mut by_id: HashMap<String, SwissPrice> = HashMap::with_capacity(seed.len());
    for price in seed.into_iter().chain(community) {
        by_id.insert(price.id.clone(), price);
    }
    let mut merged: Vec<SwissPrice> = by_id.into_values().collect();
    merged.sort_by(|a, b| natural_cmp(&a.id, &b.id));
    merged
}

pub fn render_prices(prices: &[SwissPrice]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(prices)?;
    json.push('\n');
    Ok(json)
}

pub fn run_merge(seed_path: &Path, community_path: Option<&Path>, out_path: &Path) -> Result<MergeSummary> {
    let seed = read_price_file(seed_path)?;
    let community = match community_path {
        Some(path) => read_optional_price_file(path)?,
        None => Vec::new(),
    };

    let seed_count = seed.len();
    let community_count = community.len();
    let overridden = community
        .iter()
        .filter(|price| seed.iter().any(|seeded| seeded.id == price.id))
        .count();

    let merged = merge_prices(seed, community);
    let rendered = render_prices(&merged)?;

    if let Some(parent) = out_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(out_path, &rendered)?;

    let sha256 = format!("{:x}", Sha256::digest(rendered.as_bytes()));
    info!(
        seed = seed_count,
        community = community_count,
        overridden,
        total = merged.len(),
        out = %out_path.display(),
        "merged price lists"
    );

    Ok(MergeSummary {
        seed: seed_count,
        community: community_count,
        overridden,
        total: merged.len(),
        sha256,
    })
}

/// Orders "p2" before "p10": digit runs compare by value, everything else
/// byte-wise. Equal-valued runs with different zero padding fall back to the
/// plain string order so the result stays total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = match (is_digits(x), is_digits(y)) {
                    (true, true) => cmp_digits(x, y),
                    _ => x.cmp(y),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn is_digits(chunk: &str) -> bool {
    chunk.bytes().all(|byte| byte.is_ascii_digit())
}

fn cmp_digits(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

/// Splits a string into maximal runs of ASCII digits and non-digits.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let digit = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digit)
            .map(|(index, _)| index)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}
