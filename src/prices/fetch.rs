use crate::data::SEED_PRICES_FILE;
use crate::error::{LapscoreError, Result};
use crate::types::config::LapscoreConfig;
use crate::types::pricing::SwissPrice;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The API key variable is unset; nothing was requested.
    MissingKey { env: String },
    Written { path: PathBuf, count: usize },
}

pub fn setup_instructions(env: &str) -> String {
    format!(
        "fetch-prices needs an API key for the price service.\n\
         \n\
         1. Request a key from your price data provider.\n\
         2. Export it before running this command:\n\
         \n\
         \x20   export {env}=<your key>\n\
         \n\
         3. Set the endpoint in lapscore.toml:\n\
         \n\
         \x20   [prices]\n\
         \x20   api_url = \"https://prices.example.ch/v1/offers\"\n\
         \n\
         Fetched offers are written to a review file; merge them into the\n\
         community list by hand once checked."
    )
}

/// Reads the key named by `env` through `lookup`; blank values count as unset.
pub fn resolve_key<F>(env: &str, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(env)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

pub async fn fetch_offers(api_url: &str, key: &str) -> Result<Vec<SwissPrice>> {
    let body = reqwest::Client::new()
        .get(api_url)
        .bearer_auth(key)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let mut offers: Vec<SwissPrice> =
        serde_json::from_str(&body).map_err(|e| LapscoreError::PriceParse {
            path: api_url.to_string(),
            message: e.to_string(),
        })?;
    for offer in &mut offers {
        offer.is_user_added = false;
    }
    debug!(url = api_url, count = offers.len(), "fetched offers");
    Ok(offers)
}

/// Default review location: `<root>/.lapscore/fetched/prices-<stamp>.json`.
pub fn review_path(root: &Path) -> PathBuf {
    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    root.join(".lapscore/fetched")
        .join(format!("prices-{stamp}.json"))
}

pub fn write_review_file(path: &Path, offers: &[SwissPrice]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(offers)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

/// Fetched offers are unreviewed, so they never land on a seed price list.
pub fn check_review_target(path: &Path) -> Result<()> {
    let is_seed = path
        .file_name()
        .is_some_and(|name| name == SEED_PRICES_FILE);
    if is_seed {
        return Err(LapscoreError::ConfigParse(format!(
            "refusing to write fetched offers over the seed price list {}",
            path.display()
        )));
    }
    Ok(())
}

pub async fn run_fetch(
    config: &LapscoreConfig,
    root: &Path,
    out: Option<&Path>,
) -> Result<FetchOutcome> {
    if let Some(out) = out {
        check_review_target(out)?;
    }
    let env = config.api_key_env();
    let Some(key) = resolve_key(env, |name| std::env::var(name).ok()) else {
        return Ok(FetchOutcome::MissingKey {
            env: env.to_string(),
        });
    };
    let api_url = config.api_url().ok_or_else(|| {
        LapscoreError::ConfigParse("prices.api_url must be set to fetch prices".to_string())
    })?;

    let offers = fetch_offers(api_url, &key).await?;
    let path = out.map(Path::to_path_buf).unwrap_or_else(|| review_path(root));
    write_review_file(&path, &offers)?;
    info!(count = offers.len(), out = %path.display(), "wrote fetched prices for review");

    Ok(FetchOutcome::Written {
        path,
        count: offers.len(),
    })
}
