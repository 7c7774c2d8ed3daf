mod cli;

use clap::Parser;
use lapscore::configure::{build_configured_model, option_names, ComponentCategory};
use lapscore::data::DataContext;
use lapscore::deals::assess_deal;
use lapscore::deals::market::{market_alert, trend_meta};
use lapscore::error::Result;
use lapscore::prices::fetch::{run_fetch, setup_instructions, FetchOutcome};
use lapscore::prices::{run_merge, FilePriceSource, HttpPriceSource, PriceCache, PriceSource};
use lapscore::report::{self, build_model_report, OutputFormat};
use lapscore::score_context::{interpretation, score_context};
use lapscore::scoring::rank_catalog;
use lapscore::types::config::LapscoreConfig;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::subscriber::set_global_default;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lapscore={level}")));
    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact(),
    );
    // Keep an already installed subscriber.
    let _ = set_global_default(subscriber);
}

fn load_data(config: &LapscoreConfig, root: &Path) -> Result<DataContext> {
    match config.data_dir() {
        Some(dir) if dir.is_absolute() => DataContext::load(dir),
        Some(dir) => DataContext::load(&root.join(dir)),
        None => DataContext::bundled(),
    }
}

fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let root = cli.config_root.as_path();

    match cli.command {
        cli::Commands::Score(cmd) => {
            let config = lapscore::config::load_config(root)?;
            let data = load_data(&config, root)?;
            let base = data.model(&cmd.model)?;

            let model_report = build_model_report(
                &data,
                base,
                &cmd.config.state(),
                &config.weights(),
                config.peer_group_min(),
            );
            let format = match cmd.format {
                cli::ReportFormat::Json => OutputFormat::Json,
                cli::ReportFormat::Md => OutputFormat::Md,
            };
            println!("{}", report::render(&model_report, format)?);

            if base.pricing.is_consistent() {
                Ok(exit_code::SUCCESS)
            } else {
                eprintln!("warning: price baseline of {} is inconsistent", base.id);
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Context(cmd) => {
            let config = lapscore::config::load_config(root)?;
            let data = load_data(&config, root)?;
            let model = build_configured_model(data.model(&cmd.model)?, &cmd.config.state());

            let ctx = score_context(&data, &model, cmd.dimension, config.peer_group_min());
            println!(
                "{} {}: {:.1} (percentile {} of {} in {})",
                model.id, ctx.dimension, ctx.score, ctx.percentile, ctx.peer_count, ctx.group_label
            );
            println!("{}", ctx.comparison_text);
            println!("{}", interpretation(ctx.dimension, ctx.score));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::List(cmd) => {
            let config = lapscore::config::load_config(root)?;
            let data = load_data(&config, root)?;
            let ranked = rank_catalog(
                &data.benchmarks,
                &data.catalog,
                &config.weights(),
                cmd.series.as_deref(),
            );

            if ranked.is_empty() {
                println!("list: no models");
                return Ok(exit_code::WARNINGS);
            }
            for (rank, (laptop, scores)) in ranked.iter().enumerate() {
                println!(
                    "{:>2}. {:<24} {:>5.1}  {} [{}]",
                    rank + 1,
                    laptop.id,
                    scores.overall,
                    laptop.name,
                    laptop.series
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Options(cmd) => {
            let config = lapscore::config::load_config(root)?;
            let data = load_data(&config, root)?;
            let laptop = data.model(&cmd.model)?;

            if !lapscore::configure::has_config_options(laptop) {
                println!("options: {} has a single configuration", laptop.id);
                return Ok(exit_code::SUCCESS);
            }
            for category in ComponentCategory::iter() {
                let names = option_names(laptop, category);
                if names.is_empty() {
                    continue;
                }
                println!("{category}:");
                for (index, name) in names.iter().enumerate() {
                    println!("  --{category} {index}  {name}");
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Deal(cmd) => {
            let config = lapscore::config::load_config(root)?;
            let data = load_data(&config, root)?;
            let laptop = data.model(&cmd.model)?;

            let source: Option<Arc<dyn PriceSource>> = match (&cmd.prices, config.remote_url()) {
                (Some(path), _) => Some(Arc::new(FilePriceSource::new(path))),
                (None, Some(url)) => Some(Arc::new(HttpPriceSource::new(url))),
                (None, None) => None,
            };
            let prices = match source {
                Some(source) => {
                    let cache = PriceCache::new(source);
                    block_on(cache.prices_or_seed(&data.seed_prices))?
                }
                None => data.seed_prices.clone(),
            };

            let deal = assess_deal(&laptop.id, &laptop.pricing, &prices, &data.market);
            println!("{} ({}, {} tier)", laptop.name, laptop.id, deal.tier);
            println!(
                "baseline: msrp {:.0} / typical {:.0} / low {:.0} CHF",
                deal.baseline.msrp, deal.baseline.typical_retail, deal.baseline.historical_low
            );
            match (&deal.best_price, deal.position) {
                (Some(best), Some(position)) => {
                    println!(
                        "best price: {:.0} CHF at {} ({})",
                        best.price, best.retailer, best.date_added
                    );
                    println!("position: {position:.0}/100");
                }
                _ => println!("best price: none observed"),
            }
            println!("signal: {} ({})", deal.meta.label, deal.signal);
            println!("market: {} - {}", deal.market.severity, deal.market.message);

            if deal.best_price.is_none() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Market => {
            let config = lapscore::config::load_config(root)?;
            let data = load_data(&config, root)?;

            for market in &data.market {
                let meta = trend_meta(market.trend);
                println!(
                    "{} {:<12} {:<8} {:+.1}%  {}",
                    meta.arrow, market.label, meta.label, market.change_percent, market.summary
                );
            }
            let alert = market_alert(&data.market);
            println!("alert: {} - {}", alert.severity, alert.message);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::MergePrices(cmd) => {
            let summary = run_merge(&cmd.seed, cmd.community.as_deref(), &cmd.out)?;
            println!(
                "merged {} prices (seed {}, community {}, overridden {}) into {}",
                summary.total,
                summary.seed,
                summary.community,
                summary.overridden,
                cmd.out.display()
            );
            println!("sha256: {}", summary.sha256);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::FetchPrices(cmd) => {
            let config = lapscore::config::load_config(root)?;
            match block_on(run_fetch(&config, root, cmd.out.as_deref()))?? {
                FetchOutcome::MissingKey { env } => {
                    println!("{}", setup_instructions(&env));
                }
                FetchOutcome::Written { path, count } => {
                    println!("wrote {count} offers for review to {}", path.display());
                }
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
