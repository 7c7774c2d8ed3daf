use clap::{Args, Parser, Subcommand, ValueEnum};
use lapscore::configure::ConfigState;
use lapscore::types::scoring::Dimension;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lapscore",
    version,
    about = "Laptop catalog scoring, peer context and buy/wait analysis"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding lapscore.toml and .lapscore/local.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Per-dimension scores, peer context and gaming tier for one model
    Score(ScoreCommand),
    /// Peer context for a single dimension
    Context(ContextCommand),
    /// Catalog models ranked by overall score
    List(ListCommand),
    /// Configurable component options of a model
    Options(OptionsCommand),
    /// Best observed price and buy signal for a model
    Deal(DealCommand),
    /// Component price trends and the aggregate market alert
    Market,
    /// Merge seed and community price lists into the generated price file
    MergePrices(MergePricesCommand),
    /// Fetch offers from the price API into a review file
    FetchPrices(FetchPricesCommand),
}

/// Option indices; an index outside the model's option list keeps the base part.
#[derive(Args)]
pub struct ConfigArgs {
    #[arg(long)]
    pub processor: Option<usize>,
    #[arg(long)]
    pub display: Option<usize>,
    #[arg(long)]
    pub gpu: Option<usize>,
    #[arg(long)]
    pub ram: Option<usize>,
    #[arg(long)]
    pub storage: Option<usize>,
}

impl ConfigArgs {
    pub fn state(&self) -> ConfigState {
        ConfigState {
            processor: self.processor,
            display: self.display,
            gpu: self.gpu,
            ram: self.ram,
            storage: self.storage,
        }
    }
}

#[derive(Args)]
pub struct ScoreCommand {
    pub model: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args)]
pub struct ContextCommand {
    pub model: String,
    #[arg(short, long)]
    pub dimension: Dimension,
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args)]
pub struct ListCommand {
    #[arg(long)]
    pub series: Option<String>,
}

#[derive(Args)]
pub struct OptionsCommand {
    pub model: String,
}

#[derive(Args)]
pub struct DealCommand {
    pub model: String,
    /// Generated price file to read instead of prices.remote_url
    #[arg(long)]
    pub prices: Option<PathBuf>,
}

#[derive(Args)]
pub struct MergePricesCommand {
    #[arg(long)]
    pub seed: PathBuf,
    #[arg(long)]
    pub community: Option<PathBuf>,
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Args)]
pub struct FetchPricesCommand {
    /// Review file to write; defaults to a timestamped file under .lapscore/fetched
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
