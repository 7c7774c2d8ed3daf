//! Price observations beyond the bundled seed list: the offline merge, the
//! runtime cache over the generated file, and the API fetch helper.

pub mod fetch;
pub mod merge;
pub mod remote;

pub use merge::{merge_prices, run_merge, MergeSummary};
pub use remote::{FilePriceSource, HttpPriceSource, PriceCache, PriceSource};
