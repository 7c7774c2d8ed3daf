//! Scoring, peer context and buy/wait analysis for a curated laptop catalog.
//!
//! Every engine borrows a [`data::DataContext`]; nothing is global.

pub mod config;
pub mod configure;
pub mod data;
pub mod deals;
pub mod error;
pub mod prices;
pub mod report;
pub mod score_context;
pub mod scoring;
pub mod types;
