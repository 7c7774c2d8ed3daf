pub mod config;
pub mod laptop;
pub mod market;
pub mod pricing;
pub mod scoring;
