// Core library for the tagrank corpus analysis tool

pub use cli::{Cli, OutputFormat};
pub use config::RankConfig;

pub mod cli;
pub mod config;
pub mod extract;
pub mod freq;
pub mod lang;
pub mod parallel;
pub mod rank;
pub mod report;
pub mod stats;
