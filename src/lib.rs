pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod processor;
pub mod reporting;
pub mod statistics;
