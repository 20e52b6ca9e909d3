//! CLI module: arguments, configuration file, replay input and report output

pub mod api;
pub mod args;
pub mod config;
pub mod display;
pub mod error;
pub mod input;

#[cfg(test)]
mod tests;
