pub mod adb;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod output;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod config_test;

#[cfg(test)]
mod error_test;
