//! # CLI Behavior
//!
//! One subcommand per searchable entity. Each takes the entity's filter flags;
//! absent flags do not constrain the search.
//!
//! - `rococo-search museums --data museums.json --query museum` prints the
//!   matching rows as a JSON array.
//! - `--explain` prints the composed specification instead and needs no data.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Logging, config, catalog construction and dispatch
//! - `render`: JSON output

mod commands;
mod render;
pub mod setup;

pub use commands::run;
