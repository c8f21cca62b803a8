//! # rococo-search
//!
//! A thin command-line front end over `rococo-specs`. All filter translation
//! lives in the library; this binary only parses arguments, loads JSON
//! fixtures into the in-memory adapter and prints results.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  CLI Layer (src/cli/)                         │
//! │  - clap argument parsing (setup.rs)           │
//! │  - config + logging + dispatch (commands.rs)  │
//! │  - JSON output (render.rs)                    │
//! └───────────────────────────────────────────────┘
//!                         │
//!                         ▼
//! ┌───────────────────────────────────────────────┐
//! │  rococo-specs                                 │
//! │  - Catalog: filter → Specification            │
//! │  - MemRepository: Specification → rows        │
//! └───────────────────────────────────────────────┘
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
