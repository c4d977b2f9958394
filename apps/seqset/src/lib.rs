//! # seqset
//!
//! Library half of the seqset binary: CLI definitions, configuration,
//! hash function providers and the script interpreter. `main.rs` only
//! wires logging and dispatch.

pub mod cli;
pub mod config;
pub mod error;
pub mod hashers;
pub mod output;
pub mod script;

pub use config::{Config, LogFormat};
pub use error::AppError;
pub use output::{Outcome, Record};
pub use script::{Command, Interpreter};
