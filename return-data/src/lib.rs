//! Configuration and input loading for the return engine.
//!
//! `return-core` computes; this crate feeds it. Three loaders cover the
//! external inputs: bracket schedules from CSV, year constants from TOML,
//! and taxpayer facts from JSON. Each loader validates before handing
//! anything to the engine, so loader errors are typed and early while the
//! engine itself stays infallible. The `return-calc` binary wires them to a
//! command line.

pub mod brackets;
pub mod constants;
pub mod facts_file;

pub use brackets::{BracketCsvError, BracketCsvLoader, BracketRecord};
pub use constants::{ConstantsFile, ConstantsFileError, ConstantsLoader};
pub use facts_file::{FactsFileError, FactsLoader};
