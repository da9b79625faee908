//! Generates a `"use server"` actions module from a troute declaration file.
//!
//! The declaration file imports query functions and hands a subset of them to
//! `createTroute({ ... })`. The generated `.troute/actions.<ext>` re-exports
//! exactly that subset.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod pipeline;
pub mod types;

pub use error::{Result, TrouteError};
pub use pipeline::{Generation, Generator};
