//! # Coulomb Common
//!
//! Shared building blocks for the `coulomb` workspace.
//!
//! * **[`field`]**: The data model (charges, observation points, field vectors, plot bounds).
//! * **[`config`]**: Run configuration assembled by the command line.
//! * **[`error`]**: The error taxonomy every stage reports through.
//! * **[`input`]**: The line-oriented collector that turns prompts and answers into a [`input::Request`].
//! * **[`log`]**: Logging macros on top of `tracing`.

pub mod config;
pub mod error;
pub mod field;
pub mod input;
pub mod log;
