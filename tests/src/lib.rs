//! End-to-end tests for the `coulomb` workspace.
//!
//! The tests themselves live in `src/pipeline` and drive the public crates
//! the same way the binary does: prompts answered from a buffer, then the
//! full sampling and rendering pipeline against a scratch directory.
