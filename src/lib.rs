//! Money Run (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and holds the pieces
//! only the binaries need: environment configuration, log setup and the
//! frame trace.

pub mod config;
pub mod logging;
pub mod trace;

pub use money_run_assets as assets;
pub use money_run_core as core;
pub use money_run_input as input;
pub use money_run_term as term;
pub use money_run_types as types;
