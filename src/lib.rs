//! TUI Well (workspace facade crate).
//!
//! Re-exports the game crates under short names so the binary, the tests and
//! the benches share one `tui_well::{core,engine,input,term,types}` API. The
//! implementation lives in dedicated crates under `crates/`; the high-score
//! table is the only module of its own.

pub mod high_scores;

pub use tui_well_core as core;
pub use tui_well_engine as engine;
pub use tui_well_input as input;
pub use tui_well_term as term;
pub use tui_well_types as types;
