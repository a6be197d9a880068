//! Function Calling API — library crate for the query-to-function server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `fc-e2e-tests`) can access `AppState`, `build_router` and
//! `QueryParser`.

pub mod config;
pub mod error;
pub mod inference;
pub mod routes;
pub mod state;
