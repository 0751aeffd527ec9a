//! Bitola library.
//!
//! Core functionality for the residential wire-gauge estimator: the room
//! ledger, the NBR 5410-inspired recommendation rule, and the table export
//! backends. The binary and the integration tests both build on this crate.

// Module declarations
pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod ledger;
pub mod models;
pub mod rules;
pub mod services;
