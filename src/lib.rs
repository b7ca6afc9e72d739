//! # Seq-FDD Eval
//!
//! Restores a trained sequential feed-forward model from the most recent
//! checkpoint in a training directory, via the Burn ML framework, so that
//! evaluation can continue from the saved weights.
//!
//! ## Modules
//!
//! - [`model`] — Named model registry, network architecture, model handle
//! - [`checkpoint`] — Checkpoint directory layout, metadata, latest resolution
//! - [`restore`] — The restore runner: construct, resolve, load
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

#![recursion_limit = "256"]

pub mod checkpoint;
pub mod config;
pub mod error;
pub mod model;
pub mod restore;
