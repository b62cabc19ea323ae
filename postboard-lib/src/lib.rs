//! Postboard API client library
//!
//! An async Rust client for a JSONPlaceholder-style posts/users REST API,
//! with a closed error taxonomy for HTTP failures, a panic-safe outcome
//! boundary, and a standalone form-validation module for post drafts.

pub mod error;
pub mod model;
pub mod outcome;
pub mod validation;

mod api;
mod client;

pub use client::*;
