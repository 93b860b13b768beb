//! Severance and unemployment benefit estimation for Spanish labour law.
//!
//! This crate estimates the severance payment ("indemnización") owed when an
//! employment relationship ends and the contributory unemployment benefit
//! ("prestación por desempleo") the worker can expect afterwards. Every
//! figure comes with an audit trace naming the statutory rule behind it.
//!
//! The estimates are not authoritative; the official SEPE simulator remains
//! the reference.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
