//! # Metric-Imperial Converter
//!
//! Unit conversion service for everyday metric and imperial measurements.
//!
//! This crate parses compact quantity expressions such as `4gal`, `1/2km` or
//! `5.4lbs`, resolves the unit against a validated table, applies the
//! configured conversion ratio and phrases the result as a full sentence.
//! The converter is exposed both as a library and as a REST API via Axum.
//!
//! ## Features
//!
//! - **Input Splitting**: Separate the numeric expression from the unit token
//! - **Magnitude Evaluation**: Decimal and single-slash fraction arithmetic
//! - **Unit Table**: Case-insensitive lookup over validated built-in catalogs
//! - **Conversion**: Default-partner and explicit-target ratio application
//! - **Formatting**: Five-decimal rounding and spelled-out result sentences
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Consolidated public types and entry points
//! - [`config`]: TOML configuration with environment overrides
//! - [`models`]: Unit descriptors and parsed quantities
//! - [`registry`]: Built-in catalogs and the validated unit table
//! - [`services`]: Parsing, evaluation, conversion and formatting logic
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod config;
pub mod models;

pub mod registry;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
