//! Company API Library
//!
//! This library provides the core functionality for the Company API:
//! product, employee and department documents, their schema validation,
//! department population, repositories and the HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
