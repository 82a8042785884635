//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod health;
pub mod root;
pub mod catalog;
pub mod budget;
pub mod structure;
pub mod dropdown;
