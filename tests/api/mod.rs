//! REST API endpoint tests, run against the in-memory backend.

mod budget_tests;
mod catalog_tests;
mod dropdown_tests;
mod health_tests;
mod structure_tests;
