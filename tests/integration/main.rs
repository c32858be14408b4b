//! Integration test entry point.

mod helpers;

mod auth_test;
mod file_test;
