//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `dashboard_view`: View parsing and derivation tests
//! - `field_resolution`: Token, repository, user and paging resolution tests

mod helpers;
