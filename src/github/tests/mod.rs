//! Unit tests for repository, user and workflow identity parsing.

mod locator;
