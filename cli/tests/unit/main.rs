//! Unit tests for energy-setup
//!
//! These tests use mocked dependencies and run fast without external I/O.
