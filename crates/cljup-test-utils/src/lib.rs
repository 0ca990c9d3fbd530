//! Shared test utilities for the cljup workspace.
//!
//! This crate provides standardised test fixtures for crate test suites. It
//! is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`home`]: [`TestHome`] builder for a fake user home, system root and search path
//! - [`stub`]: executable shell-script stand-ins for real tools

pub mod home;
pub mod stub;

pub use home::TestHome;
