//! Browser adapters for the session.

pub mod browser;
