//! Browser networking.

pub mod fetch;

pub use fetch::FetchTransport;
