//! Shared UI components.

pub mod navbar;
pub mod outcome;
pub mod pagination;
pub mod protected;
