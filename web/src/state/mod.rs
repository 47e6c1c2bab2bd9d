//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `portal` holds the shared client and the reactive session snapshot.
//! Page-level models (`jobs`, `interviews`, `screening`) are plain structs
//! so their behavior is testable without a reactive runtime. `forms` holds
//! the text-input conversions shared by the edit pages.

pub mod forms;
pub mod interviews;
pub mod jobs;
pub mod portal;
pub mod screening;
