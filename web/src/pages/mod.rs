//! Top-level routed pages.

pub mod alerts;
pub mod analytics;
pub mod applications;
pub mod company;
pub mod dashboard;
pub mod home;
pub mod job_detail;
pub mod jobs;
pub mod login;
pub mod manage_jobs;
pub mod post_job;
pub mod profile;
pub mod recommended;
pub mod recruiter;
pub mod register;
pub mod saved;
pub mod screening;
