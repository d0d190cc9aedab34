//! Drafts — per-user editor state, STAR stories and named resume versions in Postgres.

pub mod handlers;
pub mod models;
pub mod store;
