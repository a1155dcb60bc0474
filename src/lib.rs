//! Event catalog export for LLM crawlers.
//!
//! Loads a catalog directory into an immutable [`models::Catalog`] snapshot once
//! at start-up and serves every resource's source text concatenated into a single
//! `llms-full.txt` document.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod llms;
pub mod models;
