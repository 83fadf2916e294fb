//! fastlearn-core — Data model, scoring, and session engine for fastlearn.
//!
//! This crate defines the question/answer data model, the assessment
//! session state, and the analysis logic that the rest of the fastlearn
//! system builds on.

pub mod analysis;
pub mod bank;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod path;
pub mod report;
pub mod session;
