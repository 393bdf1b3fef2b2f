//! Papertrend Core Library
//!
//! Client-side analytics over a research search service: per-category
//! publication statistics, rankings, sparklines, corpus summaries and
//! rank-derived match scores for recommendations.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod recommend;
pub mod trends;
