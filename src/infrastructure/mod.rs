//! Infrastructure layer - Adapters with process-local state
//!
//! This layer contains:
//! - Rate limiter: keyed fixed-window admission control
//! - Config: engine configuration from environment

pub mod config;
pub mod rate_limiter;
