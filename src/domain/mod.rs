//! Domain layer - Core engine logic with no external dependencies
//!
//! This layer contains:
//! - Value Objects: dice expressions, roll results, tool outcomes, ids
//! - Entities: campaign progression, summary checkpoint
//! - Domain Services: dice notation parsing and resolution

pub mod entities;
pub mod services;
pub mod value_objects;
