//! Application layer - Use cases and ports
//!
//! Services orchestrate the domain core and depend only on outbound ports,
//! never on concrete collaborator implementations.

pub mod dto;
pub mod ports;
pub mod services;
