//! Ports (interfaces) for external collaborators
//!
//! Implementations (adapters) live in the infrastructure layer.

pub mod oracle_gateway;
