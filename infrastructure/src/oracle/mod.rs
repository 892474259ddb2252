//! Oracle service adapter

pub mod gateway;
pub mod protocol;

pub use gateway::YesNoGateway;
