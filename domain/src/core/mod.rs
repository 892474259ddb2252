//! Core domain primitives

pub mod question;

pub use question::Question;
