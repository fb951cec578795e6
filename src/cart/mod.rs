//! The cart actor and the rules it applies to every mutation.

pub mod error;
pub mod operations;
pub mod service;

pub use error::*;
pub use service::*;
