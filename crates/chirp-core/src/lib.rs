//! # Chirp Core
//!
//! The domain layer of the Chirp API.
//! This crate contains pure entity and port definitions with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
