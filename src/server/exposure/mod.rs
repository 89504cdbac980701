//! API exposure modules
//!
//! An exposure consumes the registered entities and produces a Router for its
//! protocol. REST is the only one.

pub mod rest;

pub use rest::RestExposure;
