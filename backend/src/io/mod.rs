//! # IO Module
//!
//! Adapter between HTTP clients and the domain layer. The only protocol
//! today is the JSON REST API under `/api`.

pub mod rest;

pub use rest::*;
