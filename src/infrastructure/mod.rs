//! Infrastructure layer.
//!
//! Configuration loading and logging setup. Holds no basket logic.

pub mod config;
