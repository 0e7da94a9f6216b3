//! Inbound adapters: the basket API controller and the CLI driving it.

pub mod cli;
pub mod controller;
