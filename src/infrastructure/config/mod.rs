//! Infrastructure configuration modules.

pub mod logging;
pub mod naming;
pub mod settings;
