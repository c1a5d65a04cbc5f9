//! Platform abstraction layer
//!
//! Maps raw key-down events onto per-arena fire requests.

pub mod input;

pub use input::{FireQueue, KeyBindings};
