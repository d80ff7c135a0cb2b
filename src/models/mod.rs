//! Data models module
//!
//! Defines the Stamp record and its acceptance status.

pub mod stamp;

pub use stamp::{Stamp, StampStatus};
