//! HTTP route handlers.

pub mod catalog;
pub mod practice;
pub mod progress;
