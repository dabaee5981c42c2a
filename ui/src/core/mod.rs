//! Pure, platform-agnostic helpers shared by the views.

pub mod config;
pub mod content;
pub mod platform;
pub mod typography;
