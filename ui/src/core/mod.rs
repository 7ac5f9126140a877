//! Platform-agnostic model behind the shell components.

pub mod config;
pub mod menu;
pub mod navigation;
pub mod platform;
pub mod routing;
pub mod session;
