//! Application root and routing.

pub mod main;

pub use main::{App, Route, install_config};
