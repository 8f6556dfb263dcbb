//! Embedded stylesheets and images.

pub mod main;

pub use main::ResourceLoader;
