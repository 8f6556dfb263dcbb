//! Layout components.

pub mod main;
pub mod nav;

pub use main::Layout;
pub use nav::NavigationBar;
