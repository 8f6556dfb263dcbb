//! Common reusable components.

pub mod avatar;
pub mod burger;
pub mod drawer;
pub mod logo;
pub mod menu;

pub use avatar::Avatar;
pub use burger::Burger;
pub use drawer::Drawer;
pub use logo::Logo;
pub use menu::DropdownMenu;
