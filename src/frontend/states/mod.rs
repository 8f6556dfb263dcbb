//! Component-local UI states.

pub mod ui;
