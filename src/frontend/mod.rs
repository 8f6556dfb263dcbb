//! Frontend module for the `QRCodeGenerator` application.

pub mod app;
pub mod assets;
pub mod components;
pub mod pages;
pub mod services;
pub mod states;
