//! Frontend services: the session and navigation model.

pub mod context;
pub mod navigation;
