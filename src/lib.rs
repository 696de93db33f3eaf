//! Presentational components for the humanoid robotics book site.

pub mod components;
pub mod content;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod types;
