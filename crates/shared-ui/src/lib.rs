//! Dioxus components for the support desk views.

pub mod chart;
pub mod components;

pub use components::*;
