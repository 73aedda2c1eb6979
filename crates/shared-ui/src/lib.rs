//! Presentational components for the admin console.
//!
//! Every component ships its own `style.css` next to it and links it through
//! `document::Link`, so screens only import the component.

pub mod components;

pub use components::*;
