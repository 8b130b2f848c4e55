//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and read shared state from Leptos context
//! providers installed by [`crate::app::App`].

pub mod header;
pub mod notice_bar;
