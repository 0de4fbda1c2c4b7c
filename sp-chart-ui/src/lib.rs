//! Shared Dioxus components and D3.js bridge for Social Pulse page apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals, including the fetch
//!   generation counter that drops stale responses
//! - `components`: Reusable RSX components (cards, pickers, containers)

pub mod js_bridge;
pub mod state;
pub mod components;
