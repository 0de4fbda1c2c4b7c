//! Core types, wire schemas, and service clients for the Social Pulse dashboard.

pub mod analytics;
#[cfg(feature = "api")]
pub mod api;
pub mod aspect;
pub mod date_range;
pub mod mock;
pub mod record;
pub mod sentiment;
pub mod theme;
