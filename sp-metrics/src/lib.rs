//! Pure transformation layer between fetched payloads and rendered pages.
//!
//! Everything here is synchronous and side-effect free: identical input
//! always yields identical output, and malformed input degrades to safe
//! defaults instead of failing.

pub mod browse;
pub mod split;
pub mod stats;
pub mod themes;
