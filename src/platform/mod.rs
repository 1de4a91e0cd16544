//! Platform abstraction layer
//!
//! Browser bindings live in `web` (wasm32 only). The native terminal driver is
//! the `jar-game` binary.

#[cfg(target_arch = "wasm32")]
pub mod web;
