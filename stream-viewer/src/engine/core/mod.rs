//! Application setup and window configuration.
//!
//! Wires the stream source, ingest, mesh upload and camera systems into a
//! Bevy app for both native and WASM targets.

/// App construction, plugin registration and scene setup.
pub mod app_setup;

/// Platform-specific window configuration for native and WASM builds.
pub mod window_config;
