//! Orbit camera for navigating the streamed cloud.

/// Viewport camera resource and controller system.
pub mod viewport_camera;
