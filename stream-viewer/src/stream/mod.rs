//! Transport seam between the wire and the renderer.
//!
//! Sources push raw binary messages into a single-slot inbox; one Update
//! system drains it, runs the codec, and swaps the render-state snapshot.
//! Exactly one writer touches `RenderState`, and it runs to completion
//! before the mesh upload reads it.

#[cfg(not(target_arch = "wasm32"))]
pub mod replay;
#[cfg(target_arch = "wasm32")]
pub mod websocket;

use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use frame_codec::{FrameError, decode_and_normalize};

use crate::engine::point_cloud::RenderState;

const DEFAULT_WS_URL: &str = "ws://localhost:8080/ws";
const DEFAULT_FPS: f64 = 10.0;

/// Stream source settings, resolved once at startup from environment
/// overrides on top of compile-time defaults.
#[derive(Resource, Clone)]
pub struct StreamConfig {
    /// WebSocket endpoint used by the WASM source.
    pub ws_url: String,
    /// Directory of captured `.bin` frames for the native replay source.
    pub frame_dir: Option<std::path::PathBuf>,
    /// Replay rate in frames per second.
    pub fps: f64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            ws_url: DEFAULT_WS_URL.to_string(),
            frame_dir: None,
            fps: DEFAULT_FPS,
        }
    }
}

impl StreamConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ws_url: std::env::var("POINT_STREAM_WS_URL").unwrap_or(defaults.ws_url),
            frame_dir: std::env::var_os("POINT_STREAM_DIR").map(Into::into),
            fps: std::env::var("POINT_STREAM_FPS")
                .ok()
                .and_then(|fps| fps.parse().ok())
                .unwrap_or(defaults.fps),
        }
    }
}

/// Latest-frame holder shared with the transport source.
///
/// A newer frame overwrites an unconsumed older one, so decode work never
/// falls behind the wire; the ingest system takes whatever is present at
/// most once per update.
#[derive(Resource, Clone, Default)]
pub struct FrameInbox(Arc<Mutex<Option<Vec<u8>>>>);

impl FrameInbox {
    /// Overwrite the slot with the newest frame.
    pub fn deliver(&self, bytes: Vec<u8>) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(bytes);
        }
    }

    /// Take the pending frame, if any, leaving the slot empty.
    pub fn take(&self) -> Option<Vec<u8>> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

/// Starts the platform frame source and shares the inbox with it.
pub struct StreamPlugin;

impl Plugin for StreamPlugin {
    fn build(&self, app: &mut App) {
        let config = StreamConfig::from_env();
        let inbox = FrameInbox::default();

        info!(
            "stream source: ws_url={}, frame_dir={:?}, fps={}",
            config.ws_url, config.frame_dir, config.fps
        );

        #[cfg(target_arch = "wasm32")]
        websocket::connect(&config, &inbox);

        #[cfg(not(target_arch = "wasm32"))]
        replay::spawn_source(&config, &inbox);

        app.insert_resource(config).insert_resource(inbox);
    }
}

/// Drain the inbox and swap the snapshot. The only writer of `RenderState`.
pub fn ingest_latest_frame(inbox: Res<FrameInbox>, mut state: ResMut<RenderState>) {
    let Some(bytes) = inbox.take() else {
        return;
    };

    match apply_frame(&mut state, &bytes) {
        Ok(count) => info!(
            "frame {}: decoded {count} points ({} bytes)",
            state.frames_received,
            bytes.len()
        ),
        Err(err) => warn!("dropping frame: {err}"),
    }
}

/// Decode and normalise one message into the render state.
///
/// On failure the previous snapshot is left untouched and the viewer keeps
/// showing the last good frame.
pub fn apply_frame(state: &mut RenderState, bytes: &[u8]) -> Result<usize, FrameError> {
    let (attributes, count) = decode_and_normalize(bytes)?;
    state.install_frame(attributes, count);
    Ok(count)
}
