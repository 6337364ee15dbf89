//! Browser WebSocket frame source.
//!
//! One message is one frame; the payload is copied out of the `ArrayBuffer`
//! and dropped into the inbox. Connection loss is logged and otherwise left
//! to the server side; the viewer keeps rendering the last good frame until
//! delivery resumes.

use bevy::prelude::*;
use js_sys::{ArrayBuffer, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{BinaryType, CloseEvent, ErrorEvent, MessageEvent, WebSocket};

use super::{FrameInbox, StreamConfig};

/// Open the socket and wire its callbacks to the inbox.
///
/// The callback closures are handed to the browser with `forget`; the
/// socket lives for the whole session.
pub fn connect(config: &StreamConfig, inbox: &FrameInbox) {
    let socket = match WebSocket::new(&config.ws_url) {
        Ok(socket) => socket,
        Err(err) => {
            error!("websocket connect to {} failed: {err:?}", config.ws_url);
            return;
        }
    };
    socket.set_binary_type(BinaryType::Arraybuffer);

    let slot = inbox.clone();
    let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(buffer) = event.data().dyn_into::<ArrayBuffer>() {
            slot.deliver(Uint8Array::new(&buffer).to_vec());
        }
    }) as Box<dyn FnMut(MessageEvent)>);
    socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    on_message.forget();

    let on_error = Closure::wrap(Box::new(move |event: ErrorEvent| {
        error!("websocket error: {}", event.message());
    }) as Box<dyn FnMut(ErrorEvent)>);
    socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();

    let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
        warn!("websocket closed (code {}), keeping last frame", event.code());
    }) as Box<dyn FnMut(CloseEvent)>);
    socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));
    on_close.forget();

    info!("connecting to {}", config.ws_url);
}
