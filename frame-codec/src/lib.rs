//! Wire codec and color mapping for streamed XYZI point cloud frames.
//!
//! A frame is a headerless run of little-endian `f32` values grouped in
//! fours: `[x, y, z, intensity]` repeated once per point. The decoder turns
//! one binary message into `PointRecord`s; the normalizer derives per-point
//! RGB colors from frame-wide maxima. Both are pure functions and carry no
//! state between frames.

pub mod color;
pub mod point;

pub use color::{FrameStats, RenderableAttributes, frame_stats, normalize_frame};
pub use point::{FrameError, POINT_STRIDE, PointRecord, decode_frame, encode_frame};

/// Decode one binary message and derive renderable attributes from it.
///
/// Returns the attribute arrays together with the point count. This is the
/// operation a viewer runs once per incoming transport message.
pub fn decode_and_normalize(bytes: &[u8]) -> Result<(RenderableAttributes, usize), FrameError> {
    let points = decode_frame(bytes)?;
    let attributes = normalize_frame(&points);
    Ok((attributes, points.len()))
}
