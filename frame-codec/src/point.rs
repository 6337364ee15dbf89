use bytemuck::{Pod, Zeroable};
use thiserror::Error;

/// Bytes per point on the wire: four little-endian `f32` fields.
pub const POINT_STRIDE: usize = 4 * std::mem::size_of::<f32>();

/// One decoded point, valid only for the frame it came from.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PointRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub intensity: f32,
}

impl PointRecord {
    /// Euclidean distance from the origin.
    pub fn distance(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Decode failure for one incoming binary message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// Buffer length does not divide into whole `[x, y, z, intensity]` records.
    #[error("malformed frame: {byte_len} bytes is not a multiple of the 16-byte point stride")]
    MalformedFrame { byte_len: usize },
}

/// Parse one binary message into points, preserving buffer order.
///
/// An empty buffer is a valid empty frame. A length that does not divide
/// into whole records rejects the message outright instead of dropping a
/// trailing partial point, so a frame is either decoded completely or not
/// at all.
pub fn decode_frame(bytes: &[u8]) -> Result<Vec<PointRecord>, FrameError> {
    if bytes.len() % POINT_STRIDE != 0 {
        return Err(FrameError::MalformedFrame {
            byte_len: bytes.len(),
        });
    }

    let points = bytes
        .chunks_exact(POINT_STRIDE)
        .map(|record| {
            let field = |i: usize| {
                f32::from_le_bytes([
                    record[4 * i],
                    record[4 * i + 1],
                    record[4 * i + 2],
                    record[4 * i + 3],
                ])
            };
            PointRecord {
                x: field(0),
                y: field(1),
                z: field(2),
                intensity: field(3),
            }
        })
        .collect();

    Ok(points)
}

/// Serialise points to the wire layout.
///
/// Producer-side counterpart of [`decode_frame`], used by the native replay
/// source and by tests to build frames.
pub fn encode_frame(points: &[PointRecord]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(points.len() * POINT_STRIDE);
    for point in points {
        bytes.extend_from_slice(&point.x.to_le_bytes());
        bytes.extend_from_slice(&point.y.to_le_bytes());
        bytes.extend_from_slice(&point.z.to_le_bytes());
        bytes.extend_from_slice(&point.intensity.to_le_bytes());
    }
    bytes
}
