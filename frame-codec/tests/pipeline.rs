//! End-to-end checks over the decode → normalize pipeline, driving it the
//! way the viewer does: one raw binary message in, attribute arrays out.

use frame_codec::{FrameError, PointRecord, decode_and_normalize, encode_frame};

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn wire_message_to_renderable_attributes() {
    let bytes: Vec<u8> = [1.0f32, 0.0, 0.0, 5.0, 0.0, 0.0, 3.0, 10.0]
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect();

    let (attributes, count) = decode_and_normalize(&bytes).unwrap();

    assert_eq!(count, 2);
    assert_eq!(attributes.positions, vec![[1.0, 0.0, 0.0], [0.0, 0.0, 3.0]]);

    let [r, g, b] = attributes.colors[0];
    assert_close(r, 1.0 / 6.0);
    assert_close(g, 0.1);
    assert_close(b, 1.0 / 3.0);

    let [r, g, b] = attributes.colors[1];
    assert_close(r, 1.0);
    assert_close(g, 0.2);
    assert_close(b, 0.0);
}

#[test]
fn empty_message_yields_empty_attributes() {
    let (attributes, count) = decode_and_normalize(&[]).unwrap();
    assert_eq!(count, 0);
    assert!(attributes.is_empty());
}

#[test]
fn truncated_message_is_rejected_whole() {
    let mut bytes = encode_frame(&[PointRecord {
        x: 1.0,
        y: 2.0,
        z: 3.0,
        intensity: 0.5,
    }]);
    bytes.truncate(bytes.len() - 3);

    assert_eq!(
        decode_and_normalize(&bytes),
        Err(FrameError::MalformedFrame { byte_len: 13 })
    );
}

#[test]
fn generated_frames_survive_the_full_path() {
    // A ring of points around the origin, the shape the native replay
    // source synthesises when no capture directory is configured.
    let points: Vec<PointRecord> = (0..64)
        .map(|i| {
            let angle = i as f32 / 64.0 * std::f32::consts::TAU;
            PointRecord {
                x: angle.cos() * 10.0,
                y: (i % 8) as f32,
                z: angle.sin() * 10.0,
                intensity: i as f32 / 64.0,
            }
        })
        .collect();

    let (attributes, count) = decode_and_normalize(&encode_frame(&points)).unwrap();

    assert_eq!(count, points.len());
    assert_eq!(attributes.positions.len(), attributes.colors.len());
    for color in &attributes.colors {
        for channel in color {
            assert!((0.0..=1.0).contains(channel));
        }
    }
}
