//! Native frame source.
//!
//! Replays captured XYZI `.bin` frames from a directory at a fixed rate,
//! looping over the files in sorted name order, or synthesises an animated
//! cloud when no directory is configured. Either way the frames travel the
//! full wire path as raw bytes through the inbox.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use bevy::prelude::*;
use frame_codec::{PointRecord, encode_frame};

use super::{FrameInbox, StreamConfig};

const SYNTHETIC_POINTS: usize = 4096;

pub fn spawn_source(config: &StreamConfig, inbox: &FrameInbox) {
    let inbox = inbox.clone();
    let frame_dir = config.frame_dir.clone();
    let interval = Duration::from_secs_f64(1.0 / config.fps.max(0.1));

    thread::spawn(move || match frame_dir {
        Some(dir) => replay_directory(&dir, interval, &inbox),
        None => generate_frames(interval, &inbox),
    });
}

fn replay_directory(dir: &Path, interval: Duration, inbox: &FrameInbox) {
    let files = match list_bin_files(dir) {
        Ok(files) => files,
        Err(err) => {
            error!("cannot read frame directory {}: {err}", dir.display());
            return;
        }
    };

    if files.is_empty() {
        warn!("no .bin frames in {}", dir.display());
        return;
    }

    info!("replaying {} frames from {}", files.len(), dir.display());

    loop {
        for file in &files {
            match fs::read(file) {
                Ok(bytes) => inbox.deliver(bytes),
                Err(err) => warn!("skipping {}: {err}", file.display()),
            }
            thread::sleep(interval);
        }
    }
}

fn list_bin_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "bin"))
        .collect();
    files.sort();
    Ok(files)
}

fn generate_frames(interval: Duration, inbox: &FrameInbox) {
    info!("no capture directory configured, streaming a synthetic cloud");

    let mut tick: u32 = 0;
    loop {
        inbox.deliver(encode_frame(&synthetic_frame(tick as f32 * 0.05)));
        tick = tick.wrapping_add(1);
        thread::sleep(interval);
    }
}

/// A swirling helix around the origin; intensity rises along the strand.
fn synthetic_frame(phase: f32) -> Vec<PointRecord> {
    (0..SYNTHETIC_POINTS)
        .map(|i| {
            let t = i as f32 / SYNTHETIC_POINTS as f32;
            let angle = t * std::f32::consts::TAU * 6.0 + phase;
            let radius = 4.0 + 6.0 * t;
            PointRecord {
                x: angle.cos() * radius,
                y: (t - 0.5) * 16.0,
                z: angle.sin() * radius,
                intensity: t,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use frame_codec::decode_frame;

    #[test]
    fn synthetic_frames_decode_cleanly() {
        let bytes = encode_frame(&synthetic_frame(0.3));
        let points = decode_frame(&bytes).unwrap();
        assert_eq!(points.len(), SYNTHETIC_POINTS);
    }

    #[test]
    fn synthetic_intensity_stays_in_unit_range() {
        for point in synthetic_frame(1.7) {
            assert!((0.0..=1.0).contains(&point.intensity));
        }
    }
}
