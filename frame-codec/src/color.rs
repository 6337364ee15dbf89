use crate::point::PointRecord;

/// Frame-wide maxima used as normalisation denominators.
///
/// Computed from the current frame only and discarded with it; an empty
/// frame has both maxima at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub max_distance: f32,
    pub max_intensity: f32,
}

/// Index-aligned position and color arrays for one frame.
///
/// Handed to the renderer as a whole-frame replacement; never patched
/// incrementally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderableAttributes {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
}

impl RenderableAttributes {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// First pass of the color mapping: maxima over the whole frame.
pub fn frame_stats(points: &[PointRecord]) -> FrameStats {
    let mut stats = FrameStats::default();
    for point in points {
        stats.max_distance = stats.max_distance.max(point.distance());
        stats.max_intensity = stats.max_intensity.max(point.intensity);
    }
    stats
}

/// Second pass: map every point to a color against the frame maxima.
///
/// Hue fades red to blue with distance from the origin, brightness scales
/// with intensity. The zero-denominator guards give a zero-intensity frame
/// full brightness and an all-at-origin frame pure blue. Channels are
/// clamped to [0, 1]; intensities above the assumed unit range cannot push
/// a channel past full.
pub fn normalize_frame(points: &[PointRecord]) -> RenderableAttributes {
    let stats = frame_stats(points);

    let mut attributes = RenderableAttributes {
        positions: Vec::with_capacity(points.len()),
        colors: Vec::with_capacity(points.len()),
    };

    for point in points {
        let norm_dist = if stats.max_distance > 0.0 {
            point.distance() / stats.max_distance
        } else {
            0.0
        };
        let norm_intensity = if stats.max_intensity > 0.0 {
            point.intensity / stats.max_intensity
        } else {
            1.0
        };

        attributes.positions.push([point.x, point.y, point.z]);
        attributes.colors.push([
            (norm_dist * norm_intensity).clamp(0.0, 1.0),
            (0.2 * norm_intensity).clamp(0.0, 1.0),
            ((1.0 - norm_dist) * norm_intensity).clamp(0.0, 1.0),
        ]);
    }

    attributes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f32, y: f32, z: f32, intensity: f32) -> PointRecord {
        PointRecord { x, y, z, intensity }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn stats_track_frame_maxima() {
        let points = [point(1.0, 0.0, 0.0, 5.0), point(0.0, 0.0, 3.0, 10.0)];
        let stats = frame_stats(&points);

        assert_close(stats.max_distance, 3.0);
        assert_close(stats.max_intensity, 10.0);
    }

    #[test]
    fn empty_frame_has_zero_stats_and_empty_attributes() {
        let stats = frame_stats(&[]);
        assert_eq!(stats, FrameStats::default());

        let attributes = normalize_frame(&[]);
        assert!(attributes.is_empty());
        assert!(attributes.colors.is_empty());
    }

    #[test]
    fn origin_point_with_zero_intensity_renders_pure_blue() {
        // Both denominators hit their guards: norm_dist 0, norm_intensity 1.
        let attributes = normalize_frame(&[point(0.0, 0.0, 0.0, 0.0)]);

        assert_eq!(attributes.positions, vec![[0.0, 0.0, 0.0]]);
        let [r, g, b] = attributes.colors[0];
        assert_close(r, 0.0);
        assert_close(g, 0.2);
        assert_close(b, 1.0);
    }

    #[test]
    fn two_point_frame_matches_hand_computed_colors() {
        let points = [point(1.0, 0.0, 0.0, 5.0), point(0.0, 0.0, 3.0, 10.0)];
        let attributes = normalize_frame(&points);

        assert_eq!(attributes.positions, vec![[1.0, 0.0, 0.0], [0.0, 0.0, 3.0]]);

        // Point 1: dist 1/3 of max, half max intensity.
        let [r, g, b] = attributes.colors[0];
        assert_close(r, 1.0 / 6.0);
        assert_close(g, 0.1);
        assert_close(b, 1.0 / 3.0);

        // Point 2: at max distance and max intensity.
        let [r, g, b] = attributes.colors[1];
        assert_close(r, 1.0);
        assert_close(g, 0.2);
        assert_close(b, 0.0);
    }

    #[test]
    fn normalised_values_stay_in_unit_range() {
        let points = [
            point(10.0, -4.0, 2.0, 0.1),
            point(-3.0, 0.5, 19.0, 7.0),
            point(0.0, 0.0, 0.0, 3.5),
            point(100.0, 100.0, 100.0, 0.0),
        ];

        for color in normalize_frame(&points).colors {
            for channel in color {
                assert!((0.0..=1.0).contains(&channel), "channel {channel} escaped");
            }
        }
    }

    #[test]
    fn colors_are_invariant_under_intensity_scaling() {
        let base = [
            point(1.0, 2.0, 3.0, 0.25),
            point(-4.0, 0.0, 1.0, 0.75),
            point(2.0, 2.0, -2.0, 0.5),
        ];
        let scaled: Vec<PointRecord> = base
            .iter()
            .map(|p| point(p.x, p.y, p.z, p.intensity * 40.0))
            .collect();

        let original = normalize_frame(&base);
        let rescaled = normalize_frame(&scaled);

        for (a, b) in original.colors.iter().zip(&rescaled.colors) {
            for (ca, cb) in a.iter().zip(b) {
                assert_close(*ca, *cb);
            }
        }
    }

    #[test]
    fn attribute_arrays_stay_index_aligned() {
        let points = [
            point(5.0, 0.0, 0.0, 1.0),
            point(0.0, 5.0, 0.0, 2.0),
            point(0.0, 0.0, 5.0, 3.0),
        ];
        let attributes = normalize_frame(&points);

        assert_eq!(attributes.len(), points.len());
        assert_eq!(attributes.positions.len(), attributes.colors.len());
        for (i, p) in points.iter().enumerate() {
            assert_eq!(attributes.positions[i], [p.x, p.y, p.z]);
        }
    }
}
