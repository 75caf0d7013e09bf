//! Fixed prism geometry.
//!
//! Everything here is a constant or derived from one; there is no runtime
//! input and no failure mode. The side faces are always derived from the
//! front/back pairs, never authored independently.

use glam::Vec3;

/// Depth offset from the front face to the back face, along the view axis.
pub const DEPTH_OFFSET: f32 = -0.5;

/// Front-face colors, one per vertex: red, orange, yellow.
///
/// The back face reuses these, parallel-indexed to its vertices.
pub const FACE_COLORS: [Vec3; 3] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(1.0, 0.647, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
];

/// Side-quad color cycle: blue, purple, cyan, magenta.
pub const SIDE_COLORS: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.502, 0.0, 0.502),
    Vec3::new(0.0, 1.0, 1.0),
    Vec3::new(1.0, 0.0, 1.0),
];

/// Edges of the front triangle as index pairs, in side-quad order.
const EDGES: [(usize, usize); 3] = [(0, 1), (1, 2), (2, 0)];

/// Front triangle: peak, bottom-left, bottom-right.
///
/// Wound counter-clockwise as seen from +z so the face survives back-face
/// culling.
pub fn front_vertices() -> [Vec3; 3] {
    [
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
    ]
}

/// Back triangle: the front vertices translated by [`DEPTH_OFFSET`], same
/// index order.
///
/// Draw-buffer assembly reverses the order so the back face also winds
/// outward.
pub fn back_vertices() -> [Vec3; 3] {
    front_vertices().map(|v| v + Vec3::new(0.0, 0.0, DEPTH_OFFSET))
}

/// The three rectangular side faces, four vertices per quad.
///
/// For each front-triangle edge (i, j) the quad is
/// `[front[i], back[i], back[j], front[j]]`, which winds outward.
pub fn side_vertices() -> [Vec3; 12] {
    let front = front_vertices();
    let back = back_vertices();
    let mut out = [Vec3::ZERO; 12];
    for (q, &(i, j)) in EDGES.iter().enumerate() {
        out[q * 4] = front[i];
        out[q * 4 + 1] = back[i];
        out[q * 4 + 2] = back[j];
        out[q * 4 + 3] = front[j];
    }
    out
}

/// Per-vertex colors for [`side_vertices`]: the 4-color cycle repeated on
/// each quad.
pub fn side_colors() -> [Vec3; 12] {
    let mut out = [Vec3::ZERO; 12];
    for (k, slot) in out.iter_mut().enumerate() {
        *slot = SIDE_COLORS[k % 4];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── face derivation ──────────────────────────────────────────────

    #[test]
    fn back_face_is_front_translated_by_depth_offset() {
        let front = front_vertices();
        let back = back_vertices();
        for i in 0..3 {
            assert_eq!(back[i], front[i] + Vec3::new(0.0, 0.0, -0.5));
        }
    }

    #[test]
    fn front_winding_is_counter_clockwise_from_the_camera() {
        let [peak, bl, br] = front_vertices();
        let normal = (bl - peak).cross(br - bl);
        assert!(normal.z > 0.0);
    }

    // ── side quads ───────────────────────────────────────────────────

    #[test]
    fn side_quads_follow_the_edge_pattern() {
        let front = front_vertices();
        let back = back_vertices();
        let sides = side_vertices();
        assert_eq!(sides.len(), 12);
        for (q, (i, j)) in [(0usize, 1usize), (1, 2), (2, 0)].into_iter().enumerate() {
            let quad = &sides[q * 4..q * 4 + 4];
            assert_eq!(quad, [front[i], back[i], back[j], front[j]]);
        }
    }

    #[test]
    fn side_colors_cycle_every_four_vertices() {
        let colors = side_colors();
        for (k, c) in colors.iter().enumerate() {
            assert_eq!(*c, SIDE_COLORS[k % 4]);
        }
    }
}
