//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex slice, ready for upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// HSV (hue in degrees, s and v in 0..=1) to opaque RGBA
pub fn hsv_to_rgba(hue: f32, s: f32, v: f32) -> [f32; 4] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn test_hsv_primaries() {
        assert!(close(hsv_to_rgba(0.0, 1.0, 1.0), [1.0, 0.0, 0.0, 1.0]));
        assert!(close(hsv_to_rgba(120.0, 1.0, 1.0), [0.0, 1.0, 0.0, 1.0]));
        assert!(close(hsv_to_rgba(240.0, 1.0, 1.0), [0.0, 0.0, 1.0, 1.0]));
        assert!(close(hsv_to_rgba(60.0, 1.0, 1.0), [1.0, 1.0, 0.0, 1.0]));
        // Wraps
        assert!(close(hsv_to_rgba(360.0, 1.0, 1.0), [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_vertex_bytes() {
        let verts = [Vertex::new(1.0, 2.0, colors::BALL); 3];
        // 2 position + 4 color floats, tightly packed
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(as_bytes(&verts).len(), 3 * 24);
    }
}
