//! Triangle tessellation for the draw list

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::scene::{Frame, Shape};
use super::vertex::Vertex;
use crate::sim::Rect;

/// Segments used for a full circle
pub const CIRCLE_SEGMENTS: u32 = 32;
/// Segments per rounded corner
pub const CORNER_SEGMENTS: u32 = 6;
/// Outline stroke width for rounded rects
pub const OUTLINE_WIDTH: f32 = 1.0;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Perimeter points of a rounded rect, clockwise in screen space
fn rounded_outline(rect: &Rect, corner_radius: f32, inset: f32) -> Vec<Vec2> {
    let r = (corner_radius - inset).max(0.0);
    let half = rect.size / 2.0 - Vec2::splat(corner_radius);
    let center = rect.center();
    // Corner arc centers with their start angles (+y is down)
    let corners = [
        (center + Vec2::new(half.x, -half.y), -FRAC_PI_2),
        (center + Vec2::new(half.x, half.y), 0.0),
        (center + Vec2::new(-half.x, half.y), FRAC_PI_2),
        (center + Vec2::new(-half.x, -half.y), PI),
    ];

    let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS as usize + 1));
    for (arc_center, start) in corners {
        for i in 0..=CORNER_SEGMENTS {
            let theta = start + (i as f32 / CORNER_SEGMENTS as f32) * FRAC_PI_2;
            let offset = Vec2::new(theta.cos(), theta.sin()) * r;
            // Shift straight runs inward when the corner radius is used up
            let shrink = (inset - corner_radius).max(0.0);
            let toward_center = (center - arc_center).signum() * shrink;
            points.push(arc_center + offset + toward_center);
        }
    }
    points
}

/// Generate vertices for a rounded rectangle outline (`width` thick, inside the bounds)
pub fn rounded_rect_outline(
    rect: &Rect,
    corner_radius: f32,
    width: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let corner_radius = corner_radius.min(rect.size.x / 2.0).min(rect.size.y / 2.0);
    let outer = rounded_outline(rect, corner_radius, 0.0);
    let inner = rounded_outline(rect, corner_radius, width);

    let mut vertices = Vec::with_capacity(outer.len() * 6);
    for i in 0..outer.len() {
        let j = (i + 1) % outer.len();
        let (o1, o2, i1, i2) = (outer[i], outer[j], inner[i], inner[j]);

        // Two triangles per segment
        vertices.push(Vertex::new(i1.x, i1.y, color));
        vertices.push(Vertex::new(o1.x, o1.y, color));
        vertices.push(Vertex::new(i2.x, i2.y, color));

        vertices.push(Vertex::new(i2.x, i2.y, color));
        vertices.push(Vertex::new(o1.x, o1.y, color));
        vertices.push(Vertex::new(o2.x, o2.y, color));
    }

    vertices
}

/// Tessellate one shape
pub fn shape(shape: &Shape) -> Vec<Vertex> {
    match shape {
        Shape::Circle { circle: c, color } => circle(c.center, c.radius, *color, CIRCLE_SEGMENTS),
        Shape::Rect { rect: r, color } => rect(r, *color),
        Shape::RoundedRect {
            rect: r,
            corner_radius,
            color,
        } => rounded_rect_outline(r, *corner_radius, OUTLINE_WIDTH, *color),
    }
}

/// Tessellate a whole frame in draw order (text is left to the host)
pub fn frame_vertices(frame: &Frame) -> Vec<Vertex> {
    frame.shapes.iter().flat_map(shape).collect()
}
