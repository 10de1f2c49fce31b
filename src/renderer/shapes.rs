//! Shape generation for 2D primitives
//!
//! Every function emits a triangle list in screen coordinates (y down).

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::vertex::Vertex;

fn push_quad(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
    // a-b-c-d counter-clockwise corners, two triangles
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));

    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(c.x, c.y, color));
    out.push(Vertex::new(d.x, d.y, color));
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(top_left: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    let br = top_left + size;
    push_quad(
        &mut vertices,
        top_left,
        Vec2::new(br.x, top_left.y),
        br,
        Vec2::new(top_left.x, br.y),
        color,
    );
    vertices
}

/// Generate vertices for a filled rectangle with rounded corners
///
/// The radius is clamped to half the shorter side. Each corner is a fan of
/// `corner_segments` triangles.
pub fn rounded_rect(
    top_left: Vec2,
    size: Vec2,
    radius: f32,
    color: [f32; 4],
    corner_segments: u32,
) -> Vec<Vertex> {
    let r = radius.max(0.0).min(size.x.min(size.y) / 2.0);
    if r == 0.0 {
        return rect(top_left, size, color);
    }

    let segments = corner_segments.max(1);
    let mut vertices = Vec::with_capacity(18 + (segments as usize) * 12);

    // Center cross: one tall band and two side bands
    vertices.extend(rect(
        top_left + Vec2::new(r, 0.0),
        Vec2::new(size.x - 2.0 * r, size.y),
        color,
    ));
    vertices.extend(rect(
        top_left + Vec2::new(0.0, r),
        Vec2::new(r, size.y - 2.0 * r),
        color,
    ));
    vertices.extend(rect(
        top_left + Vec2::new(size.x - r, r),
        Vec2::new(r, size.y - 2.0 * r),
        color,
    ));

    // Corner fans: (center, start angle) with y down
    let corners = [
        (top_left + Vec2::new(r, r), PI),
        (top_left + Vec2::new(size.x - r, r), -FRAC_PI_2),
        (top_left + Vec2::new(size.x - r, size.y - r), 0.0),
        (top_left + Vec2::new(r, size.y - r), FRAC_PI_2),
    ];
    for (center, start) in corners {
        for i in 0..segments {
            let theta1 = start + (i as f32 / segments as f32) * FRAC_PI_2;
            let theta2 = start + ((i + 1) as f32 / segments as f32) * FRAC_PI_2;
            vertices.push(Vertex::new(center.x, center.y, color));
            vertices.push(Vertex::new(
                center.x + r * theta1.cos(),
                center.y + r * theta1.sin(),
                color,
            ));
            vertices.push(Vertex::new(
                center.x + r * theta2.cos(),
                center.y + r * theta2.sin(),
                color,
            ));
        }
    }

    vertices
}

/// Generate vertices for a line segment of the given pixel width
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let mut vertices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        from + perp,
        from - perp,
        to - perp,
        to + perp,
        color,
    );
    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;
        let (dir1, dir2) = (Vec2::from_angle(theta1), Vec2::from_angle(theta2));

        push_quad(
            &mut vertices,
            center + dir1 * inner_radius,
            center + dir1 * outer_radius,
            center + dir2 * outer_radius,
            center + dir2 * inner_radius,
            color,
        );
    }

    vertices
}
