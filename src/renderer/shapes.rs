//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in world coordinates; the
//! pipeline maps world space to NDC per frame.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Aabb;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(r: &Aabb, color: [f32; 4]) -> Vec<Vertex> {
    let tl = Vertex::new(r.left(), r.top(), color);
    let tr = Vertex::new(r.right(), r.top(), color);
    let bl = Vertex::new(r.left(), r.bottom(), color);
    let br = Vertex::new(r.right(), r.bottom(), color);

    vec![tl, bl, tr, tr, bl, br]
}

/// Generate vertices for a filled circle as a triangle fan
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

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    #[test]
    fn test_rect_emits_two_triangles() {
        let vertices = rect(&Aabb::at(10.0, 20.0, 30.0, 40.0), WHITE);
        assert_eq!(vertices.len(), 6);
        // All corners stay inside the rectangle's bounds
        for v in &vertices {
            assert!(v.position[0] >= 10.0 && v.position[0] <= 40.0);
            assert!(v.position[1] >= 20.0 && v.position[1] <= 60.0);
        }
    }

    #[test]
    fn test_circle_vertex_count() {
        let vertices = circle(Vec2::ZERO, 10.0, WHITE, 16);
        assert_eq!(vertices.len(), 16 * 3);
    }

    #[test]
    fn test_circle_stays_on_radius() {
        let vertices = circle(Vec2::new(5.0, 5.0), 10.0, WHITE, 8);
        for chunk in vertices.chunks(3) {
            // First vertex of each triangle is the center
            assert_eq!(chunk[0].position, [5.0, 5.0]);
            for v in &chunk[1..] {
                let dx = v.position[0] - 5.0;
                let dy = v.position[1] - 5.0;
                assert!(((dx * dx + dy * dy).sqrt() - 10.0).abs() < 1e-4);
            }
        }
    }
}
