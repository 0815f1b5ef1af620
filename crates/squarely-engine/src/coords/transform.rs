use glam::{Mat4, Vec2};

/// Near clipping plane of the world projection.
pub const NEAR_PLANE: f32 = -1.0;

/// Far clipping plane of the world projection.
pub const FAR_PLANE: f32 = 1.0;

/// Orthographic projection mapping `[-aspect, aspect] x [-1, 1]` onto clip space.
///
/// Depth follows the wgpu convention (`[near, far]` maps to `[0, 1]`).
pub fn world_projection(aspect_ratio: f32) -> Mat4 {
    Mat4::orthographic_rh(-aspect_ratio, aspect_ratio, -1.0, 1.0, NEAR_PLANE, FAR_PLANE)
}

/// Model matrix placing geometry at `position` on the `z = 0` plane.
pub fn model_translation(position: Vec2) -> Mat4 {
    Mat4::from_translation(position.extend(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn project(m: Mat4, p: Vec3) -> Vec3 {
        m.project_point3(p)
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-6
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn projection_maps_horizontal_edges_to_clip_edges() {
        let p = world_projection(2.0);
        assert!(close(project(p, Vec3::new(2.0, 0.0, 0.0)), Vec3::new(1.0, 0.0, 0.5)));
        assert!(close(project(p, Vec3::new(-2.0, 0.0, 0.0)), Vec3::new(-1.0, 0.0, 0.5)));
    }

    #[test]
    fn projection_keeps_vertical_unit_range() {
        let p = world_projection(1.5);
        assert!(close(project(p, Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.0, 1.0, 0.5)));
        assert!(close(project(p, Vec3::new(0.0, -1.0, 0.0)), Vec3::new(0.0, -1.0, 0.5)));
    }

    #[test]
    fn projection_depth_stays_inside_wgpu_range() {
        let p = world_projection(1.0);
        let near = project(p, Vec3::new(0.0, 0.0, -NEAR_PLANE)).z;
        let far = project(p, Vec3::new(0.0, 0.0, -FAR_PLANE)).z;
        assert!((0.0..=1.0).contains(&near));
        assert!((0.0..=1.0).contains(&far));
    }

    // ── translation ───────────────────────────────────────────────────────

    #[test]
    fn translation_moves_corner() {
        let m = model_translation(Vec2::new(0.5, -0.25));
        assert!(close(project(m, Vec3::new(0.1, 0.1, 0.0)), Vec3::new(0.6, -0.15, 0.0)));
    }

    #[test]
    fn translation_at_origin_is_identity() {
        assert_eq!(model_translation(Vec2::ZERO), Mat4::IDENTITY);
    }
}
