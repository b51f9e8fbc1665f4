#[cfg(test)]
mod tests_polyhedron {
    use crate::geometry::polyhedron::ConvexPolyhedron;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn unit_cube() -> ConvexPolyhedron {
        ConvexPolyhedron::axis_aligned_cube(1.0)
    }

    #[test]
    fn test_cube_topology_and_measures() {
        let cube = unit_cube();
        assert_eq!(cube.faces.len(), 6);
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.edges().len(), 12);
        assert_relative_eq!(cube.volume(), 8.0, max_relative = 1e-12);
        assert_relative_eq!(cube.bounding_radius(), 3.0_f64.sqrt(), max_relative = 1e-12);
        for face in &cube.faces {
            assert_eq!(face.vertices.len(), 4);
            assert_relative_eq!(face.area(), 4.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_cube_normals_point_outward() {
        let cube = unit_cube();
        for face in &cube.faces {
            assert!(
                face.normal.dot(&face.centroid()) > 0.0,
                "outward normal must point away from the interior"
            );
            // Loop orientation must agree with the stored normal
            let v0 = face.vertices[0];
            let v1 = face.vertices[1];
            let v2 = face.vertices[2];
            let loop_normal = (v1 - v0).cross(&(v2 - v0));
            assert!(loop_normal.dot(&face.normal) > 0.0);
        }
    }

    #[test]
    fn test_contains() {
        let cube = unit_cube();
        assert!(cube.contains(&Vector3::zeros()));
        assert!(cube.contains(&Vector3::new(0.99, -0.99, 0.99)));
        assert!(!cube.contains(&Vector3::new(1.5, 0.0, 0.0)));
        assert!(!ConvexPolyhedron::default().contains(&Vector3::zeros()));
    }

    #[test]
    fn test_clip_splits_cube_and_seals_with_cap() {
        let half = unit_cube().clip_half_space(&Vector3::x(), 0.0);
        // Five clipped originals plus the cap
        assert_eq!(half.faces.len(), 6);
        assert_relative_eq!(half.volume(), 4.0, max_relative = 1e-12);

        let cap = half
            .faces
            .iter()
            .find(|f| (f.normal - Vector3::x()).norm() < 1e-9)
            .expect("cutting plane must gain a cap face");
        assert_eq!(cap.vertices.len(), 4);
        assert_relative_eq!(cap.area(), 4.0, max_relative = 1e-9);

        // Closure: every edge shared by exactly two faces
        assert_eq!(half.vertices().len(), 8);
        assert_eq!(half.edges().len(), 12);
    }

    #[test]
    fn test_clip_with_containing_half_space_is_identity() {
        let clipped = unit_cube().clip_half_space(&Vector3::x(), 5.0);
        assert_eq!(clipped.faces.len(), 6);
        assert_relative_eq!(clipped.volume(), 8.0, max_relative = 1e-12);
    }

    #[test]
    fn test_clip_tangent_to_face_adds_nothing() {
        // The +x face lies exactly on the cutting plane; within tolerance
        // every vertex is inside and no cap is produced.
        let clipped = unit_cube().clip_half_space(&Vector3::x(), 1.0);
        assert_eq!(clipped.faces.len(), 6);
        assert_relative_eq!(clipped.volume(), 8.0, max_relative = 1e-12);
    }

    #[test]
    fn test_clip_with_disjoint_half_space_removes_everything() {
        let clipped = unit_cube().clip_half_space(&Vector3::x(), -5.0);
        assert!(clipped.is_degenerate());
        assert_eq!(clipped.volume(), 0.0);
    }

    #[test]
    fn test_corner_cut_keeps_euler_characteristic() {
        // Slicing one corner: the cap triangle, three pentagons, three squares.
        let cut = unit_cube().clip_half_space(&Vector3::new(1.0, 1.0, 1.0), 1.5);
        let v = cut.vertices().len() as i64;
        let e = cut.edges().len() as i64;
        let f = cut.faces.len() as i64;
        assert_eq!(f, 7);
        assert_eq!(v, 10);
        assert_eq!(e, 15);
        assert_eq!(v - e + f, 2, "clipping must preserve closure");

        // Cut tetrahedron has legs of length 1.5
        let expected = 8.0 - 1.5_f64.powi(3) / 6.0;
        assert_relative_eq!(cut.volume(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_cap_vertices_are_deduplicated() {
        // A cut through four cube edges meets each of them in exactly one
        // point even though two faces report every crossing.
        let half = unit_cube().clip_half_space(&Vector3::new(1.0, 1.0, 0.0), 0.0);
        let cap = half
            .faces
            .iter()
            .find(|f| f.normal.x > 0.5 && f.normal.y > 0.5)
            .expect("diagonal cut must gain a cap face");
        assert_eq!(cap.vertices.len(), 4);
        assert_relative_eq!(half.volume(), 4.0, max_relative = 1e-12);

        // Faces squashed to collapsed loops by the tangential cut are gone
        // and the remainder is a closed triangular prism.
        let v = half.vertices().len() as i64;
        let e = half.edges().len() as i64;
        let f = half.faces.len() as i64;
        assert_eq!((v, e, f), (6, 9, 5));
        assert_eq!(v - e + f, 2);
    }
}
