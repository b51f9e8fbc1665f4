#[cfg(test)]
mod tests_high_symmetry_points {
    use crate::lattice::construction::{hexagonal_basis, square_basis};
    use crate::lattice::lattice_types::LatticeType2D;
    use crate::lattice::reciprocal::reciprocal_basis_2d;
    use crate::symmetries::high_symmetry_points::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_labels_render_conventional_glyphs() {
        assert_eq!(SymmetryPointLabel::Gamma.as_str(), "Γ");
        assert_eq!(SymmetryPointLabel::X.as_str(), "X");
        assert_eq!(SymmetryPointLabel::K.as_str(), "K");
    }

    #[test]
    fn test_gamma_is_always_at_the_origin() {
        let basis = reciprocal_basis_2d(&hexagonal_basis(1.0).unwrap()).unwrap();
        for lattice_type in [
            LatticeType2D::Square,
            LatticeType2D::Rectangular,
            LatticeType2D::Hexagonal,
        ] {
            let data = generate_2d_high_symmetry_points(lattice_type, &basis);
            let gamma = data.get_point(&SymmetryPointLabel::Gamma).unwrap();
            assert!(gamma.cartesian.norm() < TOL);
            assert_eq!(data.standard_path.first(), Some(&SymmetryPointLabel::Gamma));
            assert_eq!(data.standard_path.last(), Some(&SymmetryPointLabel::Gamma));
        }
    }

    #[test]
    fn test_square_points_are_half_basis_combinations() {
        let basis = reciprocal_basis_2d(&square_basis(1.0).unwrap()).unwrap();
        let data = generate_2d_high_symmetry_points(LatticeType2D::Square, &basis);

        let x = data.get_point(&SymmetryPointLabel::X).unwrap();
        assert!((x.cartesian - basis.b1 * 0.5).norm() < TOL);

        let m = data.get_point(&SymmetryPointLabel::M).unwrap();
        assert!((m.cartesian - (basis.b1 + basis.b2) * 0.5).norm() < TOL);
    }

    #[test]
    fn test_hexagonal_corner_and_edge_points() {
        // For a = 1 with the 60-degree convention: M at 2 pi / sqrt(3),
        // K at the hexagon corner 4 pi / 3 on the x-axis.
        let basis = reciprocal_basis_2d(&hexagonal_basis(1.0).unwrap()).unwrap();
        let data = generate_2d_high_symmetry_points(LatticeType2D::Hexagonal, &basis);

        let m = data.get_point(&SymmetryPointLabel::M).unwrap();
        assert_relative_eq!(m.cartesian.norm(), 2.0 * PI / 3.0_f64.sqrt(), max_relative = TOL);

        let k = data.get_point(&SymmetryPointLabel::K).unwrap();
        assert!((k.cartesian - Vector2::new(4.0 * PI / 3.0, 0.0)).norm() < TOL);
        assert_relative_eq!(k.cartesian.norm(), 4.0 * PI / 3.0, max_relative = TOL);

        // K is farther out than M
        assert!(k.cartesian.norm() > m.cartesian.norm());
    }

    #[test]
    fn test_standard_path_points_resolve() {
        let basis = reciprocal_basis_2d(&square_basis(1.0).unwrap()).unwrap();
        let data = generate_2d_high_symmetry_points(LatticeType2D::Square, &basis);
        let path = data.standard_path_points();
        assert_eq!(path.len(), data.standard_path.len());
    }

    #[test]
    fn test_interpolate_path_endpoints_and_density() {
        let basis = reciprocal_basis_2d(&square_basis(1.0).unwrap()).unwrap();
        let data = generate_2d_high_symmetry_points(LatticeType2D::Square, &basis);
        let k_points = interpolate_path_2d(&data, 8);
        // Three legs, eight points each, plus the closing endpoint
        assert_eq!(k_points.len(), 3 * 8 + 1);
        assert!(k_points[0].norm() < TOL);
        assert!(k_points.last().unwrap().norm() < TOL);

        let zero = interpolate_path_2d(&data, 0);
        assert!(zero.is_empty());
    }

    #[test]
    fn test_points_scale_with_the_reciprocal_basis() {
        let small = reciprocal_basis_2d(&hexagonal_basis(1.0).unwrap()).unwrap();
        let large = reciprocal_basis_2d(&hexagonal_basis(2.0).unwrap()).unwrap();
        let k_small = generate_2d_high_symmetry_points(LatticeType2D::Hexagonal, &small);
        let k_large = generate_2d_high_symmetry_points(LatticeType2D::Hexagonal, &large);
        let ks = k_small.get_point(&SymmetryPointLabel::K).unwrap();
        let kl = k_large.get_point(&SymmetryPointLabel::K).unwrap();
        assert_relative_eq!(ks.cartesian.norm(), 2.0 * kl.cartesian.norm(), max_relative = TOL);
    }
}
