#[cfg(test)]
mod tests_lattice2d {
    use crate::lattice::lattice2d::Lattice2D;
    use crate::lattice::lattice_types::LatticeType2D;
    use crate::lattice::zones::FragmentBudget;
    use crate::symmetries::high_symmetry_points::SymmetryPointLabel;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    fn square_lattice(a: f64) -> Lattice2D {
        Lattice2D::new(LatticeType2D::Square, a, a).unwrap()
    }

    fn hexagonal_lattice(a: f64) -> Lattice2D {
        Lattice2D::new(LatticeType2D::Hexagonal, a, a).unwrap()
    }

    #[test]
    fn test_square_lattice_construction() {
        let lattice = square_lattice(1.0);
        assert_relative_eq!(lattice.cell_area, 1.0, max_relative = TOL);
        assert_relative_eq!(
            lattice.brillouin_zone.area(),
            (2.0 * PI).powi(2),
            max_relative = TOL
        );
        assert_eq!(lattice.brillouin_zone.vertices.len(), 4);
    }

    #[test]
    fn test_brillouin_zone_area_scales_inversely() {
        // Doubling the lattice constant quarters the reciprocal cell
        let small = square_lattice(1.0);
        let large = square_lattice(2.0);
        assert_relative_eq!(
            large.brillouin_zone.area(),
            small.brillouin_zone.area() / 4.0,
            max_relative = TOL
        );
    }

    #[test]
    fn test_in_brillouin_zone() {
        let lattice = square_lattice(1.0);
        assert!(lattice.in_brillouin_zone(Vector2::zeros()));
        assert!(lattice.in_brillouin_zone(Vector2::new(0.5 * PI, -0.5 * PI)));
        assert!(!lattice.in_brillouin_zone(Vector2::new(1.5 * PI, 0.0)));
    }

    #[test]
    fn test_frac_cart_round_trip() {
        let lattice = hexagonal_lattice(1.0);
        let k = Vector2::new(1.3, -0.7);
        let frac = lattice.cart_to_frac(k);
        let back = lattice.frac_to_cart(frac);
        assert!((back - k).norm() < TOL);
    }

    #[test]
    fn test_reduce_to_central_cell() {
        let lattice = square_lattice(1.0);
        let q = Vector2::new(0.3, -0.4);
        let shifted = q + lattice.reciprocal.b1 * 2.0 - lattice.reciprocal.b2;
        let reduced = lattice.reduce_to_central_cell(shifted);
        assert!((reduced - q).norm() < TOL);
    }

    #[test]
    fn test_square_high_symmetry_points() {
        let lattice = square_lattice(1.0);
        let x = lattice
            .high_symmetry
            .get_point(&SymmetryPointLabel::X)
            .unwrap();
        assert!((x.cartesian - Vector2::new(PI, 0.0)).norm() < TOL);
        let m = lattice
            .high_symmetry
            .get_point(&SymmetryPointLabel::M)
            .unwrap();
        assert!((m.cartesian - Vector2::new(PI, PI)).norm() < TOL);
        // M sits on the zone corner; just inside of it still classifies as zone 1
        assert!(lattice.in_brillouin_zone(m.cartesian * 0.99));
    }

    #[test]
    fn test_rectangular_high_symmetry_points() {
        let lattice = Lattice2D::new(LatticeType2D::Rectangular, 1.0, 2.0).unwrap();
        for label in [
            SymmetryPointLabel::Gamma,
            SymmetryPointLabel::X,
            SymmetryPointLabel::Y,
            SymmetryPointLabel::S,
        ] {
            assert!(lattice.high_symmetry.get_point(&label).is_some());
        }
        let y = lattice.high_symmetry.get_point(&SymmetryPointLabel::Y).unwrap();
        assert!((y.cartesian - Vector2::new(0.0, 0.5 * PI)).norm() < TOL);
    }

    #[test]
    fn test_k_path_square_lattice() {
        let lattice = square_lattice(1.0);
        let path = lattice.k_path(10);
        // Gamma -> X -> M -> Gamma with 10 points per leg plus the endpoint
        assert_eq!(path.len(), 31);
        assert!(path[0].norm() < TOL);
        assert!(path.last().unwrap().norm() < TOL);
        // The path passes through X
        assert!(path.iter().any(|k| (k - Vector2::new(PI, 0.0)).norm() < TOL));
    }

    #[test]
    fn test_zones_through_the_aggregate() {
        let lattice = square_lattice(1.0);
        let zones = lattice.zones(2, 6, FragmentBudget::new(50_000)).unwrap();
        assert_eq!(zones.len(), 2);
        assert_relative_eq!(zones[1].area(), zones[0].area(), max_relative = 0.01);
    }

    #[test]
    fn test_bragg_planes_through_the_aggregate() {
        let lattice = square_lattice(1.0);
        let planes = lattice.bragg_planes(1);
        assert_eq!(planes.len(), 8);
        assert_relative_eq!(planes[0].distance(), PI, max_relative = TOL);
    }
}
