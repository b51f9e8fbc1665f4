#[cfg(test)]
mod tests_lattice3d {
    use crate::lattice::lattice3d::Lattice3D;
    use crate::lattice::lattice_types::LatticeType3D;
    use crate::symmetries::high_symmetry_points::SymmetryPointLabel;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_cubic_lattice_construction() {
        let lattice = Lattice3D::new(LatticeType3D::Cubic, 1.0).unwrap();
        assert_relative_eq!(lattice.cell_volume, 1.0, max_relative = TOL);
        assert_eq!(lattice.brillouin_zone.faces.len(), 6);
        assert_relative_eq!(
            lattice.brillouin_zone.volume(),
            (2.0 * PI).powi(3),
            max_relative = TOL
        );
    }

    #[test]
    fn test_fcc_lattice_construction() {
        let lattice = Lattice3D::new(LatticeType3D::Fcc, 1.0).unwrap();
        assert_relative_eq!(lattice.cell_volume, 0.25, max_relative = TOL);
        assert_eq!(lattice.brillouin_zone.faces.len(), 14);
        // Zone volume equals the reciprocal cell volume
        assert_relative_eq!(
            lattice.brillouin_zone.volume(),
            (2.0 * PI).powi(3) / lattice.cell_volume,
            max_relative = TOL
        );
    }

    #[test]
    fn test_bcc_lattice_construction() {
        let lattice = Lattice3D::new(LatticeType3D::Bcc, 1.0).unwrap();
        assert_relative_eq!(lattice.cell_volume, 0.5, max_relative = TOL);
        assert_eq!(lattice.brillouin_zone.faces.len(), 12);
        assert_relative_eq!(
            lattice.brillouin_zone.volume(),
            2.0 * (2.0 * PI).powi(3),
            max_relative = TOL
        );
    }

    #[test]
    fn test_origin_is_inside_every_first_zone() {
        for lattice_type in [LatticeType3D::Cubic, LatticeType3D::Fcc, LatticeType3D::Bcc] {
            let lattice = Lattice3D::new(lattice_type, 1.0).unwrap();
            assert!(
                lattice.in_brillouin_zone(Vector3::zeros()),
                "{lattice_type} first zone must contain the origin"
            );
        }
    }

    #[test]
    fn test_frac_cart_round_trip() {
        let lattice = Lattice3D::new(LatticeType3D::Fcc, 1.0).unwrap();
        let k = Vector3::new(2.1, -0.4, 0.9);
        let frac = lattice.cart_to_frac(k);
        let back = lattice.frac_to_cart(frac);
        assert!((back - k).norm() < TOL);
    }

    #[test]
    fn test_reduce_to_central_cell() {
        let lattice = Lattice3D::new(LatticeType3D::Bcc, 1.0).unwrap();
        let q = Vector3::new(0.2, 0.1, -0.3);
        let shifted = q + lattice.reciprocal.b1 - lattice.reciprocal.b3 * 2.0;
        let reduced = lattice.reduce_to_central_cell(shifted);
        assert!((reduced - q).norm() < TOL);
    }

    #[test]
    fn test_fcc_high_symmetry_points() {
        let lattice = Lattice3D::new(LatticeType3D::Fcc, 1.0).unwrap();
        for label in [
            SymmetryPointLabel::Gamma,
            SymmetryPointLabel::X,
            SymmetryPointLabel::L,
            SymmetryPointLabel::W,
            SymmetryPointLabel::K,
        ] {
            assert!(lattice.high_symmetry.get_point(&label).is_some());
        }

        let x = lattice.high_symmetry.get_point(&SymmetryPointLabel::X).unwrap();
        assert_relative_eq!(x.cartesian.norm(), 2.0 * PI, max_relative = TOL);
        let l = lattice.high_symmetry.get_point(&SymmetryPointLabel::L).unwrap();
        assert_relative_eq!(l.cartesian.norm(), 3.0_f64.sqrt() * PI, max_relative = TOL);
        let w = lattice.high_symmetry.get_point(&SymmetryPointLabel::W).unwrap();
        assert_relative_eq!(w.cartesian.norm(), 5.0_f64.sqrt() * PI, max_relative = TOL);
    }

    #[test]
    fn test_bcc_high_symmetry_points() {
        let lattice = Lattice3D::new(LatticeType3D::Bcc, 1.0).unwrap();
        let h = lattice.high_symmetry.get_point(&SymmetryPointLabel::H).unwrap();
        assert!((h.cartesian - Vector3::new(0.0, 2.0 * PI, 0.0)).norm() < TOL);
        let p = lattice.high_symmetry.get_point(&SymmetryPointLabel::P).unwrap();
        assert!((p.cartesian - Vector3::new(PI, PI, PI)).norm() < TOL);
        let n = lattice.high_symmetry.get_point(&SymmetryPointLabel::N).unwrap();
        assert!((n.cartesian - Vector3::new(PI, PI, 0.0)).norm() < TOL);
    }

    #[test]
    fn test_k_path_visits_every_label() {
        let lattice = Lattice3D::new(LatticeType3D::Cubic, 1.0).unwrap();
        let path = lattice.k_path(5);
        // Gamma -> X -> M -> Gamma -> R -> X: five legs
        assert_eq!(path.len(), 5 * 5 + 1);
        assert!(path[0].norm() < TOL);
    }
}
