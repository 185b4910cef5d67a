//! Closed-form knot formulas, one pure function per family.
//!
//! Every formula is 2π-periodic in `t` and defined for all real `t`.

use std::f64::consts::FRAC_PI_2;

use knot_math::Point3;

use super::{CurveParameters, KnotFamily};

/// Torus knot tube-centre radius.
const TORUS_MAJOR: f64 = 3.0;
/// Torus knot minor radius.
const TORUS_MINOR: f64 = 2.0;
/// Celtic knot major radius.
const CELTIC_MAJOR: f64 = 3.0;

/// Evaluate the knot selected by `params.family` at parameter `t`.
pub fn position(params: &CurveParameters, t: f64) -> Point3 {
    let s = params.scale;
    match params.family {
        KnotFamily::Trefoil => trefoil(t, s),
        KnotFamily::FigureEight => figure_eight(t, s),
        KnotFamily::Cinquefoil => cinquefoil(t, s),
        KnotFamily::TorusKnot => torus_knot(t, s, params.p, params.q),
        KnotFamily::Lissajous => lissajous(t, s, params.nx, params.ny, params.nz),
        KnotFamily::Celtic => celtic(t, s, params.star_points, params.star_skip),
    }
}

pub fn trefoil(t: f64, scale: f64) -> Point3 {
    let x = t.sin() + 2.0 * (2.0 * t).sin();
    let y = t.cos() - 2.0 * (2.0 * t).cos();
    let z = -(3.0 * t).sin();
    Point3::new(x, y, z) * scale
}

pub fn figure_eight(t: f64, scale: f64) -> Point3 {
    let r = 2.0 + (2.0 * t).cos();
    let x = r * (3.0 * t).cos();
    let y = r * (3.0 * t).sin();
    let z = (4.0 * t).sin();
    Point3::new(x * scale * 0.6, y * scale * 0.6, z * scale)
}

/// Shares the trefoil's planar projection with a five-fold vertical wave.
pub fn cinquefoil(t: f64, scale: f64) -> Point3 {
    let x = t.sin() + 2.0 * (2.0 * t).sin();
    let y = t.cos() - 2.0 * (2.0 * t).cos();
    let z = -(5.0 * t).sin();
    Point3::new(x, y, z) * scale
}

pub fn torus_knot(t: f64, scale: f64, p: i32, q: i32) -> Point3 {
    let (p, q) = (f64::from(p), f64::from(q));
    let ring = TORUS_MAJOR + TORUS_MINOR * (p * t).cos();
    let x = ring * (q * t).cos();
    let y = ring * (q * t).sin();
    let z = TORUS_MINOR * (p * t).sin();
    Point3::new(x * scale * 0.5, y * scale * 0.5, z * scale)
}

pub fn lissajous(t: f64, scale: f64, nx: i32, ny: i32, nz: i32) -> Point3 {
    let x = (f64::from(nx) * t).sin();
    let y = (f64::from(ny) * t + FRAC_PI_2).sin();
    let z = (f64::from(nz) * t).sin();
    Point3::new(x, y, z) * scale
}

/// Torus-like star whose minor radius breathes with `q`.
pub fn celtic(t: f64, scale: f64, p: i32, q: i32) -> Point3 {
    let (p, q) = (f64::from(p), f64::from(q));
    let minor = 1.5 + 0.5 * (q * t).cos();
    let ring = CELTIC_MAJOR + minor * (p * t).cos();
    let x = ring * t.cos();
    let y = ring * t.sin();
    let z = minor * (p * t).sin() + (q * t).sin();
    Point3::new(x, y, z) * (scale * 0.4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use knot_math::dvec3;
    use std::f64::consts::TAU;

    fn all_params() -> Vec<CurveParameters> {
        KnotFamily::ALL
            .iter()
            .map(|&family| CurveParameters::new(family))
            .collect()
    }

    fn assert_point_eq(actual: Point3, expected: Point3) {
        assert!(
            (actual - expected).length() < 1e-12,
            "Expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_trefoil_at_zero() {
        assert_point_eq(trefoil(0.0, 1.0), dvec3(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_torus_knot_at_zero() {
        let params = CurveParameters::new(KnotFamily::TorusKnot)
            .with_torus(2, 3)
            .with_scale(1.0);
        assert_point_eq(position(&params, 0.0), dvec3(2.5, 0.0, 0.0));
    }

    #[test]
    fn test_lissajous_at_zero() {
        let params = CurveParameters::new(KnotFamily::Lissajous)
            .with_lissajous(3, 2, 4)
            .with_scale(2.0);
        assert_point_eq(position(&params, 0.0), dvec3(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_figure_eight_scaling() {
        // t=0: x = 3 * 0.6, z = 0
        assert_point_eq(figure_eight(0.0, 1.0), dvec3(1.8, 0.0, 0.0));
        assert_point_eq(figure_eight(0.0, 2.0), dvec3(3.6, 0.0, 0.0));
    }

    #[test]
    fn test_cinquefoil_matches_trefoil_in_plane() {
        for i in 0..32 {
            let t = TAU * i as f64 / 32.0;
            let a = trefoil(t, 1.5);
            let b = cinquefoil(t, 1.5);
            assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
        }
        assert_relative_eq!(cinquefoil(TAU / 20.0, 1.0).z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_celtic_at_zero() {
        // minor = 2, ring = 3 + 2 = 5, z = 0; scaled by 0.4
        assert_point_eq(celtic(0.0, 1.0, 5, 2), dvec3(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_quarter_turn_positions() {
        use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};
        let (r2, r3) = (2.0_f64.sqrt(), 3.0_f64.sqrt());

        // sin(π/2) + 2 sin(π), cos(π/2) - 2 cos(π), -sin(3π/2)
        assert_point_eq(trefoil(FRAC_PI_2, 1.0), dvec3(1.0, 2.0, 1.0));
        assert_point_eq(cinquefoil(FRAC_PI_2, 1.0), dvec3(1.0, 2.0, -1.0));

        // r = 2 + cos(π/4); angle 3π/8; z = sin(π/2)
        let r = 2.0 + r2 / 2.0;
        let a = 3.0 * FRAC_PI_4 / 2.0;
        assert_point_eq(
            figure_eight(FRAC_PI_4 / 2.0, 1.0),
            dvec3(0.6 * r * a.cos(), 0.6 * r * a.sin(), 1.0),
        );

        // ring = 3 + 2 cos(π/3) = 4; q t = π/2 puts the point on +Y
        assert_point_eq(torus_knot(FRAC_PI_6, 1.0, 2, 3), dvec3(0.0, 2.0, r3));

        // sin(π/2), sin(π/3 + π/2) = 1/2, sin(2π/3)
        assert_point_eq(lissajous(FRAC_PI_6, 2.0, 3, 2, 4), dvec3(2.0, 1.0, r3));

        // minor = 1.5, ring = 3 - 1.5/√2, z = 1.5 sin(5π/4) + sin(π/2)
        let ring = 3.0 - 1.5 * r2 / 2.0;
        assert_point_eq(
            celtic(FRAC_PI_4, 1.0, 5, 2),
            dvec3(ring * r2 / 2.0, ring * r2 / 2.0, 1.0 - 1.5 * r2 / 2.0) * 0.4,
        );
    }

    #[test]
    fn test_default_families_at_one_radian() {
        let expected = [
            (KnotFamily::Trefoil, dvec3(2.660065838459260, 1.372595978962424, -0.141120008059867)),
            (KnotFamily::FigureEight, dvec3(-0.940801648521125, 0.134108022715268, -0.756802495307928)),
            (KnotFamily::Cinquefoil, dvec3(2.660065838459260, 1.372595978962424, 0.958924274663138)),
            (KnotFamily::TorusKnot, dvec3(-1.073006499234985, 0.152953367162180, 1.818594853651363)),
            (KnotFamily::Lissajous, dvec3(0.141120008059867, -0.416146836547142, -0.756802495307928)),
            (KnotFamily::Celtic, dvec3(0.727564756549344, 1.133114972036611, -0.131824933389745)),
        ];
        for (family, point) in expected {
            let params = CurveParameters::new(family).with_scale(1.0);
            assert_point_eq(position(&params, 1.0), point);
        }
    }

    #[test]
    fn test_all_families_finite() {
        for params in all_params() {
            for i in 0..=1000 {
                let t = TAU * i as f64 / 1000.0;
                let p = position(&params, t);
                assert!(p.is_finite(), "{} not finite at t={}: {:?}", params.family, t, p);
            }
        }
    }

    #[test]
    fn test_all_families_periodic() {
        for params in all_params() {
            for i in 0..50 {
                let t = -3.0 + 0.37 * i as f64;
                let a = position(&params, t);
                let b = position(&params, t + TAU);
                assert!(
                    (a - b).length() < 1e-9,
                    "{} not periodic at t={}: {:?} vs {:?}",
                    params.family,
                    t,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_zero_scale_collapses_to_origin() {
        for params in all_params() {
            let p = position(&params.with_scale(0.0), 1.234);
            assert_eq!(p, Point3::ZERO);
        }
    }
}
