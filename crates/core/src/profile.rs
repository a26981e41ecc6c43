//! Bezier lightness/chroma profiles.
//!
//! A profile is a pair of quadratic Bezier arcs through five control points
//! in LUV space: black (`p0`), the most saturated in-gamut color at the
//! profile hue (`p1`), a warm near-white (`p2`), and the saturation-blended
//! handles `q0`, `q1`, `q2` joining them. Sampling inverts the lightness
//! component of the curve so that a requested lightness maps back to a
//! curve parameter, which keeps the output perceptually ordered even
//! though the curve itself bends through chroma.

use crate::color::{lch_chroma, lch_to_luv, Lch, Luv, TAU};
use crate::constants::ColorScience;
use crate::gamut::{max_saturation_at, most_saturated_in_gamut};

const PI: f64 = std::f64::consts::PI;

/// Denominator threshold below which the Bezier inversion degenerates to a
/// linear chord.
const DEGENERATE_DENOM: f64 = 1e-12;

/// Blends `alpha` of the way from `h0` toward `h1`, folding the hue
/// difference with a truncated remainder (Rust `%`, matching C `fmod`).
/// Positive differences above π wrap to the short arc through 2π; the
/// result can be negative, which downstream trigonometry accepts.
fn mix_hue(alpha: f64, h0: f64, h1: f64) -> f64 {
    let m = (PI + h1 - h0) % TAU - PI;
    (h0 + alpha * m) % TAU
}

/// Quadratic Bezier through three LUV control points.
pub fn bezier(b0: Luv, b1: Luv, b2: Luv, t: f64) -> Luv {
    let a = (1.0 - t) * (1.0 - t);
    let b = 2.0 * (1.0 - t) * t;
    let c = t * t;
    b0.scale(a).add(b1.scale(b)).add(b2.scale(c))
}

/// Inverts one scalar component of a quadratic Bezier: finds t such that
/// B(b0, b1, b2)(t) = v, taking the root on the increasing branch.
///
/// The discriminant is clamped at zero so values slightly outside the
/// curve's range resolve to an endpoint instead of NaN. When the curve is
/// (numerically) a straight line the quadratic denominator vanishes and
/// the chord parameterization is used instead.
pub fn invert_bezier(b0: f64, b1: f64, b2: f64, v: f64) -> f64 {
    let denom = b0 - 2.0 * b1 + b2;
    if denom.abs() < DEGENERATE_DENOM {
        let span = b2 - b0;
        if span.abs() < DEGENERATE_DENOM {
            return 0.0;
        }
        return (v - b0) / span;
    }
    let disc = (b1 * b1 - b0 * b2 + denom * v).max(0.0);
    (b0 - b1 + disc.sqrt()) / denom
}

/// Control points of a lightness/chroma profile at a fixed hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoints {
    pub p0: Luv,
    pub p1: Luv,
    pub p2: Luv,
    pub q0: Luv,
    pub q1: Luv,
    pub q2: Luv,
}

impl ProfilePoints {
    /// Builds the control points for a hue.
    ///
    /// `saturation` pulls the handles toward the saturated mid point;
    /// `warmth` pulls the light end toward the bright point (yellow) in
    /// both lightness and hue.
    pub fn build(hue: f64, saturation: f64, warmth: f64, cs: &ColorScience) -> Self {
        let p0 = lch_to_luv(Lch {
            l: 0.0,
            c: 0.0,
            h: hue,
        });
        let p1 = most_saturated_in_gamut(hue, cs);

        let p2_l = (1.0 - warmth) * 100.0 + warmth * cs.bright_point.l;
        let p2_h = mix_hue(warmth, hue, cs.bright_hue);
        let p2_s = max_saturation_at(p2_l, p2_h, cs).min(warmth * saturation * cs.bright_saturation);
        let p2 = lch_to_luv(Lch {
            l: p2_l,
            c: lch_chroma(p2_l, p2_s),
            h: p2_h,
        });

        let q0 = p0.mix(p1, saturation);
        let q2 = p2.mix(p1, saturation);
        let q1 = q0.add(q2).scale(0.5);

        Self {
            p0,
            p1,
            p2,
            q0,
            q1,
            q2,
        }
    }

    /// Samples the profile at `t` in [0, 1].
    ///
    /// The target lightness follows an exponential ramp controlled by
    /// `contrast` and `brightness`; the curve parameter is recovered by
    /// inverting the lightness component of whichever arc contains it.
    pub fn sample(&self, t: f64, contrast: f64, brightness: f64) -> Luv {
        let l = target_lightness(t, contrast, brightness);
        let s = if l <= self.q1.l {
            0.5 * invert_bezier(self.p0.l, self.q0.l, self.q1.l, l)
        } else {
            0.5 * invert_bezier(self.q1.l, self.q2.l, self.p2.l, l) + 0.5
        };
        if s <= 0.5 {
            bezier(self.p0, self.q0, self.q1, 2.0 * s)
        } else {
            bezier(self.q1, self.q2, self.p2, 2.0 * (s - 0.5))
        }
    }
}

/// Exponential lightness ramp: 0 is darkest, 1 is lightest.
///
/// At t = 1 with full brightness the value approaches 100 (the 0.2 base
/// keeps steps perceptually even across the ramp).
pub fn target_lightness(t: f64, contrast: f64, brightness: f64) -> f64 {
    125.0 - 125.0 * 0.2_f64.powf((1.0 - contrast) * brightness + t * contrast)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cs() -> &'static ColorScience {
        ColorScience::d65()
    }

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // -- Bezier math --

    #[test]
    fn bezier_hits_endpoints() {
        let b0 = Luv::new(0.0, 1.0, 2.0);
        let b1 = Luv::new(10.0, -3.0, 4.0);
        let b2 = Luv::new(50.0, 7.0, -1.0);
        assert_eq!(bezier(b0, b1, b2, 0.0), b0);
        assert_eq!(bezier(b0, b1, b2, 1.0), b2);
    }

    #[test]
    fn bezier_midpoint_weights_handle() {
        let b0 = Luv::new(0.0, 0.0, 0.0);
        let b1 = Luv::new(10.0, 0.0, 0.0);
        let b2 = Luv::new(40.0, 0.0, 0.0);
        // B(0.5) = 0.25 b0 + 0.5 b1 + 0.25 b2.
        let mid = bezier(b0, b1, b2, 0.5);
        assert!(approx(mid.l, 15.0, 1e-12));
    }

    #[test]
    fn invert_bezier_round_trips() {
        let (b0, b1, b2) = (0.0, 30.0, 100.0);
        for step in 0..=10 {
            let t = step as f64 / 10.0;
            let v = (1.0 - t) * (1.0 - t) * b0 + 2.0 * (1.0 - t) * t * b1 + t * t * b2;
            let back = invert_bezier(b0, b1, b2, v);
            assert!(approx(back, t, 1e-9), "t {t}: got {back}");
        }
    }

    #[test]
    fn invert_bezier_clamps_out_of_range_values() {
        // Values beyond the curve's range must not produce NaN.
        let t = invert_bezier(0.0, 30.0, 100.0, -5.0);
        assert!(t.is_finite());
    }

    #[test]
    fn invert_bezier_linear_fallback() {
        // b1 exactly midway makes the quadratic term vanish.
        let t = invert_bezier(0.0, 50.0, 100.0, 25.0);
        assert!(approx(t, 0.25, 1e-12), "linear fallback: {t}");
        assert_eq!(invert_bezier(5.0, 5.0, 5.0, 5.0), 0.0);
    }

    // -- Hue mixing --

    #[test]
    fn mix_hue_endpoints() {
        assert!(approx(mix_hue(0.0, 1.0, 2.0), 1.0, 1e-12));
        assert!(approx(mix_hue(1.0, 1.0, 2.0), 2.0, 1e-12));
    }

    #[test]
    fn mix_hue_wraps_large_positive_differences_through_tau() {
        // From 0.1 toward (2π − 0.1) the fold goes backwards through 0
        // rather than sweeping the circle.
        let h = mix_hue(0.5, 0.1, TAU - 0.1);
        assert!(approx(h, 0.0, 1e-9), "expected fold through zero, got {h}");
    }

    // -- Target lightness --

    #[test]
    fn target_lightness_increases_with_t() {
        let mut prev = f64::NEG_INFINITY;
        for step in 0..=20 {
            let t = step as f64 / 20.0;
            let l = target_lightness(t, 0.88, 1.0);
            assert!(l > prev, "not increasing at t {t}");
            prev = l;
        }
    }

    #[test]
    fn target_lightness_spans_reference_range() {
        // contrast 1, brightness 1: l(0) = 0, l(1) = 100.
        assert!(approx(target_lightness(0.0, 1.0, 1.0), 0.0, 1e-9));
        assert!(approx(target_lightness(1.0, 1.0, 1.0), 100.0, 1e-9));
    }

    // -- Profile construction and sampling --

    #[test]
    fn build_places_q1_midway_between_handles() {
        let p = ProfilePoints::build(0.0, 0.6, 0.15, cs());
        let mid = p.q0.add(p.q2).scale(0.5);
        assert!(approx(p.q1.l, mid.l, 1e-12));
        assert!(approx(p.q1.u, mid.u, 1e-12));
        assert!(approx(p.q1.v, mid.v, 1e-12));
    }

    #[test]
    fn build_starts_at_black() {
        let p = ProfilePoints::build(2.0, 0.6, 0.15, cs());
        assert_eq!(p.p0.l, 0.0);
        assert_eq!(p.p0.u, 0.0);
        assert_eq!(p.p0.v, 0.0);
    }

    #[test]
    fn zero_warmth_ends_at_white() {
        let p = ProfilePoints::build(2.0, 0.6, 0.0, cs());
        assert!(approx(p.p2.l, 100.0, 1e-9));
        assert!(p.p2.u.abs() < 1e-9);
        assert!(p.p2.v.abs() < 1e-9);
    }

    #[test]
    fn warmth_pulls_light_end_toward_bright_point() {
        let cold = ProfilePoints::build(4.0, 0.6, 0.0, cs());
        let warm = ProfilePoints::build(4.0, 0.6, 0.4, cs());
        assert!(warm.p2.l < cold.p2.l);
    }

    #[test]
    fn sample_lightness_is_monotonic() {
        let p = ProfilePoints::build(0.0, 0.6, 0.15, cs());
        let mut prev = f64::NEG_INFINITY;
        for step in 0..=32 {
            let t = step as f64 / 32.0;
            let c = p.sample(t, 0.88, 0.75);
            assert!(c.l >= prev - 1e-9, "lightness dipped at t {t}: {}", c.l);
            prev = c.l;
        }
    }

    #[test]
    fn sample_is_finite_across_parameter_grid() {
        for hue_step in 0..8 {
            let hue = hue_step as f64 * TAU / 8.0;
            let p = ProfilePoints::build(hue, 0.6, 0.15, cs());
            for step in 0..=16 {
                let t = step as f64 / 16.0;
                let c = p.sample(t, 0.88, 0.75);
                assert!(
                    c.l.is_finite() && c.u.is_finite() && c.v.is_finite(),
                    "non-finite sample at hue {hue}, t {t}"
                );
            }
        }
    }

    #[test]
    fn saturation_scales_handle_chroma() {
        let dull = ProfilePoints::build(0.0, 0.1, 0.15, cs());
        let vivid = ProfilePoints::build(0.0, 1.0, 0.15, cs());
        let dull_c = dull.q0.u.hypot(dull.q0.v);
        let vivid_c = vivid.q0.u.hypot(vivid.q0.v);
        assert!(vivid_c > dull_c);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn samples_stay_finite(
                hue in 0.0_f64..TAU,
                saturation in 0.0_f64..=1.0,
                warmth in 0.0_f64..=1.0,
                contrast in 0.0_f64..=1.0,
                brightness in 0.0_f64..=1.0,
                t in 0.0_f64..=1.0,
            ) {
                let p = ProfilePoints::build(hue, saturation, warmth, cs());
                let c = p.sample(t, contrast, brightness);
                prop_assert!(c.l.is_finite() && c.u.is_finite() && c.v.is_finite());
            }

            #[test]
            fn inversion_round_trips_on_monotone_curves(
                b0 in 0.0_f64..=20.0,
                mid in 0.1_f64..=0.9,
                b2 in 60.0_f64..=100.0,
                t in 0.0_f64..=1.0,
            ) {
                // b1 strictly between b0 and b2 keeps the component monotone.
                let b1 = b0 + mid * (b2 - b0);
                let v = (1.0 - t) * (1.0 - t) * b0 + 2.0 * (1.0 - t) * t * b1 + t * t * b2;
                let back = invert_bezier(b0, b1, b2, v);
                prop_assert!((back - t).abs() < 1e-6, "t {t} back {back}");
            }
        }
    }
}
