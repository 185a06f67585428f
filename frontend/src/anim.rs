//! Easing curves and interpolation helpers shared by the scroll effects.

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Position of `value` inside `[start, end]` as a fraction clamped to [0, 1].
/// A zero or negative width collapses to a step at `start`.
pub fn ramp(value: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if value >= start { 1.0 } else { 0.0 };
    }
    ((value - start) / (end - start)).clamp(0.0, 1.0)
}

pub fn power1_out(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv
}

pub fn power2_out(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Exponential ease-out used by the wheel smoothing. Reaches exactly 1 at t = 1.
pub fn expo_out(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t.clamp(0.0, 1.0))).min(1.0)
}

/// Cubic bezier (0.76, 0, 0.24, 1) as a CSS timing function, used by curtain exits.
pub const CURTAIN_EASE: &str = "cubic-bezier(0.76, 0, 0.24, 1)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_clamps_outside_window() {
        assert_eq!(ramp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(ramp(5.0, 0.0, 10.0), 0.5);
        assert_eq!(ramp(15.0, 0.0, 10.0), 1.0);
    }

    #[test]
    fn degenerate_ramp_is_a_step() {
        assert_eq!(ramp(0.29, 0.3, 0.3), 0.0);
        assert_eq!(ramp(0.3, 0.3, 0.3), 1.0);
        assert_eq!(ramp(0.5, 0.6, 0.2), 0.0);
    }

    #[test]
    fn easings_hit_their_endpoints() {
        for ease in [power1_out, power2_out] {
            assert_eq!(ease(0.0), 0.0);
            assert_eq!(ease(1.0), 1.0);
        }
        assert!(expo_out(0.0) < 0.01);
        assert_eq!(expo_out(1.0), 1.0);
    }

    #[test]
    fn expo_out_is_monotone() {
        let mut last = expo_out(0.0);
        for step in 1..=100 {
            let next = expo_out(step as f64 / 100.0);
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn lerp_interpolates() {
        assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
    }
}
