//! Easing curves and a single-value tween.
//!
//! Every curve maps `0 -> 0` and `1 -> 1`, is monotonic non-decreasing, and
//! clamps its input to `[0, 1]`, so an eased rotation never overshoots.

use std::f32::consts::PI;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuadraticIn,
    QuadraticOut,
    #[default]
    QuadraticInOut,
    CubicInOut,
    SineInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::QuadraticIn => t * t,
            Easing::QuadraticOut => t * (2.0 - t),
            Easing::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Easing::SineInOut => (1.0 - (PI * t).cos()) / 2.0,
        }
    }
}

/// Animates one `f32` from `from` to `to` over a fixed duration.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Step the clock forward and return the new value.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    /// Linear elapsed fraction in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn eased_progress(&self) -> f32 {
        self.easing.apply(self.progress())
    }

    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.eased_progress()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::QuadraticIn,
        Easing::QuadraticOut,
        Easing::QuadraticInOut,
        Easing::CubicInOut,
        Easing::SineInOut,
    ];

    #[test]
    fn curves_hit_endpoints_and_clamp() {
        for e in ALL {
            assert_eq!(e.apply(0.0), 0.0, "{e:?}");
            assert_eq!(e.apply(1.0), 1.0, "{e:?}");
            assert_eq!(e.apply(-3.0), 0.0, "{e:?}");
            assert_eq!(e.apply(7.0), 1.0, "{e:?}");
            assert_eq!(e.apply(f32::NAN), 0.0, "{e:?}");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for e in ALL {
            let mut prev = 0.0;
            for i in 0..=200 {
                let v = e.apply(i as f32 / 200.0);
                assert!(v + 1e-6 >= prev, "{e:?} decreased at step {i}");
                assert!((0.0..=1.0).contains(&v));
                prev = v;
            }
        }
    }

    #[test]
    fn quadratic_in_out_is_symmetric_about_midpoint() {
        let e = Easing::QuadraticInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
        for i in 1..50 {
            let t = i as f32 / 100.0;
            assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn tween_lands_exactly_on_target() {
        let mut tw = Tween::new(0.3, -0.95, Duration::from_millis(100), Easing::QuadraticInOut);
        for _ in 0..7 {
            tw.advance(Duration::from_millis(16));
        }
        assert!(tw.is_finished());
        assert_eq!(tw.value(), -0.95);
        assert_eq!(tw.progress(), 1.0);
    }

    #[test]
    fn zero_duration_tween_finishes_immediately() {
        let mut tw = Tween::new(1.0, 2.0, Duration::ZERO, Easing::Linear);
        assert_eq!(tw.advance(Duration::ZERO), 2.0);
        assert!(tw.is_finished());
    }
}
