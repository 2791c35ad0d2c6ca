//! Linear position tweening.
//!
//! A [`Tween`] is the time-based animation primitive behind each walk leg:
//! a fixed-duration linear interpolation between two horizontal positions,
//! advanced by elapsed-time deltas from the host loop.

use std::time::Duration;

/// A fixed-duration linear interpolation between two positions.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
}

impl Tween {
    /// Creates a tween from `from` to `to` over `duration`.
    /// A zero duration tween is complete immediately.
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Advances the tween's clock by `dt`, saturating at the end.
    /// Returns `true` once the tween has run to completion.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.finished()
    }

    /// Whether the tween has run to completion.
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// The interpolated position at the current clock.
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress()
    }

    /// The position the tween ends at.
    pub fn target(&self) -> f32 {
        self.to
    }

    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_interpolation() {
        let mut tween = Tween::new(0.0, 10.0, Duration::from_secs(2));
        assert_eq!(tween.value(), 0.0);
        assert!(!tween.advance(Duration::from_secs(1)));
        assert_eq!(tween.value(), 5.0);
        assert!(tween.advance(Duration::from_secs(1)));
        assert_eq!(tween.value(), 10.0);
    }

    #[test]
    fn overshoot_saturates() {
        let mut tween = Tween::new(25.0, 75.0, Duration::from_secs(5));
        assert!(tween.advance(Duration::from_secs(60)));
        assert_eq!(tween.value(), 75.0);
        assert!(tween.finished());
    }

    #[test]
    fn zero_duration_is_complete() {
        let mut tween = Tween::new(3.0, 4.0, Duration::ZERO);
        assert!(tween.finished());
        assert_eq!(tween.value(), 4.0);
        assert!(tween.advance(Duration::from_millis(1)));
    }

    #[test]
    fn decreasing_tween() {
        let mut tween = Tween::new(75.0, 25.0, Duration::from_secs(5));
        tween.advance(Duration::from_millis(2500));
        assert_eq!(tween.value(), 50.0);
        assert_eq!(tween.target(), 25.0);
    }
}
