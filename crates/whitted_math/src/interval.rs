/// A closed range of reals `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// The unit interval, the valid range of an encoded colour channel.
    pub const UNIT: Interval = Interval::new(0.0, 1.0);

    /// Non-negative reals.
    pub const NON_NEGATIVE: Interval = Interval::new(0.0, f32::INFINITY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
        assert!(!interval.contains(f32::NAN));
    }

    #[test]
    fn test_unit_clamp() {
        assert_eq!(Interval::UNIT.clamp(-5.0), 0.0);
        assert_eq!(Interval::UNIT.clamp(0.25), 0.25);
        assert_eq!(Interval::UNIT.clamp(3.0), 1.0);
    }

    #[test]
    fn test_non_negative() {
        assert!(Interval::NON_NEGATIVE.contains(0.0));
        assert!(Interval::NON_NEGATIVE.contains(f32::INFINITY));
        assert!(!Interval::NON_NEGATIVE.contains(-1e-6));
    }
}
