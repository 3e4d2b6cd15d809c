//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// Inclusive scalar range over one measurement axis
///
/// Used for curve plotting and input sweeps; not a clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f32,
    pub max: f32,
}

impl AxisRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Interpolate across the range: t=0 gives min, t=1 gives max
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + self.span() * t
    }

    pub fn contains(&self, x: f32) -> bool {
        x >= self.min && x <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let range = AxisRange::new(0.0, 120.0);
        assert_eq!(range.lerp(0.0), 0.0);
        assert_eq!(range.lerp(1.0), 120.0);
        assert_eq!(range.lerp(0.5), 60.0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = AxisRange::new(-1.0, 8.0);
        assert!(range.contains(-1.0));
        assert!(range.contains(8.0));
        assert!(range.contains(0.0));
        assert!(!range.contains(8.1));
        assert!(!range.contains(-1.1));
    }

    #[test]
    fn test_span() {
        assert_eq!(AxisRange::new(0.0, 40.0).span(), 40.0);
        assert_eq!(AxisRange::new(-1.0, 1.0).span(), 2.0);
    }
}
