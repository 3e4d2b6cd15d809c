//! Read-only dashboard feed
//!
//! Samples every membership set into polyline data a visualization layer
//! can plot directly. Nothing here feeds back into the engine; the per-tick
//! record is the serialized `Assessment` itself.

use serde::{Deserialize, Serialize};

use crate::core::AxisRange;
use crate::fuzzy::domain::{INPUT_SETS, POSTURE_SETS};
use crate::fuzzy::membership::Shape;

// Plot windows per axis. Distance is plotted well short of the far
// shoulder's 100-unit tail; past 40 units the curves are flat anyway.
pub const DISTANCE_PLOT: AxisRange = AxisRange::new(0.0, 40.0);
pub const HEALTH_PLOT: AxisRange = AxisRange::new(0.0, 100.0);
pub const ATTACK_PLOT: AxisRange = AxisRange::new(0.0, 20.0);
pub const COOLDOWN_PLOT: AxisRange = AxisRange::new(0.0, 120.0);
pub const AGGRESSION_PLOT: AxisRange = AxisRange::new(0.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f32,
    pub degree: f32,
}

/// One membership set sampled across its axis's plot window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipCurve {
    pub axis: String,
    pub label: String,
    pub points: Vec<CurvePoint>,
}

fn plot_range(axis: &str) -> AxisRange {
    match axis {
        "distance" => DISTANCE_PLOT,
        "health" => HEALTH_PLOT,
        "attack" => ATTACK_PLOT,
        "cooldown" => COOLDOWN_PLOT,
        _ => AGGRESSION_PLOT,
    }
}

fn sample_curve(axis: &str, label: &str, shape: Shape, resolution: usize) -> MembershipCurve {
    // At least two points so the endpoints are always present.
    let steps = resolution.max(2);
    let range = plot_range(axis);
    let points = (0..steps)
        .map(|i| {
            let t = i as f32 / (steps - 1) as f32;
            let x = range.lerp(t);
            CurvePoint {
                x,
                degree: shape.degree(x),
            }
        })
        .collect();
    MembershipCurve {
        axis: axis.to_string(),
        label: label.to_string(),
        points,
    }
}

/// All twelve input sets as plot-ready curves
pub fn input_curves(resolution: usize) -> Vec<MembershipCurve> {
    INPUT_SETS
        .iter()
        .map(|(axis, percept, shape)| sample_curve(axis, percept.label(), *shape, resolution))
        .collect()
}

/// The three posture sets over the aggression axis
pub fn posture_curves(resolution: usize) -> Vec<MembershipCurve> {
    POSTURE_SETS
        .iter()
        .map(|(label, shape)| sample_curve("aggression", label, *shape, resolution))
        .collect()
}
