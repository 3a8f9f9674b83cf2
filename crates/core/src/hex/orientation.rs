use serde::{Deserialize, Serialize};
use std::{f64::consts::PI, sync::LazyLock};
use strum::EnumIter;

/// Pointy-topped hexes: one corner points straight up (+y)
static POINTY: LazyLock<Orientation> = LazyLock::new(|| {
    let sqrt_3 = 3.0_f64.sqrt();
    Orientation::new(
        [sqrt_3, sqrt_3 / 2.0, 0.0, 3.0 / 2.0],
        [sqrt_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
        0.5,
    )
});

/// Flat-topped hexes: one side lies flat along the top (+y)
static FLAT: LazyLock<Orientation> = LazyLock::new(|| {
    let sqrt_3 = 3.0_f64.sqrt();
    Orientation::new(
        [3.0 / 2.0, 0.0, sqrt_3 / 2.0, sqrt_3],
        [2.0 / 3.0, 0.0, -1.0 / 3.0, sqrt_3 / 3.0],
        0.0,
    )
});

/// The geometric configuration that maps axial hex coordinates onto pixel
/// space. This holds the 2x2 matrices for both directions of the conversion,
/// plus a precomputed table of where each of the 6 corners sits relative to a
/// hex's center.
///
/// Matrices are stored row-major: `[m00, m01, m10, m11]`.
///
/// You almost always want one of the two canonical orientations, available
/// through [OrientationKind]. Those are computed once on first use and then
/// shared for the rest of the process.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orientation {
    forward: [f64; 4],
    backward: [f64; 4],
    start_angle: f64,
    sines: [f64; 6],
    cosines: [f64; 6],
}

impl Orientation {
    /// Build a new orientation from its transform matrices. `start_angle` is
    /// the angle of the first corner, in sixths of a full turn (so `0.5`
    /// means 30°). The corner tables are computed here, so this isn't free.
    pub fn new(forward: [f64; 4], backward: [f64; 4], start_angle: f64) -> Self {
        let mut sines = [0.0; 6];
        let mut cosines = [0.0; 6];
        for i in 0..6 {
            let angle = 2.0 * PI * (i as f64 + start_angle) / 6.0;
            sines[i] = angle.sin();
            cosines[i] = angle.cos();
        }

        Self {
            forward,
            backward,
            start_angle,
            sines,
            cosines,
        }
    }

    /// Hex to pixel matrix
    pub fn forward(&self) -> &[f64; 4] {
        &self.forward
    }

    /// Pixel to hex matrix
    pub fn backward(&self) -> &[f64; 4] {
        &self.backward
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Sine of each corner's angle, in corner order
    pub fn sines(&self) -> &[f64; 6] {
        &self.sines
    }

    /// Cosine of each corner's angle, in corner order
    pub fn cosines(&self) -> &[f64; 6] {
        &self.cosines
    }
}

impl From<OrientationKind> for Orientation {
    fn from(kind: OrientationKind) -> Self {
        *kind.orientation()
    }
}

/// The two canonical hex orientations
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OrientationKind {
    Pointy,
    #[default]
    Flat,
}

impl OrientationKind {
    /// Get the shared orientation table for this kind
    pub fn orientation(self) -> &'static Orientation {
        match self {
            Self::Pointy => &*POINTY,
            Self::Flat => &*FLAT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_flat_corner_table() {
        let orientation = OrientationKind::Flat.orientation();
        let expected_cos = [1.0, 0.5, -0.5, -1.0, -0.5, 0.5];
        let half_sqrt_3 = 3.0_f64.sqrt() / 2.0;
        let expected_sin = [
            0.0,
            half_sqrt_3,
            half_sqrt_3,
            0.0,
            -half_sqrt_3,
            -half_sqrt_3,
        ];
        for i in 0..6 {
            assert_approx_eq!(orientation.cosines()[i], expected_cos[i]);
            assert_approx_eq!(orientation.sines()[i], expected_sin[i]);
        }
    }

    #[test]
    fn test_pointy_corner_table() {
        let orientation = OrientationKind::Pointy.orientation();
        assert_approx_eq!(orientation.start_angle(), 0.5);
        // First corner is at 30°, second points straight up
        assert_approx_eq!(orientation.sines()[0], 0.5);
        assert_approx_eq!(orientation.sines()[1], 1.0);
        assert_approx_eq!(orientation.cosines()[1], 0.0);
        assert_approx_eq!(orientation.sines()[4], -1.0);
    }

    /// Forward and backward matrices should be inverses of each other
    #[test]
    fn test_matrices_invert() {
        for kind in OrientationKind::iter() {
            let o = kind.orientation();
            let [f0, f1, f2, f3] = *o.forward();
            let [b0, b1, b2, b3] = *o.backward();
            assert_approx_eq!(f0 * b0 + f1 * b2, 1.0);
            assert_approx_eq!(f0 * b1 + f1 * b3, 0.0);
            assert_approx_eq!(f2 * b0 + f3 * b2, 0.0);
            assert_approx_eq!(f2 * b1 + f3 * b3, 1.0);
        }
    }

    #[test]
    fn test_canonical_singletons() {
        // Same instance every time, never recomputed
        for kind in OrientationKind::iter() {
            assert!(std::ptr::eq(kind.orientation(), kind.orientation()));
        }
        assert_eq!(OrientationKind::default(), OrientationKind::Flat);
        assert_eq!(
            Orientation::from(OrientationKind::Pointy),
            *OrientationKind::Pointy.orientation()
        );
    }
}
