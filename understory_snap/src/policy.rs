// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Transform;

/// Tunables consulted by [`crate::finalize_with`].
///
/// [`SnapPolicy::default`] carries the production values. Hosts may override
/// them (typically in tests), but the defaults were tuned for print slots of a
/// few hundred pixels and should be re-validated before being relied on for
/// very different slot sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnapPolicy {
    /// A side counts as gapped when its gap is strictly greater than this, in pixels.
    pub gap_threshold: f64,
    /// Threshold used only when judging the simulated result of a planned
    /// translation, in pixels.
    pub post_snap_allowance: f64,
    /// Transform substituted when no translation can cover the slot.
    pub default_transform: Transform,
}

impl SnapPolicy {
    /// Production gap threshold: any measurable gap is significant.
    pub const GAP_THRESHOLD: f64 = 0.0;

    /// Production post-snap allowance.
    pub const POST_SNAP_ALLOWANCE: f64 = 5.0;

    /// Production policy.
    pub const PRODUCTION: Self = Self {
        gap_threshold: Self::GAP_THRESHOLD,
        post_snap_allowance: Self::POST_SNAP_ALLOWANCE,
        default_transform: Transform::DEFAULT,
    };

    /// Returns this policy with a different gap threshold.
    #[must_use]
    pub fn with_gap_threshold(self, gap_threshold: f64) -> Self {
        Self {
            gap_threshold,
            ..self
        }
    }

    /// Returns this policy with a different post-snap allowance.
    #[must_use]
    pub fn with_post_snap_allowance(self, post_snap_allowance: f64) -> Self {
        Self {
            post_snap_allowance,
            ..self
        }
    }

    /// Returns this policy with a different reset transform.
    #[must_use]
    pub fn with_default_transform(self, default_transform: Transform) -> Self {
        Self {
            default_transform,
            ..self
        }
    }

    /// Returns a copy that is safe to evaluate.
    ///
    /// Negative or NaN thresholds become `0.0`, and an invalid reset transform
    /// is replaced by [`Transform::DEFAULT`].
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            gap_threshold: non_negative(self.gap_threshold),
            post_snap_allowance: non_negative(self.post_snap_allowance),
            default_transform: if self.default_transform.is_valid() {
                self.default_transform
            } else {
                Transform::DEFAULT
            },
        }
    }
}

impl Default for SnapPolicy {
    fn default() -> Self {
        Self::PRODUCTION
    }
}

fn non_negative(value: f64) -> f64 {
    // `max` drops NaN in favor of the other operand.
    value.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::SnapPolicy;
    use crate::Transform;

    #[test]
    fn default_ships_production_values() {
        let policy = SnapPolicy::default();
        assert_eq!(policy.gap_threshold, 0.0);
        assert_eq!(policy.post_snap_allowance, 5.0);
        assert_eq!(policy.default_transform, Transform::DEFAULT);
    }

    #[test]
    fn builders_override_single_fields() {
        let reset = Transform::new(0.0, 0.0, 0.5);
        let policy = SnapPolicy::default()
            .with_gap_threshold(2.0)
            .with_post_snap_allowance(8.0)
            .with_default_transform(reset);
        assert_eq!(policy.gap_threshold, 2.0);
        assert_eq!(policy.post_snap_allowance, 8.0);
        assert_eq!(policy.default_transform, reset);
    }

    #[test]
    fn normalized_clamps_bad_values() {
        let policy = SnapPolicy::default()
            .with_gap_threshold(-3.0)
            .with_post_snap_allowance(f64::NAN)
            .with_default_transform(Transform::new(0.0, 0.0, 0.0))
            .normalized();
        assert_eq!(policy.gap_threshold, 0.0);
        assert_eq!(policy.post_snap_allowance, 0.0);
        assert_eq!(policy.default_transform, Transform::DEFAULT);
    }
}
