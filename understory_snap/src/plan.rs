// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Movement planning: classify a gap vector and compute the corrective move.
//!
//! Classification is by the number of significant sides:
//!
//! | sides | plan                                 |
//! |-------|--------------------------------------|
//! | 0     | [`CorrectionPlan::NoOp`]             |
//! | 1, 2  | [`CorrectionPlan::Translate`]        |
//! | 3, 4  | [`CorrectionPlan::ResetToDefault`]   |
//!
//! A translation always moves the photo toward each gapped edge by exactly
//! that edge's gap, so the gap closes rather than grows.

use core::fmt;

use kurbo::{Size, Vec2};

use crate::gaps::{Gaps, Sides};

/// Outcome of planning (and later validating) a commit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrectionPlan {
    /// The photo already covers the slot.
    NoOp,
    /// Increment the transform offsets, in fractions of the slot size.
    Translate {
        /// Added to [`crate::Transform::offset_x`].
        dx: f64,
        /// Added to [`crate::Transform::offset_y`].
        dy: f64,
    },
    /// Discard the current transform in favor of the policy default.
    ResetToDefault,
}

impl CorrectionPlan {
    /// On-screen movement of the photo, in pixels, that this plan produces in
    /// a slot of `slot_size`.
    ///
    /// Offsets pan the slot window over the photo, so the photo moves
    /// opposite to the offset delta. Only [`CorrectionPlan::Translate`] has a
    /// meaningful movement; other variants return zero.
    #[must_use]
    pub fn pixel_delta(&self, slot_size: Size) -> Vec2 {
        match *self {
            Self::Translate { dx, dy } => {
                Vec2::new(-dx * slot_size.width, -dy * slot_size.height)
            }
            Self::NoOp | Self::ResetToDefault => Vec2::ZERO,
        }
    }
}

impl fmt::Display for CorrectionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOp => f.write_str("no-op"),
            Self::Translate { dx, dy } => write!(f, "translate by ({dx:+.5}, {dy:+.5})"),
            Self::ResetToDefault => f.write_str("reset to default"),
        }
    }
}

/// Plans the correction for `gaps` measured against a slot of `slot_size`.
///
/// Only sides whose gap is strictly greater than `threshold` take part. When
/// one or two sides are significant, each contributes its exact gap converted
/// to a fraction of the slot:
///
/// - left: `dx += left / width`
/// - right: `dx -= right / width`
/// - top: `dy += top / height`
/// - bottom: `dy -= bottom / height`
///
/// Contributions add, so adjacent sides produce a diagonal move and opposite
/// sides partially cancel.
///
/// `slot_size` must have positive extent; [`crate::detect_gaps`] guarantees
/// this for any gaps it returns.
#[must_use]
pub fn plan_movement(gaps: &Gaps, slot_size: Size, threshold: f64) -> CorrectionPlan {
    let sides = gaps.significant(threshold);
    match sides.count() {
        0 => CorrectionPlan::NoOp,
        1 | 2 => {
            let mut dx = 0.0;
            let mut dy = 0.0;
            if sides.contains(Sides::LEFT) {
                dx += gaps.left / slot_size.width;
            }
            if sides.contains(Sides::RIGHT) {
                dx -= gaps.right / slot_size.width;
            }
            if sides.contains(Sides::TOP) {
                dy += gaps.top / slot_size.height;
            }
            if sides.contains(Sides::BOTTOM) {
                dy -= gaps.bottom / slot_size.height;
            }
            CorrectionPlan::Translate { dx, dy }
        }
        _ => CorrectionPlan::ResetToDefault,
    }
}
