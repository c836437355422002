// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Rect;

use crate::gaps::{Gaps, Sides, detect_gaps};
use crate::plan::CorrectionPlan;

/// Why the validator replaced a planned translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverrideReason {
    /// The translated photo would leave three or more sides exposed beyond
    /// the allowance, so a reset is cleaner than the partial fix.
    ExposesSides {
        /// Sides whose simulated gap exceeds the allowance.
        sides: Sides,
        /// Gaps of the simulated photo rectangle.
        simulated: Gaps,
    },
}

impl fmt::Display for OverrideReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExposesSides { sides, simulated } => write!(
                f,
                "translation would expose {} sides ({sides}; {simulated})",
                sides.count()
            ),
        }
    }
}

/// A plan after post-snap validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Validation {
    /// The plan to apply.
    pub plan: CorrectionPlan,
    /// Set when `plan` differs from the planner's proposal.
    pub override_reason: Option<OverrideReason>,
}

/// Checks a planned correction by simulating it.
///
/// [`CorrectionPlan::NoOp`] and [`CorrectionPlan::ResetToDefault`] pass
/// through untouched. A [`CorrectionPlan::Translate`] is replayed on `photo`
/// and gaps are measured again; if three or more sides exceed `allowance`
/// afterwards, the plan becomes [`CorrectionPlan::ResetToDefault`].
///
/// A simulated rectangle that cannot be measured keeps the original plan,
/// since it can only arise from geometry the caller already rejected.
#[must_use]
pub fn validate(plan: CorrectionPlan, slot: Rect, photo: Rect, allowance: f64) -> Validation {
    let pass = Validation {
        plan,
        override_reason: None,
    };
    match plan {
        CorrectionPlan::NoOp | CorrectionPlan::ResetToDefault => pass,
        CorrectionPlan::Translate { .. } => {
            let shifted = photo + plan.pixel_delta(slot.size());
            let Ok(simulated) = detect_gaps(slot, shifted) else {
                return pass;
            };
            let sides = simulated.significant(allowance);
            if sides.count() >= 3 {
                Validation {
                    plan: CorrectionPlan::ResetToDefault,
                    override_reason: Some(OverrideReason::ExposesSides { sides, simulated }),
                }
            } else {
                pass
            }
        }
    }
}
