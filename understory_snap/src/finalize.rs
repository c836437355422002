// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use crate::gaps::detect_gaps;
use crate::plan::{CorrectionPlan, plan_movement};
use crate::policy::SnapPolicy;
use crate::trace::{SnapTrace, TraceEvent};
use crate::transform::Transform;
use crate::validate::validate;

/// Result of committing a placement.
#[derive(Clone, Debug, PartialEq)]
pub struct Finalized {
    /// Transform the host should store.
    pub transform: Transform,
    /// Plan that produced `transform`, after validation.
    ///
    /// `None` when geometry was degenerate and nothing was planned.
    pub plan: Option<CorrectionPlan>,
    /// Human-readable record of the decision.
    pub trace: SnapTrace,
}

impl Finalized {
    /// Returns `true` if `transform` differs from the one passed in.
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.trace.is_unchanged()
    }
}

/// Reconciles `transform` against its slot using the production [`SnapPolicy`].
///
/// See [`finalize_with`].
#[must_use]
pub fn finalize(transform: Transform, slot: Rect, photo: Rect) -> Finalized {
    finalize_with(&SnapPolicy::default(), transform, slot, photo)
}

/// Reconciles `transform` against its slot.
///
/// `slot` and `photo` must be measured from the same rendered frame, after
/// layout for `transform` has settled.
///
/// Steps, in order: measure gaps, plan a movement with
/// [`SnapPolicy::gap_threshold`], validate it with
/// [`SnapPolicy::post_snap_allowance`], then apply:
///
/// - [`CorrectionPlan::NoOp`]: `transform` is returned unchanged.
/// - [`CorrectionPlan::Translate`]: offsets are incremented, scale is kept.
/// - [`CorrectionPlan::ResetToDefault`]: [`SnapPolicy::default_transform`].
///
/// Degenerate geometry never surfaces as an error: `transform` is returned
/// unchanged and the trace records why.
///
/// Applying the result and finalizing again with freshly measured geometry
/// yields [`CorrectionPlan::NoOp`].
#[must_use]
pub fn finalize_with(
    policy: &SnapPolicy,
    transform: Transform,
    slot: Rect,
    photo: Rect,
) -> Finalized {
    let policy = policy.normalized();
    let mut trace = SnapTrace::new();

    let gaps = match detect_gaps(slot, photo) {
        Ok(gaps) => gaps,
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                role = %err.role,
                width = err.size.width,
                height = err.size.height,
                "skipping snap: degenerate geometry"
            );
            trace.push(TraceEvent::Degenerate(err));
            trace.push(TraceEvent::Unchanged);
            return Finalized {
                transform,
                plan: None,
                trace,
            };
        }
    };
    trace.push(TraceEvent::Measured(gaps));

    let sides = gaps.significant(policy.gap_threshold);
    let proposed = plan_movement(&gaps, slot.size(), policy.gap_threshold);
    trace.push(TraceEvent::Planned {
        plan: proposed,
        sides,
    });

    let validation = validate(proposed, slot, photo, policy.post_snap_allowance);
    if let Some(reason) = validation.override_reason {
        trace.push(TraceEvent::Overridden(reason));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        top = gaps.top,
        right = gaps.right,
        bottom = gaps.bottom,
        left = gaps.left,
        sides = %sides,
        proposed = %proposed,
        plan = %validation.plan,
        overridden = validation.override_reason.is_some(),
        "snap decision"
    );

    let next = match validation.plan {
        CorrectionPlan::NoOp => transform,
        CorrectionPlan::Translate { dx, dy } => transform.translated(dx, dy),
        CorrectionPlan::ResetToDefault => policy.default_transform,
    };
    trace.push(if next == transform {
        TraceEvent::Unchanged
    } else {
        TraceEvent::Applied {
            from: transform,
            to: next,
        }
    });

    Finalized {
        transform: next,
        plan: Some(validation.plan),
        trace,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{finalize, finalize_with};
    use crate::gaps::RectRole;
    use crate::plan::CorrectionPlan;
    use crate::policy::SnapPolicy;
    use crate::trace::TraceEvent;
    use crate::transform::Transform;

    fn slot() -> Rect {
        Rect::from_origin_size((0.0, 0.0), (400.0, 600.0))
    }

    #[test]
    fn covered_slot_is_a_no_op() {
        let t = Transform::new(0.01, -0.02, 1.2);
        let out = finalize(t, slot(), Rect::new(-10.0, -10.0, 410.0, 610.0));
        assert_eq!(out.transform, t);
        assert_eq!(out.plan, Some(CorrectionPlan::NoOp));
        assert!(!out.changed());
        assert!(out.trace.gaps().unwrap().is_zero());
    }

    #[test]
    fn translation_increments_offsets_and_keeps_scale() {
        let t = Transform::new(-0.1, 0.0, 1.3);
        let photo = Rect::new(20.0, 10.0, 540.0, 790.0);
        let out = finalize(t, slot(), photo);
        assert!((out.transform.offset_x - (-0.1 + 0.05)).abs() < 1e-12);
        assert!((out.transform.offset_y - 10.0 / 600.0).abs() < 1e-12);
        assert_eq!(out.transform.scale, 1.3);
        assert!(out.changed());
        assert!(matches!(
            out.trace.events().last(),
            Some(TraceEvent::Applied { .. })
        ));
    }

    #[test]
    fn many_sides_reset_to_policy_default() {
        let reset = Transform::new(0.0, 0.0, 0.75);
        let policy = SnapPolicy::default().with_default_transform(reset);
        let t = Transform::new(0.2, 0.2, 0.4);
        let out = finalize_with(&policy, t, slot(), Rect::new(5.0, 5.0, 395.0, 595.0));
        assert_eq!(out.plan, Some(CorrectionPlan::ResetToDefault));
        assert_eq!(out.transform, reset);
        assert!(out.trace.override_reason().is_none());
    }

    #[test]
    fn degenerate_geometry_keeps_transform() {
        let t = Transform::new(0.3, 0.1, 2.0);
        let out = finalize(t, slot(), Rect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(out.transform, t);
        assert_eq!(out.plan, None);
        assert_eq!(out.trace.degenerate().unwrap().role, RectRole::Photo);
        assert!(!out.changed());

        let out = finalize(t, Rect::new(0.0, 0.0, 400.0, -1.0), slot());
        assert_eq!(out.transform, t);
        assert_eq!(out.trace.degenerate().unwrap().role, RectRole::Slot);
    }

    #[test]
    fn validator_override_is_traced() {
        // Only the left gap clears a 6px threshold, but the photo is too
        // small to cover the slot once it moves.
        let policy = SnapPolicy::default().with_gap_threshold(6.0);
        let photo = Rect::new(20.0, 5.5, 394.5, 594.5);
        let out = finalize_with(&policy, Transform::new(0.0, 0.0, 0.9), slot(), photo);
        assert_eq!(out.plan, Some(CorrectionPlan::ResetToDefault));
        assert_eq!(out.transform, Transform::DEFAULT);
        assert!(out.trace.override_reason().is_some());
        assert!(out.trace.events().iter().any(|e| matches!(
            e,
            TraceEvent::Planned {
                plan: CorrectionPlan::Translate { .. },
                ..
            }
        )));
    }

    #[test]
    fn reset_from_default_reports_unchanged() {
        let out = finalize(Transform::DEFAULT, slot(), Rect::new(1.0, 1.0, 399.0, 599.0));
        assert_eq!(out.plan, Some(CorrectionPlan::ResetToDefault));
        assert_eq!(out.transform, Transform::DEFAULT);
        assert!(!out.changed());
    }
}
