// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability for commit decisions.
//!
//! Every call to [`crate::finalize`] returns a [`SnapTrace`]: the measured
//! gaps, the chosen plan, any validator override and what was applied. The
//! trace is diagnostic only; nothing in this crate reads it back to make a
//! decision.
//!
//! Its `Display` output is one line per event, suitable for a log line or a
//! debug overlay.

use alloc::vec::Vec;
use core::fmt;

use crate::gaps::{DegenerateGeometry, Gaps, Sides};
use crate::plan::CorrectionPlan;
use crate::transform::Transform;
use crate::validate::OverrideReason;

/// A single step recorded while finalizing a commit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TraceEvent {
    /// Gaps measured between slot and photo.
    Measured(Gaps),
    /// Geometry could not be measured; correction was skipped.
    Degenerate(DegenerateGeometry),
    /// The planner's proposal and the sides it was based on.
    Planned {
        /// Proposed plan.
        plan: CorrectionPlan,
        /// Sides above the gap threshold.
        sides: Sides,
    },
    /// The validator replaced the proposal with a reset.
    Overridden(OverrideReason),
    /// A new transform was produced.
    Applied {
        /// Transform before the commit.
        from: Transform,
        /// Transform after the commit.
        to: Transform,
    },
    /// The transform was left as it was.
    Unchanged,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Measured(gaps) => write!(f, "measured gaps: {gaps}"),
            Self::Degenerate(err) => write!(f, "skipped correction: {err}"),
            Self::Planned { plan, sides } => write!(f, "planned {plan} (gapped: {sides})"),
            Self::Overridden(reason) => write!(f, "overrode plan to reset: {reason}"),
            Self::Applied { from, to } => write!(
                f,
                "applied: offset ({:.5}, {:.5}) scale {:.3} -> offset ({:.5}, {:.5}) scale {:.3}",
                from.offset_x, from.offset_y, from.scale, to.offset_x, to.offset_y, to.scale
            ),
            Self::Unchanged => f.write_str("no correction applied"),
        }
    }
}

/// Ordered record of the decisions made for one commit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapTrace {
    events: Vec<TraceEvent>,
}

impl SnapTrace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub(crate) fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    /// All events in the order they were recorded.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Measured gaps, if geometry was usable.
    #[must_use]
    pub fn gaps(&self) -> Option<Gaps> {
        self.events.iter().find_map(|e| match e {
            TraceEvent::Measured(gaps) => Some(*gaps),
            _ => None,
        })
    }

    /// The degenerate-geometry condition, if correction was skipped.
    #[must_use]
    pub fn degenerate(&self) -> Option<DegenerateGeometry> {
        self.events.iter().find_map(|e| match e {
            TraceEvent::Degenerate(err) => Some(*err),
            _ => None,
        })
    }

    /// The validator's override, if any.
    #[must_use]
    pub fn override_reason(&self) -> Option<OverrideReason> {
        self.events.iter().find_map(|e| match e {
            TraceEvent::Overridden(reason) => Some(*reason),
            _ => None,
        })
    }

    /// Returns `true` if the commit left the transform as it was.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.events.contains(&TraceEvent::Unchanged)
    }
}

impl fmt::Display for SnapTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{event}")?;
        }
        Ok(())
    }
}
