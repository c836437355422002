// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement session: free manipulation of one photo followed by a commit.
//!
//! ## Usage
//!
//! 1) Create a [`PlacementSession`] with the last committed transform.
//! 2) Call [`PlacementSession::begin`] when the operator starts manipulating.
//! 3) Feed raw edits through [`PlacementSession::pan_by`],
//!    [`PlacementSession::scale_by`] or [`PlacementSession::set_working`].
//! 4) End with [`PlacementSession::commit`] (snaps and stores the result) or
//!    [`PlacementSession::cancel`] (drops the edits).
//!
//! Commit always runs the correction pipeline; there is no cooldown after a
//! manual edit.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_snap::{PlacementSession, SlotLayout, SnapPolicy, Transform};
//!
//! let layout = SlotLayout::new(
//!     Rect::from_origin_size((0.0, 0.0), (400.0, 600.0)),
//!     Size::new(400.0, 600.0),
//! );
//! let mut session = PlacementSession::new(Transform::DEFAULT);
//!
//! session.begin();
//! // Drag the photo 20px to the right, exposing the slot's left edge.
//! session.pan_by(-0.05, 0.0);
//!
//! let out = session.commit(&layout, &SnapPolicy::default());
//! assert!(out.transform.offset_x.abs() < 1e-12);
//! assert!(!session.is_dragging());
//! ```

use crate::finalize::Finalized;
use crate::layout::{GeometryProvider, commit};
use crate::policy::SnapPolicy;
use crate::transform::Transform;

/// Where a [`PlacementSession`] is in its edit cycle.
///
/// Finalization runs synchronously inside [`PlacementSession::commit`] and is
/// never observable as a separate state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No edit in progress; the committed transform is authoritative.
    Idle,
    /// The operator is freely manipulating a working copy.
    Dragging,
}

/// Editing state for one photo in one slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementSession {
    committed: Transform,
    working: Option<Transform>,
}

impl PlacementSession {
    /// Creates an idle session around the last committed transform.
    #[must_use]
    pub fn new(committed: Transform) -> Self {
        Self {
            committed,
            working: None,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.working.is_some() {
            SessionState::Dragging
        } else {
            SessionState::Idle
        }
    }

    /// Returns `true` while edits are in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.working.is_some()
    }

    /// Last committed transform.
    #[must_use]
    pub fn committed(&self) -> Transform {
        self.committed
    }

    /// Working copy, while dragging.
    #[must_use]
    pub fn working(&self) -> Option<Transform> {
        self.working
    }

    /// Transform the photo should be rendered with right now.
    #[must_use]
    pub fn current(&self) -> Transform {
        self.working.unwrap_or(self.committed)
    }

    /// Starts editing from the committed transform.
    ///
    /// Calling this while already dragging keeps the existing working copy.
    pub fn begin(&mut self) {
        if self.working.is_none() {
            self.working = Some(self.committed);
        }
    }

    /// Adds raw offset deltas to the working copy.
    ///
    /// Returns `false` (and does nothing) while idle.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        match self.working.as_mut() {
            Some(working) => {
                *working = working.translated(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Multiplies the working scale by `factor`.
    ///
    /// Ignored while idle or when the result would not be a valid transform.
    pub fn scale_by(&mut self, factor: f64) -> bool {
        match self.working {
            Some(working) => self.set_working(working.with_scale(working.scale * factor)),
            None => false,
        }
    }

    /// Replaces the working copy.
    ///
    /// Ignored while idle or when `transform` is not valid.
    pub fn set_working(&mut self, transform: Transform) -> bool {
        if self.working.is_none() || !transform.is_valid() {
            return false;
        }
        self.working = Some(transform);
        true
    }

    /// Drops the working copy; the committed transform stays authoritative.
    pub fn cancel(&mut self) {
        self.working = None;
    }

    /// Finalizes the current transform and stores the result as committed.
    ///
    /// Committing while idle re-finalizes the committed transform, which is
    /// safe: a placement that was already snapped comes back unchanged.
    pub fn commit<P>(&mut self, provider: &P, policy: &SnapPolicy) -> Finalized
    where
        P: GeometryProvider + ?Sized,
    {
        let transform = self.working.take().unwrap_or(self.committed);
        let out = commit(provider, transform, policy);
        self.committed = out.transform;
        out
    }
}
