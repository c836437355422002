// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_snap --heading-base-level=0

//! Understory Snap: edge-snap correction for photos placed in template slots.
//!
//! An operator pans and scales a photo inside a fixed-aspect slot, then
//! commits. On commit, this crate reconciles the freely positioned photo with
//! the slot edges:
//! - Measure the uncovered band on each slot edge ([`detect_gaps`]).
//! - Classify by how many edges are exposed and plan an exact corrective
//!   move ([`plan_movement`]).
//! - Simulate that move and fall back to a reset if it would leave the slot
//!   worse off ([`validate`]).
//! - Apply the result and record why ([`finalize`], [`SnapTrace`]).
//!
//! It does **not** render anything, capture pointer input, or persist the
//! committed transform. Callers are expected to:
//! - Measure the slot and photo rectangles after layout has settled, either
//!   directly or through a [`GeometryProvider`].
//! - Store the returned [`Transform`] in their own editor state.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_snap::{CorrectionPlan, Transform, finalize};
//!
//! let slot = Rect::from_origin_size((0.0, 0.0), (400.0, 600.0));
//! // The photo was dragged 20px right, exposing the slot's left edge.
//! let photo = Rect::from_origin_size((20.0, 0.0), (400.0, 600.0));
//!
//! let out = finalize(Transform::new(-0.05, 0.0, 1.0), slot, photo);
//! assert_eq!(out.plan, Some(CorrectionPlan::Translate { dx: 0.05, dy: 0.0 }));
//! assert_eq!(out.transform, Transform::DEFAULT);
//! println!("{}", out.trace);
//! ```
//!
//! ## Offsets
//!
//! [`Transform`] offsets pan the slot window over the photo, as fractions of
//! the slot size from its center. A positive `offset_x` moves the photo
//! toward the slot's left edge, so a gap on the left is closed by *adding*
//! `left / width`. [`SlotLayout`] is the reference mapping from a transform
//! to a rendered rectangle.
//!
//! ## Policy
//!
//! | plan                               | when                                   |
//! |------------------------------------|----------------------------------------|
//! | [`CorrectionPlan::NoOp`]           | no edge is exposed                     |
//! | [`CorrectionPlan::Translate`]      | one or two edges are exposed           |
//! | [`CorrectionPlan::ResetToDefault`] | three or four edges are exposed, or the move would expose three or more |
//!
//! Thresholds live on [`SnapPolicy`]; [`SnapPolicy::default`] ships the
//! production values (any gap counts; 5px post-snap allowance).
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `serde`: `Serialize`/`Deserialize` for [`Transform`], [`Gaps`],
//!   [`CorrectionPlan`] and [`SnapPolicy`].
//! - `tracing`: emit each commit decision as a `tracing` event.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod finalize;
mod gaps;
mod layout;
mod plan;
mod policy;
mod session;
mod trace;
mod transform;
mod validate;

pub use finalize::{Finalized, finalize, finalize_with};
pub use gaps::{DegenerateGeometry, Gaps, RectRole, Sides, detect_gaps};
pub use layout::{Geometry, GeometryProvider, SlotLayout, commit};
pub use plan::{CorrectionPlan, plan_movement};
pub use policy::SnapPolicy;
pub use session::{PlacementSession, SessionState};
pub use trace::{SnapTrace, TraceEvent};
pub use transform::Transform;
pub use validate::{OverrideReason, Validation, validate};
