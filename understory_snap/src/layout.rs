// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry reading: where the slot and the photo are on screen.
//!
//! The correction pipeline only needs two rectangles in a shared pixel space.
//! Hosts that render through a real layout engine implement
//! [`GeometryProvider`] on top of it; [`SlotLayout`] is the headless reference
//! used by tests and by hosts that position the photo themselves.

use kurbo::{Rect, Size, Vec2};

use crate::finalize::{Finalized, finalize_with};
use crate::policy::SnapPolicy;
use crate::transform::Transform;

/// Slot and photo rectangles taken from the same rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// The slot container.
    pub slot: Rect,
    /// The rendered photo.
    pub photo: Rect,
}

/// Source of settled layout geometry.
///
/// `measure` returns both rectangles from a single read so they cannot come
/// from different frames. It must only be called once layout for
/// `transform` has completed.
pub trait GeometryProvider {
    /// Measures the slot and the photo as rendered with `transform`.
    fn measure(&self, transform: &Transform) -> Geometry;
}

impl<F> GeometryProvider for F
where
    F: Fn(&Transform) -> Geometry,
{
    fn measure(&self, transform: &Transform) -> Geometry {
        self(transform)
    }
}

/// Headless layout of a photo inside a slot.
///
/// At scale `1.0` the photo is uniformly scaled to the smallest size that
/// covers the slot (cover fit), then centered and panned according to
/// [`Transform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotLayout {
    /// Slot rectangle in device pixels.
    pub slot: Rect,
    /// Natural size of the photo, in any unit; only its aspect ratio and
    /// positivity matter.
    pub photo_size: Size,
}

impl SlotLayout {
    /// Creates a layout for a photo of `photo_size` inside `slot`.
    #[must_use]
    pub fn new(slot: Rect, photo_size: Size) -> Self {
        Self { slot, photo_size }
    }

    /// Photo size at `scale == 1.0`.
    ///
    /// Returns [`Size::ZERO`] if either the slot or the photo has no extent.
    #[must_use]
    pub fn base_size(&self) -> Size {
        let slot = self.slot.size();
        let photo = self.photo_size;
        if !(slot.width > 0.0 && slot.height > 0.0 && photo.width > 0.0 && photo.height > 0.0) {
            return Size::ZERO;
        }
        let cover = (slot.width / photo.width).max(slot.height / photo.height);
        photo * cover
    }

    /// Rendered photo rectangle for `transform`.
    #[must_use]
    pub fn photo_rect(&self, transform: &Transform) -> Rect {
        let slot = self.slot.size();
        let size = self.base_size() * transform.scale;
        let pan = Vec2::new(transform.offset_x * slot.width, transform.offset_y * slot.height);
        Rect::from_center_size(self.slot.center() - pan, size)
    }
}

impl GeometryProvider for SlotLayout {
    fn measure(&self, transform: &Transform) -> Geometry {
        Geometry {
            slot: self.slot,
            photo: self.photo_rect(transform),
        }
    }
}

/// Measures `transform` through `provider` once and finalizes it.
#[must_use]
pub fn commit<P>(provider: &P, transform: Transform, policy: &SnapPolicy) -> Finalized
where
    P: GeometryProvider + ?Sized,
{
    let geometry = provider.measure(&transform);
    finalize_with(policy, transform, geometry.slot, geometry.photo)
}
