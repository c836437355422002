// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gap detection between a slot and the photo rendered inside it.

use core::fmt;

use kurbo::{Insets, Rect, Size};

bitflags::bitflags! {
    /// A set of slot edges.
    ///
    /// Iteration order is top, right, bottom, left.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Sides: u8 {
        /// The top edge.
        const TOP    = 0b0001;
        /// The right edge.
        const RIGHT  = 0b0010;
        /// The bottom edge.
        const BOTTOM = 0b0100;
        /// The left edge.
        const LEFT   = 0b1000;
    }
}

impl Sides {
    /// Number of edges in the set.
    #[must_use]
    pub fn count(self) -> usize {
        self.bits().count_ones() as usize
    }
}

impl fmt::Display for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names = [
            (Self::TOP, "top"),
            (Self::RIGHT, "right"),
            (Self::BOTTOM, "bottom"),
            (Self::LEFT, "left"),
        ];
        let mut first = true;
        for (side, name) in names {
            if !self.contains(side) {
                continue;
            }
            if !first {
                f.write_str("+")?;
            }
            first = false;
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// Uncovered slot area on each edge, in pixels.
///
/// Each component is the distance from the photo's edge to the slot's
/// corresponding edge. It is zero when the photo meets or overlaps that slot
/// edge and positive when the slot edge is exposed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gaps {
    /// Exposed band along the slot's top edge.
    pub top: f64,
    /// Exposed band along the slot's right edge.
    pub right: f64,
    /// Exposed band along the slot's bottom edge.
    pub bottom: f64,
    /// Exposed band along the slot's left edge.
    pub left: f64,
}

impl Gaps {
    /// No gap on any side.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Raw gaps at or below this many pixels are arithmetic residue and read as zero.
    pub const EPSILON: f64 = 1e-6;

    /// Creates a gap vector in CSS order (top, right, bottom, left).
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns the edges whose gap is strictly greater than `threshold`.
    #[must_use]
    pub fn significant(&self, threshold: f64) -> Sides {
        let mut sides = Sides::empty();
        sides.set(Sides::TOP, self.top > threshold);
        sides.set(Sides::RIGHT, self.right > threshold);
        sides.set(Sides::BOTTOM, self.bottom > threshold);
        sides.set(Sides::LEFT, self.left > threshold);
        sides
    }

    /// Returns `true` if every side is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.significant(0.0).is_empty()
    }

    /// Largest gap over all sides.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.top.max(self.right).max(self.bottom).max(self.left)
    }

    /// Converts from Kurbo insets (`x0` left, `y0` top, `x1` right, `y1` bottom).
    #[must_use]
    pub fn from_insets(insets: Insets) -> Self {
        Self::new(insets.y0, insets.x1, insets.y1, insets.x0)
    }

    /// Converts into Kurbo insets.
    ///
    /// Shrinking the slot rect by these insets yields the area the photo
    /// actually covers along the slot edges.
    #[must_use]
    pub fn to_insets(self) -> Insets {
        Insets::new(self.left, self.top, self.right, self.bottom)
    }
}

impl fmt::Display for Gaps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "top {:.3}px, right {:.3}px, bottom {:.3}px, left {:.3}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Which measured rectangle a [`DegenerateGeometry`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RectRole {
    /// The slot container.
    Slot,
    /// The rendered photo.
    Photo,
}

impl fmt::Display for RectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Slot => "slot",
            Self::Photo => "photo",
        })
    }
}

/// A measured rectangle has no usable extent, usually because it has not been
/// laid out yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegenerateGeometry {
    /// The offending rectangle.
    pub role: RectRole,
    /// Its measured size; at least one dimension is `<= 0` or not finite.
    pub size: Size,
}

impl fmt::Display for DegenerateGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rectangle has degenerate size {}x{}",
            self.role, self.size.width, self.size.height
        )
    }
}

impl core::error::Error for DegenerateGeometry {}

/// Measures the gap on every edge of `slot` left uncovered by `photo`.
///
/// Both rectangles must be in the same coordinate space and describe the
/// same rendered frame.
///
/// # Errors
///
/// Returns [`DegenerateGeometry`] if either rectangle has a non-positive or
/// non-finite width or height. The slot is checked first.
pub fn detect_gaps(slot: Rect, photo: Rect) -> Result<Gaps, DegenerateGeometry> {
    check_extent(RectRole::Slot, slot)?;
    check_extent(RectRole::Photo, photo)?;
    Ok(Gaps {
        top: residue_to_zero(photo.y0 - slot.y0),
        right: residue_to_zero(slot.x1 - photo.x1),
        bottom: residue_to_zero(slot.y1 - photo.y1),
        left: residue_to_zero(photo.x0 - slot.x0),
    })
}

fn check_extent(role: RectRole, rect: Rect) -> Result<(), DegenerateGeometry> {
    let finite = rect.x0.is_finite()
        && rect.y0.is_finite()
        && rect.x1.is_finite()
        && rect.y1.is_finite();
    if finite && rect.width() > 0.0 && rect.height() > 0.0 {
        Ok(())
    } else {
        Err(DegenerateGeometry {
            role,
            size: rect.size(),
        })
    }
}

fn residue_to_zero(raw: f64) -> f64 {
    if raw > Gaps::EPSILON { raw } else { 0.0 }
}
