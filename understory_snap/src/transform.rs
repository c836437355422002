// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Placement of a photo inside its slot.
///
/// Offsets are signed fractions of the slot size, measured from the slot
/// center. An offset describes how far the slot window is panned over the
/// photo: the photo's rendered center sits at
/// `slot.center - (offset_x * slot.width, offset_y * slot.height)`.
///
/// In other words, increasing `offset_x` moves the photo toward the slot's
/// left edge and increasing `offset_y` moves it toward the top edge. Every
/// part of this crate uses this convention; [`crate::SlotLayout`] is the
/// reference mapping from a `Transform` to a rendered rectangle.
///
/// Offsets are unconstrained and may legally exceed `±0.5` mid-drag. The
/// `scale` must be strictly positive; `1.0` is the cover-fit size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Horizontal pan as a fraction of the slot width.
    pub offset_x: f64,
    /// Vertical pan as a fraction of the slot height.
    pub offset_y: f64,
    /// Multiplier applied to the cover-fit photo size.
    pub scale: f64,
}

impl Transform {
    /// Centered photo at cover-fit size.
    pub const DEFAULT: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a transform from its raw parts.
    #[must_use]
    pub const fn new(offset_x: f64, offset_y: f64, scale: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            scale,
        }
    }

    /// Returns `true` if offsets are finite and `scale` is finite and positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.offset_x.is_finite()
            && self.offset_y.is_finite()
            && self.scale.is_finite()
            && self.scale > 0.0
    }

    /// Returns this transform with both offsets incremented; scale is kept.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            offset_x: self.offset_x + dx,
            offset_y: self.offset_y + dy,
            ..self
        }
    }

    /// Returns this transform with a different scale.
    #[must_use]
    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::Transform;

    #[test]
    fn default_is_centered_unit_scale() {
        let t = Transform::default();
        assert_eq!(t, Transform::DEFAULT);
        assert_eq!(t.offset_x, 0.0);
        assert_eq!(t.offset_y, 0.0);
        assert_eq!(t.scale, 1.0);
        assert!(t.is_valid());
    }

    #[test]
    fn translated_keeps_scale() {
        let t = Transform::new(0.1, -0.2, 1.5).translated(0.05, 0.25);
        assert!((t.offset_x - 0.15).abs() < 1e-12);
        assert!((t.offset_y - 0.05).abs() < 1e-12);
        assert_eq!(t.scale, 1.5);
    }

    #[test]
    fn non_positive_or_non_finite_scale_is_invalid() {
        assert!(!Transform::new(0.0, 0.0, 0.0).is_valid());
        assert!(!Transform::new(0.0, 0.0, -1.0).is_valid());
        assert!(!Transform::new(0.0, 0.0, f64::NAN).is_valid());
        assert!(!Transform::new(f64::INFINITY, 0.0, 1.0).is_valid());
        // Offsets may legally run past the slot bounds.
        assert!(Transform::new(3.0, -4.0, 0.25).is_valid());
    }
}
