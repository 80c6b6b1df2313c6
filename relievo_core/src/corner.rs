// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner participation for grouped-row layouts.
//!
//! A panel that stands alone rounds all four corners. Panels that are rows of
//! a visually fused group round only the corners on the group's outer
//! boundary: the top row rounds its top corners, the bottom row its bottom
//! corners, and middle rows round nothing, so adjacent rows meet in square
//! seams and the group reads as one rounded block.
//!
//! Every path builder consumes the same [`CornerSet`] so the shadow, fill,
//! edge, and clip geometry stay in agreement about which corners curve.

use core::fmt;

use kurbo::RoundedRectRadii;

use crate::style::CornerGroup;

/// One of the four rectangle corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Minimum-x, minimum-y.
    TopLeft,
    /// Maximum-x, minimum-y.
    TopRight,
    /// Maximum-x, maximum-y.
    BottomRight,
    /// Minimum-x, maximum-y.
    BottomLeft,
}

impl Corner {
    const fn bit(self) -> u8 {
        match self {
            Self::TopLeft => 1 << 0,
            Self::TopRight => 1 << 1,
            Self::BottomRight => 1 << 2,
            Self::BottomLeft => 1 << 3,
        }
    }
}

/// A set of corners that participate in rounding.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CornerSet(u8);

impl CornerSet {
    /// No corners rounded.
    pub const NONE: Self = Self(0);
    /// All four corners rounded.
    pub const ALL: Self = Self(0b1111);
    /// Top-left and top-right.
    pub const TOP: Self = Self(Corner::TopLeft.bit() | Corner::TopRight.bit());
    /// Bottom-left and bottom-right.
    pub const BOTTOM: Self = Self(Corner::BottomLeft.bit() | Corner::BottomRight.bit());

    /// Returns whether `corner` is in the set.
    #[must_use]
    pub const fn contains(self, corner: Corner) -> bool {
        self.0 & corner.bit() != 0
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Per-corner radii: `radius` for members of the set, `0` elsewhere.
    #[must_use]
    pub fn radii(self, radius: f64) -> RoundedRectRadii {
        let r = |corner: Corner| if self.contains(corner) { radius } else { 0.0 };
        RoundedRectRadii::new(
            r(Corner::TopLeft),
            r(Corner::TopRight),
            r(Corner::BottomRight),
            r(Corner::BottomLeft),
        )
    }
}

impl fmt::Debug for CornerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for corner in [
            Corner::TopLeft,
            Corner::TopRight,
            Corner::BottomRight,
            Corner::BottomLeft,
        ] {
            if self.contains(corner) {
                set.entry(&corner);
            }
        }
        set.finish()
    }
}

impl CornerGroup {
    /// The corners this row group rounds.
    ///
    /// [`MiddleRow`](CornerGroup::MiddleRow) rounds nothing; its corner
    /// radius is forced to zero everywhere.
    #[must_use]
    pub const fn active_corners(self) -> CornerSet {
        match self {
            Self::All => CornerSet::ALL,
            Self::TopRow => CornerSet::TOP,
            Self::MiddleRow => CornerSet::NONE,
            Self::BottomRow => CornerSet::BOTTOM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_mapping() {
        assert_eq!(CornerGroup::All.active_corners(), CornerSet::ALL);
        assert_eq!(CornerGroup::TopRow.active_corners(), CornerSet::TOP);
        assert_eq!(CornerGroup::MiddleRow.active_corners(), CornerSet::NONE);
        assert_eq!(CornerGroup::BottomRow.active_corners(), CornerSet::BOTTOM);
    }

    #[test]
    fn top_row_rounds_only_top_corners() {
        let set = CornerGroup::TopRow.active_corners();
        assert!(set.contains(Corner::TopLeft));
        assert!(set.contains(Corner::TopRight));
        assert!(!set.contains(Corner::BottomLeft));
        assert!(!set.contains(Corner::BottomRight));
    }

    #[test]
    fn middle_row_is_empty() {
        assert!(CornerGroup::MiddleRow.active_corners().is_empty());
    }

    #[test]
    fn radii_zero_for_inactive_corners() {
        let radii = CornerSet::TOP.radii(12.0);
        assert_eq!(radii.top_left, 12.0);
        assert_eq!(radii.top_right, 12.0);
        assert_eq!(radii.bottom_left, 0.0);
        assert_eq!(radii.bottom_right, 0.0);
    }

    #[test]
    fn empty_set_yields_all_zero_radii() {
        let radii = CornerSet::NONE.radii(12.0);
        assert_eq!(radii.top_left, 0.0);
        assert_eq!(radii.top_right, 0.0);
        assert_eq!(radii.bottom_left, 0.0);
        assert_eq!(radii.bottom_right, 0.0);
    }
}
