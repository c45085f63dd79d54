//! Movement domain: the character's axis-aligned bounding box.

use bevy::prelude::*;

/// Smallest width or height a box may have and still be usable by a shape cast.
pub const MIN_BOX_SIZE: f32 = 0.03125;

/// Rejected box resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundsError {
    /// A dimension fell below [`MIN_BOX_SIZE`].
    TooSmall { size: Vec2 },
    /// A component of the offset or size was NaN or infinite.
    NonFinite,
}

impl std::fmt::Display for BoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundsError::TooSmall { size } => write!(
                f,
                "box size ({}, {}) is below the minimum of {}",
                size.x, size.y, MIN_BOX_SIZE
            ),
            BoundsError::NonFinite => write!(f, "box offset and size must be finite"),
        }
    }
}

impl std::error::Error for BoundsError {}

/// Box described relative to its owner's position: `offset` moves the center,
/// `size` is the full width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    offset: Vec2,
    size: Vec2,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            size: Vec2::ONE,
        }
    }
}

impl BoundingBox {
    pub fn new(offset: Vec2, size: Vec2) -> Result<Self, BoundsError> {
        let mut bounds = Self::default();
        bounds.set_offset(offset)?;
        bounds.set_size(size)?;
        Ok(bounds)
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    pub fn set_offset(&mut self, offset: Vec2) -> Result<(), BoundsError> {
        if !offset.is_finite() {
            return Err(BoundsError::NonFinite);
        }
        self.offset = offset;
        Ok(())
    }

    /// Resize the box. The previous size is kept when the new one is rejected.
    pub fn set_size(&mut self, size: Vec2) -> Result<(), BoundsError> {
        if !size.is_finite() {
            return Err(BoundsError::NonFinite);
        }
        if size.x < MIN_BOX_SIZE || size.y < MIN_BOX_SIZE {
            return Err(BoundsError::TooSmall { size });
        }
        self.size = size;
        Ok(())
    }

    /// World-space center when the owner sits at `position`.
    pub fn center(&self, position: Vec2) -> Vec2 {
        position + self.offset
    }

    /// World-space y of the bottom edge.
    pub fn bottom(&self, position: Vec2) -> f32 {
        self.center(position).y - self.size.y * 0.5
    }

    /// World-space y of the top edge.
    pub fn top(&self, position: Vec2) -> f32 {
        self.center(position).y + self.size.y * 0.5
    }

    /// True when the two boxes overlap with positive area.
    pub fn overlaps(&self, position: Vec2, other_center: Vec2, other_half_extents: Vec2) -> bool {
        let delta = (self.center(position) - other_center).abs();
        let reach = self.half_extents() + other_half_extents;
        delta.x < reach.x && delta.y < reach.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate_size() {
        let mut bounds = BoundingBox::default();
        assert_eq!(
            bounds.set_size(Vec2::new(1.0, 0.0)),
            Err(BoundsError::TooSmall {
                size: Vec2::new(1.0, 0.0)
            })
        );
        assert!(bounds.set_size(Vec2::new(-2.0, 1.0)).is_err());
        assert!(bounds.set_size(Vec2::new(f32::NAN, 1.0)).is_err());
        assert_eq!(bounds.size(), Vec2::ONE);
    }

    #[test]
    fn test_accepts_minimum_size() {
        let bounds = BoundingBox::new(Vec2::ZERO, Vec2::splat(MIN_BOX_SIZE));
        assert!(bounds.is_ok());
    }

    #[test]
    fn test_edges_follow_offset() {
        let bounds = BoundingBox::new(Vec2::new(0.0, 0.5), Vec2::new(1.0, 2.0)).unwrap();
        let position = Vec2::new(3.0, 1.0);
        assert_eq!(bounds.center(position), Vec2::new(3.0, 1.5));
        assert_eq!(bounds.bottom(position), 0.5);
        assert_eq!(bounds.top(position), 2.5);
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let bounds = BoundingBox::default();
        assert!(!bounds.overlaps(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::splat(0.5)));
        assert!(bounds.overlaps(Vec2::ZERO, Vec2::new(0.9, 0.0), Vec2::splat(0.5)));
    }
}
