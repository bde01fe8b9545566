//! Per-axis overlap correction against static colliders.
//!
//! Each pass tests the entity's full box against every collider in order and
//! pushes it out along a single axis. Corrections are applied sequentially, so
//! a later collider can undo an earlier one.

use tessera_math::Rect;

/// Push `entity` out of every overlapping collider along the x axis.
///
/// The entity goes to the collider's left side when its center is strictly
/// left of the collider's center, otherwise to the right side. Returns true
/// if any correction was applied.
pub fn resolve_horizontal(entity: &mut Rect, colliders: &[Rect]) -> bool {
    let mut corrected = false;
    for collider in colliders {
        if !entity.overlaps(collider) {
            continue;
        }
        if entity.center().x < collider.center().x {
            entity.x = collider.x - entity.width;
        } else {
            entity.x = collider.x + collider.width;
        }
        corrected = true;
    }
    corrected
}

/// Push `entity` out of every overlapping collider along the y axis.
///
/// Same rule as [`resolve_horizontal`], with "above" taking the place of
/// "left".
pub fn resolve_vertical(entity: &mut Rect, colliders: &[Rect]) -> bool {
    let mut corrected = false;
    for collider in colliders {
        if !entity.overlaps(collider) {
            continue;
        }
        if entity.center().y < collider.center().y {
            entity.y = collider.y - entity.height;
        } else {
            entity.y = collider.y + collider.height;
        }
        corrected = true;
    }
    corrected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overlap_leaves_entity_untouched() {
        let mut entity = Rect::new(0.0, 0.0, 10.0, 10.0);
        let colliders = [Rect::new(10.0, 0.0, 10.0, 10.0), Rect::new(0.0, 10.0, 10.0, 10.0)];
        assert!(!resolve_horizontal(&mut entity, &colliders));
        assert!(!resolve_vertical(&mut entity, &colliders));
        assert_eq!(entity, Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_horizontal_push_left_and_right() {
        let collider = [Rect::new(15.0, 0.0, 10.0, 10.0)];

        let mut from_left = Rect::new(6.0, 0.0, 10.0, 10.0);
        assert!(resolve_horizontal(&mut from_left, &collider));
        assert_eq!(from_left.x, 5.0);

        let mut from_right = Rect::new(24.0, 0.0, 10.0, 10.0);
        assert!(resolve_horizontal(&mut from_right, &collider));
        assert_eq!(from_right.x, 25.0);
    }

    #[test]
    fn test_vertical_push_up_and_down() {
        let collider = [Rect::new(0.0, 0.0, 10.0, 10.0)];

        let mut from_above = Rect::new(0.0, -9.0, 10.0, 10.0);
        assert!(resolve_vertical(&mut from_above, &collider));
        assert_eq!(from_above.y, -10.0);

        let mut from_below = Rect::new(0.0, 9.0, 10.0, 10.0);
        assert!(resolve_vertical(&mut from_below, &collider));
        assert_eq!(from_below.y, 10.0);
    }

    #[test]
    fn test_exactly_centered_resolves_to_far_side() {
        // Strict `<` on the center comparison: a tie takes the right/bottom branch.
        let collider = [Rect::new(0.0, 0.0, 10.0, 10.0)];

        let mut entity = Rect::new(0.0, 0.0, 10.0, 10.0);
        resolve_horizontal(&mut entity, &collider);
        assert_eq!(entity.x, 10.0);

        let mut entity = Rect::new(0.0, 0.0, 10.0, 10.0);
        resolve_vertical(&mut entity, &collider);
        assert_eq!(entity.y, 10.0);
    }

    #[test]
    fn test_horizontal_pass_tests_full_box() {
        // The x pass corrects along x whichever axis caused the overlap.
        let collider = [Rect::new(0.0, 0.0, 10.0, 10.0)];
        let mut entity = Rect::new(-9.0, 2.0, 10.0, 10.0);
        assert!(resolve_horizontal(&mut entity, &collider));
        assert_eq!(entity.x, -10.0);
        assert_eq!(entity.y, 2.0);
    }

    #[test]
    fn test_later_collider_overrides_earlier_correction() {
        let colliders = [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(12.0, 0.0, 10.0, 10.0)];
        let mut entity = Rect::new(5.0, 0.0, 10.0, 10.0);
        assert!(resolve_horizontal(&mut entity, &colliders));
        // First pushed right to 10, then the second collider pushes it back to 2,
        // leaving it inside the first collider again.
        assert_eq!(entity.x, 2.0);
        assert!(entity.overlaps(&colliders[0]));
    }

    #[test]
    fn test_empty_collider_set() {
        let mut entity = Rect::new(3.0, 4.0, 1.0, 1.0);
        assert!(!resolve_horizontal(&mut entity, &[]));
        assert!(!resolve_vertical(&mut entity, &[]));
        assert_eq!(entity.position(), tessera_math::Vec2::new(3.0, 4.0));
    }
}
