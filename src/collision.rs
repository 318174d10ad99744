//! Collision detection and response
//!
//! AABB tests over continuous world coordinates, optional per-pixel masks for
//! refinement, and the axis-by-axis obstacle resolution used by every moving
//! entity.
//!
//! # Architecture
//!
//! - [`Rect`]: axis-aligned box with exclusive right/bottom edges
//! - [`Collidable`]: implemented by dynamic entities (player, enemies, NPCs)
//! - [`StaticCollidable`] / [`Obstacle`]: immovable world geometry
//! - [`resolve_axis`]: snaps a moving box against obstacles on one axis

/// Represents different categories of collidable objects.
///
/// Used to filter which pairs are tested, e.g. player attacks only consider
/// the enemy layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionLayer {
    Player,
    Enemy,
    Npc,
    Obstacle,
    Item,
}

/// An axis-aligned rectangle in world units.
///
/// Right and bottom edges are exclusive, so two boxes that share an edge do
/// not intersect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_center(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Rect::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        aabb_intersect(self, other)
    }

    /// The overlapping region of two rectangles, if any
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles do NOT intersect when one lies entirely to the left, right,
/// above or below the other. Touching edges are not an intersection.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.left() < b.right() && a.right() > b.left();
    let y_overlap = a.top() < b.bottom() && a.bottom() > b.top();

    x_overlap && y_overlap
}

/// Calculates the overlap between two intersecting rectangles.
///
/// - `overlap_x`: positive if `a` sits to the left of `b`, negative if right
/// - `overlap_y`: positive if `a` sits above `b`, negative if below
///
/// The values are meaningless for rectangles that do not intersect.
pub fn calculate_overlap(a: &Rect, b: &Rect) -> (f32, f32) {
    let overlap_x = if a.left() <= b.left() {
        a.right() - b.left()
    } else {
        a.left() - b.right()
    };

    let overlap_y = if a.top() <= b.top() {
        a.bottom() - b.top()
    } else {
        a.top() - b.bottom()
    };

    (overlap_x, overlap_y)
}

/// A per-pixel solidity mask aligned with an entity's bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl CollisionMask {
    /// A mask where every pixel is solid (what a filled placeholder produces)
    pub fn solid(width: u32, height: u32) -> Self {
        CollisionMask {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    /// Builds a mask from alpha values, treating anything above `threshold` as solid.
    ///
    /// Returns `None` when the buffer does not match the dimensions.
    pub fn from_alpha(width: u32, height: u32, alpha: &[u8], threshold: u8) -> Option<Self> {
        if alpha.len() != (width * height) as usize {
            return None;
        }
        Some(CollisionMask {
            width,
            height,
            bits: alpha.iter().map(|a| *a > threshold).collect(),
        })
    }

    /// Builds a mask from text rows, `#` marking a solid pixel.
    ///
    /// Returns `None` for no rows or rows of unequal length.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let width = rows.first()?.as_ref().chars().count();
        if width == 0 || rows.iter().any(|r| r.as_ref().chars().count() != width) {
            return None;
        }
        let bits = rows
            .iter()
            .flat_map(|r| r.as_ref().chars().map(|c| c == '#'))
            .collect();
        Some(CollisionMask {
            width: width as u32,
            height: rows.len() as u32,
            bits,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_solid(&self, px: i32, py: i32) -> bool {
        if px < 0 || py < 0 || px >= self.width as i32 || py >= self.height as i32 {
            return false;
        }
        self.bits[(py as u32 * self.width + px as u32) as usize]
    }

    /// Tests whether any solid pixel of `self` placed at `origin` coincides
    /// with a solid pixel of `other` placed at `other_origin`.
    pub fn overlaps(
        &self,
        origin: (f32, f32),
        other: &CollisionMask,
        other_origin: (f32, f32),
    ) -> bool {
        let a = Rect::new(origin.0, origin.1, self.width as f32, self.height as f32);
        let b = Rect::new(
            other_origin.0,
            other_origin.1,
            other.width as f32,
            other.height as f32,
        );
        let Some(region) = a.intersection(&b) else {
            return false;
        };

        let start_x = region.left().floor() as i32;
        let start_y = region.top().floor() as i32;
        let end_x = region.right().ceil() as i32;
        let end_y = region.bottom().ceil() as i32;

        for wy in start_y..end_y {
            for wx in start_x..end_x {
                let ax = wx - origin.0.floor() as i32;
                let ay = wy - origin.1.floor() as i32;
                let bx = wx - other_origin.0.floor() as i32;
                let by = wy - other_origin.1.floor() as i32;
                if self.is_solid(ax, ay) && other.is_solid(bx, by) {
                    return true;
                }
            }
        }
        false
    }
}

/// Trait for entities that participate in collision detection.
///
/// Each entity type defines its own bounds and layer; an optional mask
/// refines box overlaps to pixel accuracy.
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    fn get_bounds(&self) -> Rect;

    /// Returns the collision layer this entity belongs to.
    fn get_collision_layer(&self) -> CollisionLayer;

    /// Pixel mask aligned with `get_bounds()`, if the entity has one.
    fn get_collision_mask(&self) -> Option<&CollisionMask> {
        None
    }
}

/// Box test first, then mask refinement when both sides carry a mask.
pub fn entities_overlap(a: &impl Collidable, b: &impl Collidable) -> bool {
    let a_bounds = a.get_bounds();
    let b_bounds = b.get_bounds();
    if !aabb_intersect(&a_bounds, &b_bounds) {
        return false;
    }

    match (a.get_collision_mask(), b.get_collision_mask()) {
        (Some(a_mask), Some(b_mask)) => a_mask.overlaps(
            (a_bounds.x, a_bounds.y),
            b_mask,
            (b_bounds.x, b_bounds.y),
        ),
        _ => true,
    }
}

/// Trait for static (non-moving) world objects.
///
/// Static objects never move during collision response and never collide
/// with each other; only moving entities test against them.
pub trait StaticCollidable {
    fn get_bounds(&self) -> Rect;
}

/// An immovable obstacle (rock, wall, world boundary).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Obstacle {
            x,
            y,
            width,
            height,
        }
    }
}

impl StaticCollidable for Obstacle {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Returns indices of all static objects overlapping `bounds`.
pub fn check_static_collisions<S: StaticCollidable>(bounds: &Rect, static_objects: &[S]) -> Vec<usize> {
    static_objects
        .iter()
        .enumerate()
        .filter(|(_, obj)| aabb_intersect(bounds, &obj.get_bounds()))
        .map(|(index, _)| index)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Clamps a box that just moved along `axis` against every obstacle it now
/// overlaps.
///
/// Moving right snaps the right edge to the obstacle's left edge, moving left
/// snaps the left edge to its right edge; Y behaves the same with top and
/// bottom. A zero `delta` leaves the box where it is. Returns the corrected
/// box.
pub fn resolve_axis<S: StaticCollidable>(bounds: Rect, delta: f32, axis: Axis, obstacles: &[S]) -> Rect {
    let mut resolved = bounds;

    for obstacle in obstacles {
        let ob = obstacle.get_bounds();
        if !aabb_intersect(&resolved, &ob) {
            continue;
        }

        match axis {
            Axis::X => {
                if delta > 0.0 {
                    resolved.x = ob.left() - resolved.width;
                } else if delta < 0.0 {
                    resolved.x = ob.right();
                }
            }
            Axis::Y => {
                if delta > 0.0 {
                    resolved.y = ob.top() - resolved.height;
                } else if delta < 0.0 {
                    resolved.y = ob.bottom();
                }
            }
        }
    }

    resolved
}

/// Moves `bounds` by `velocity`, resolving X fully before Y.
pub fn move_and_collide<S: StaticCollidable>(bounds: Rect, velocity: glam::Vec2, obstacles: &[S]) -> Rect {
    let moved_x = bounds.translated(velocity.x, 0.0);
    let resolved_x = resolve_axis(moved_x, velocity.x, Axis::X, obstacles);

    let moved_y = resolved_x.translated(0.0, velocity.y);
    resolve_axis(moved_y, velocity.y, Axis::Y, obstacles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let rect_b = Rect::new(16.0, 16.0, 32.0, 32.0);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a));
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        let rect_a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let rect_b = Rect::new(32.0, 0.0, 32.0, 32.0);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Rect::new(0.0, 0.0, 100.0, 100.0);
        let small = Rect::new(25.0, 25.0, 50.0, 50.0);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_calculate_overlap_diagonal() {
        let rect_a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let rect_b = Rect::new(16.0, 16.0, 32.0, 32.0);

        assert_eq!(calculate_overlap(&rect_a, &rect_b), (16.0, 16.0));
        assert_eq!(calculate_overlap(&rect_b, &rect_a), (-16.0, -16.0));
    }

    #[test]
    fn test_moving_right_snaps_to_obstacle_left_edge() {
        let obstacles = vec![Obstacle::new(100.0, 0.0, 50.0, 100.0)];
        let entity = Rect::new(30.0, 10.0, 64.0, 64.0);

        let resolved = move_and_collide(entity, Vec2::new(10.0, 0.0), &obstacles);

        assert_eq!(resolved.right(), 100.0);
        assert!(!aabb_intersect(&resolved, &obstacles[0].get_bounds()));
    }

    #[test]
    fn test_moving_left_and_up() {
        let obstacles = vec![
            Obstacle::new(0.0, 0.0, 20.0, 200.0),
            Obstacle::new(0.0, 0.0, 200.0, 20.0),
        ];
        let entity = Rect::new(25.0, 100.0, 10.0, 10.0);
        let resolved = move_and_collide(entity, Vec2::new(-10.0, 0.0), &obstacles);
        assert_eq!(resolved.left(), 20.0);

        let entity = Rect::new(100.0, 25.0, 10.0, 10.0);
        let resolved = move_and_collide(entity, Vec2::new(0.0, -10.0), &obstacles);
        assert_eq!(resolved.top(), 20.0);
    }

    #[test]
    fn test_diagonal_slides_along_wall() {
        // Wall to the right; moving down-right should keep the Y progress.
        let obstacles = vec![Obstacle::new(100.0, 0.0, 50.0, 500.0)];
        let entity = Rect::new(60.0, 50.0, 40.0, 40.0);

        let resolved = move_and_collide(entity, Vec2::new(5.0, 5.0), &obstacles);

        assert_eq!(resolved.right(), 100.0);
        assert_eq!(resolved.top(), 55.0);
    }

    #[test]
    fn test_mask_refines_box_overlap() {
        // Only the top-left pixel of `a` is solid; `b` overlaps its bottom-right corner.
        let mut alpha = vec![0u8; 16];
        alpha[0] = 255;
        let a = CollisionMask::from_alpha(4, 4, &alpha, 0).unwrap();
        let b = CollisionMask::solid(4, 4);

        assert!(!a.overlaps((0.0, 0.0), &b, (2.0, 2.0)));
        assert!(a.overlaps((0.0, 0.0), &b, (-3.0, -3.0)));
    }

    #[test]
    fn test_mask_rejects_bad_buffer() {
        assert!(CollisionMask::from_alpha(4, 4, &[0u8; 3], 0).is_none());
        assert!(CollisionMask::from_rows(&["##", "#"]).is_none());
        assert!(CollisionMask::from_rows::<&str>(&[]).is_none());
    }

    #[test]
    fn test_mask_from_rows() {
        let mask = CollisionMask::from_rows(&["#..", ".#."]).unwrap();
        assert_eq!((mask.width(), mask.height()), (3, 2));
        assert!(mask.is_solid(0, 0));
        assert!(mask.is_solid(1, 1));
        assert!(!mask.is_solid(2, 0));
    }

    #[test]
    fn test_static_collision_indices() {
        let obstacles = vec![
            Obstacle::new(0.0, 0.0, 10.0, 10.0),
            Obstacle::new(100.0, 100.0, 10.0, 10.0),
        ];
        let hits = check_static_collisions(&Rect::new(5.0, 5.0, 10.0, 10.0), &obstacles);
        assert_eq!(hits, vec![0]);
    }
}
