use serde::{Deserialize, Serialize};

/// Largest coordinate or size magnitude accepted from user input.
///
/// Far beyond any real virtual screen, and small enough that edge sums
/// of in-range rectangles fit in an `i32`.
pub const COORD_LIMIT: i32 = 1 << 24;

/// A rectangle in virtual-screen coordinates.
///
/// Stored as origin plus size. Win32 hands out `RECT`s as
/// left/top/right/bottom, so [`Rect::from_ltrb`] converts at the
/// platform boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from its four edges.
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// Exclusive right edge, saturating at `i32::MAX`.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at `i32::MAX`.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether every coordinate and size is within [`COORD_LIMIT`].
    pub fn is_in_range(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| (-COORD_LIMIT..=COORD_LIMIT).contains(v))
    }

    /// Returns the area of the overlap between two rectangles, or 0.
    pub fn intersection_area(&self, other: &Rect) -> i64 {
        let (a, b) = (self.wide(), other.wide());
        let w = (a[2].min(b[2]) - a[0].max(b[0])).max(0);
        let h = (a[3].min(b[3]) - a[1].max(b[1])).max(0);
        w.saturating_mul(h)
    }

    /// Squared distance between the closest points of two rectangles.
    ///
    /// Zero when they touch or overlap.
    pub fn distance_sq(&self, other: &Rect) -> i64 {
        let (a, b) = (self.wide(), other.wide());
        let dx = (b[0] - a[2]).max(a[0] - b[2]).max(0);
        let dy = (b[1] - a[3]).max(a[1] - b[3]).max(0);
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }

    /// Left, top, right and bottom widened to `i64`.
    fn wide(&self) -> [i64; 4] {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        [x, y, x + i64::from(self.width), y + i64::from(self.height)]
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ltrb_computes_size() {
        // Act
        let rect = Rect::from_ltrb(10, 20, 110, 70);

        // Assert
        assert_eq!(rect, Rect::new(10, 20, 100, 50));
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 70);
    }

    #[test]
    fn intersection_area_of_disjoint_rects_is_zero() {
        // Arrange
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(200, 0, 100, 100);

        // Act / Assert
        assert_eq!(a.intersection_area(&b), 0);
    }

    #[test]
    fn intersection_area_of_partial_overlap() {
        // Arrange
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 100, 100);

        // Act / Assert
        assert_eq!(a.intersection_area(&b), 2500);
    }

    #[test]
    fn distance_sq_measures_gap_between_rects() {
        // Arrange
        let a = Rect::new(0, 0, 100, 100);
        let right = Rect::new(130, 0, 10, 10);
        let diagonal = Rect::new(103, 104, 10, 10);

        // Act / Assert
        assert_eq!(a.distance_sq(&right), 900);
        assert_eq!(a.distance_sq(&diagonal), 9 + 16);
        assert_eq!(a.distance_sq(&Rect::new(50, 50, 10, 10)), 0);
    }

    #[test]
    fn extreme_rects_do_not_overflow() {
        // Arrange
        let far_right = Rect::new(i32::MAX - 5, 0, 10, 10);
        let far_left = Rect::new(i32::MIN + 1, 0, 10, 10);
        let screen = Rect::new(0, 0, 1920, 1080);

        // Act / Assert
        assert_eq!(far_right.right(), i32::MAX);
        assert_eq!(far_right.intersection_area(&screen), 0);
        assert_eq!(far_left.intersection_area(&screen), 0);
        assert!(far_right.distance_sq(&screen) > 0);
        assert!(far_left.distance_sq(&screen) > far_right.distance_sq(&screen));
    }

    #[test]
    fn range_check_bounds_every_field() {
        // Act / Assert
        assert!(Rect::new(-1920, 0, 1920, 1080).is_in_range());
        assert!(Rect::new(COORD_LIMIT, -COORD_LIMIT, 0, 0).is_in_range());
        assert!(!Rect::new(i32::MAX - 5, 0, 10, 10).is_in_range());
        assert!(!Rect::new(0, 0, 10, COORD_LIMIT + 1).is_in_range());
    }
}
