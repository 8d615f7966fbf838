//! Core geometry types: points, weighted buildings and bounding rectangles.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A plain 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A weighted point that may be enclosed by the zone rectangle.
///
/// `id` is the building's position in the input and stays stable while
/// strategies reorder indices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Building {
    /// Input position (0-based).
    pub id: usize,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Weight added to the cost when the building is enclosed. May be negative.
    pub weight: f64,
}

impl Building {
    /// Creates a new building.
    pub const fn new(id: usize, x: f64, y: f64, weight: f64) -> Self {
        Self { id, x, y, weight }
    }

    /// Returns the building's location.
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Returns true if enclosing this building lowers the weight sum.
    pub fn is_negative(&self) -> bool {
        self.weight < 0.0
    }
}

/// Builds a list of buildings from `(x, y, weight)` triples, assigning ids in order.
pub fn buildings_from_triples(triples: &[(f64, f64, f64)]) -> Vec<Building> {
    triples
        .iter()
        .enumerate()
        .map(|(id, &(x, y, w))| Building::new(id, x, y, w))
        .collect()
}

/// Axis-aligned rectangle enclosing a set of buildings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rectangle {
    /// Minimum X coordinate.
    pub min_x: f64,
    /// Minimum Y coordinate.
    pub min_y: f64,
    /// Maximum X coordinate.
    pub max_x: f64,
    /// Maximum Y coordinate.
    pub max_y: f64,
}

impl Rectangle {
    /// Creates a rectangle from its extents.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounding box of a point set, or `None` if the set is empty.
    pub fn bounding<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut rect = Self::new(first.x, first.y, first.x, first.y);
        for p in iter {
            rect.expand_to(p);
        }
        Some(rect)
    }

    /// Bounding box of the buildings at `indices`.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub fn of_subset(buildings: &[Building], indices: &[usize]) -> Option<Self> {
        Self::bounding(indices.iter().map(|&i| buildings[i].position()))
    }

    /// Grows the rectangle to cover `p`.
    pub fn expand_to(&mut self, p: Point2D) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    /// Width along X.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height along Y.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Perimeter: `2 * (width + height)`.
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }

    /// True when the rectangle has zero width or zero height.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Returns true if `p` lies inside or on the boundary.
    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Corners in the order `(minX,minY), (maxX,minY), (maxX,maxY), (minX,maxY)`.
    pub fn corners(&self) -> [Point2D; 4] {
        [
            Point2D::new(self.min_x, self.min_y),
            Point2D::new(self.max_x, self.min_y),
            Point2D::new(self.max_x, self.max_y),
            Point2D::new(self.min_x, self.max_y),
        ]
    }

    /// The four edges, each running from one corner to the next and closing
    /// back at `(minX,minY)`.
    pub fn edges(&self) -> [(Point2D, Point2D); 4] {
        let c = self.corners();
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_of_points() {
        let rect = Rectangle::bounding([
            Point2D::new(3.0, -1.0),
            Point2D::new(-2.0, 4.0),
            Point2D::new(0.5, 0.5),
        ])
        .unwrap();

        assert_eq!(rect, Rectangle::new(-2.0, -1.0, 3.0, 4.0));
        assert_eq!(rect.width(), 5.0);
        assert_eq!(rect.height(), 5.0);
        assert_eq!(rect.perimeter(), 20.0);
        assert!(!rect.is_degenerate());
    }

    #[test]
    fn test_bounding_empty() {
        assert!(Rectangle::bounding(std::iter::empty()).is_none());
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let rect = Rectangle::bounding([Point2D::new(7.0, 7.0)]).unwrap();
        assert!(rect.is_degenerate());
        assert_eq!(rect.perimeter(), 0.0);
    }

    #[test]
    fn test_collinear_perimeter() {
        let rect = Rectangle::bounding([Point2D::new(0.0, 0.0), Point2D::new(0.0, 10.0)]).unwrap();
        assert!(rect.is_degenerate());
        assert_eq!(rect.perimeter(), 20.0);
    }

    #[test]
    fn test_of_subset_uses_only_selected() {
        let buildings = buildings_from_triples(&[
            (0.0, 0.0, 1.0),
            (100.0, 100.0, 1.0),
            (5.0, 2.0, 1.0),
        ]);
        let rect = Rectangle::of_subset(&buildings, &[0, 2]).unwrap();
        assert_eq!(rect, Rectangle::new(0.0, 0.0, 5.0, 2.0));
        assert!(!rect.contains(buildings[1].position()));
    }

    #[test]
    fn test_edges_cycle() {
        let rect = Rectangle::new(0.0, 0.0, 2.0, 1.0);
        let edges = rect.edges();

        assert_eq!(edges[0], (Point2D::new(0.0, 0.0), Point2D::new(2.0, 0.0)));
        assert_eq!(edges[1], (Point2D::new(2.0, 0.0), Point2D::new(2.0, 1.0)));
        assert_eq!(edges[2], (Point2D::new(2.0, 1.0), Point2D::new(0.0, 1.0)));
        assert_eq!(edges[3], (Point2D::new(0.0, 1.0), Point2D::new(0.0, 0.0)));

        let total: f64 = edges
            .iter()
            .map(|(a, b)| (b.x - a.x).abs() + (b.y - a.y).abs())
            .sum();
        assert_eq!(total, rect.perimeter());
    }

    #[test]
    fn test_building_ids_follow_input_order() {
        let buildings = buildings_from_triples(&[(1.0, 2.0, -3.0), (4.0, 5.0, 6.0)]);
        assert_eq!(buildings[0].id, 0);
        assert_eq!(buildings[1].id, 1);
        assert!(buildings[0].is_negative());
        assert!(!buildings[1].is_negative());
        assert_eq!(buildings[1].position(), Point2D::new(4.0, 5.0));
    }
}
