//! Point-in-polygon testing via ray casting. A horizontal ray is cast from
//! the query point towards `+x`, and every polygon edge it crosses flips the
//! inside/outside state.

use crate::hex::Point;

/// Is the point inside the polygon? The polygon is an ordered ring of
/// vertices, and must NOT repeat its first vertex at the end (the closing
/// edge from the last vertex back to the first is implied). An empty polygon
/// contains nothing.
pub fn point_in_polygon(polygon: &[Point], point: Point) -> bool {
    let (first, last) = match (polygon.first(), polygon.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return false,
    };

    // The closing edge seeds the state, then every other edge flips it
    let mut contains = intersects(point, last, first);
    for edge in polygon.windows(2) {
        if intersects(point, edge[0], edge[1]) {
            contains = !contains;
        }
    }
    contains
}

/// Does a ray cast from `point` towards `+x` cross the edge from `start` to
/// `end`?
fn intersects(mut point: Point, start: Point, end: Point) -> bool {
    let (start, end) = if start.y() > end.y() {
        (end, start)
    } else {
        (start, end)
    };

    // A ray that passes exactly through a vertex would get counted for both
    // edges that share it (or neither), so nudge it up off the vertex
    while point.y() == start.y() || point.y() == end.y() {
        point = Point::new(point.x(), point.y().next_up());
    }

    if point.y() < start.y() || point.y() > end.y() {
        return false;
    }

    if start.x() > end.x() {
        if point.x() > start.x() {
            return false;
        }
        if point.x() < end.x() {
            return true;
        }
    } else {
        if point.x() > end.x() {
            return false;
        }
        if point.x() < start.x() {
            return true;
        }
    }

    // The point is inside the edge's bounding box, so compare slopes to see
    // which side of the edge it's on
    let ray_slope = (point.y() - start.y()) / (point.x() - start.x());
    let edge_slope = (end.y() - start.y()) / (end.x() - start.x());
    ray_slope >= edge_slope
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_square() {
        let square = square();
        assert!(point_in_polygon(&square, Point::new(5.0, 5.0)));
        assert!(point_in_polygon(&square, Point::new(0.1, 9.9)));
        assert!(!point_in_polygon(&square, Point::new(-1.0, 5.0)));
        assert!(!point_in_polygon(&square, Point::new(11.0, 5.0)));
        assert!(!point_in_polygon(&square, Point::new(5.0, -1.0)));
        assert!(!point_in_polygon(&square, Point::new(5.0, 11.0)));
    }

    #[test]
    fn test_winding_order() {
        let mut square = square();
        square.reverse();
        assert!(point_in_polygon(&square, Point::new(5.0, 5.0)));
        assert!(!point_in_polygon(&square, Point::new(15.0, 5.0)));
    }

    /// Points level with a vertex shouldn't get double-counted
    #[test]
    fn test_vertex_alignment() {
        let diamond = vec![
            Point::new(0.0, 5.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(5.0, 10.0),
        ];
        assert!(point_in_polygon(&diamond, Point::new(5.0, 5.0)));
        assert!(point_in_polygon(&diamond, Point::new(2.0, 5.0)));
        assert!(!point_in_polygon(&diamond, Point::new(-2.0, 5.0)));
        assert!(!point_in_polygon(&diamond, Point::new(12.0, 5.0)));
        assert!(!point_in_polygon(&diamond, Point::new(1.0, 10.0)));
    }

    #[test]
    fn test_concave() {
        // A "U" shape, open at the top
        let u = vec![
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(30.0, 30.0),
            Point::new(20.0, 30.0),
            Point::new(20.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 30.0),
            Point::new(0.0, 30.0),
        ];
        assert!(point_in_polygon(&u, Point::new(5.0, 20.0)));
        assert!(point_in_polygon(&u, Point::new(25.0, 20.0)));
        assert!(point_in_polygon(&u, Point::new(15.0, 5.0)));
        assert!(!point_in_polygon(&u, Point::new(15.0, 20.0)));
    }

    #[test]
    fn test_triangle() {
        let triangle = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(&triangle, Point::new(2.0, 2.0)));
        assert!(point_in_polygon(&triangle, Point::new(4.9, 4.9)));
        assert!(!point_in_polygon(&triangle, Point::new(5.1, 5.1)));
    }

    #[test]
    fn test_empty() {
        assert!(!point_in_polygon(&[], Point::ORIGIN));
    }
}
