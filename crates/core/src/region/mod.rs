//! Rasterization of polygons into sets of hexes.

mod raycast;

pub use self::raycast::point_in_polygon;

use crate::{
    error::HexError,
    hex::{Grid, Hex, HexCode, HexCodeIndexMap, Point},
    timed,
};
use log::trace;

/// The set of hexes that cover a polygon, within a particular [Grid].
///
/// Hexes are stored in the order they were scanned while building the
/// region: ascending `q`, then ascending `r`. That is NOT a spatial sort,
/// just a stable, reproducible order. Each hex is keyed by its [HexCode], so
/// membership checks are O(1).
///
/// A region borrows the grid it was built with, and is immutable once built.
#[derive(Clone, Debug)]
pub struct Region<'a> {
    grid: &'a Grid,
    hexes: HexCodeIndexMap<Hex>,
}

impl<'a> Region<'a> {
    /// Rasterize a polygon into hexes. The polygon is a ring of vertices in
    /// pixel space, and may optionally repeat its first vertex at the end. A
    /// hex is included if any of its corners falls inside the polygon, or any
    /// of the polygon's vertices falls inside the hex.
    ///
    /// Only simple (non-self-intersecting) polygons are supported. Other
    /// polygons won't cause an error, but the output is unspecified.
    ///
    /// The cost of this is proportional to the number of hexes in the
    /// polygon's bounding box times the number of vertices, and there's no
    /// limit on the bounding box. Keep your polygons reasonably sized.
    ///
    /// Returns an error if the polygon is empty or has a vertex that's
    /// non-finite, in pixel space or once mapped into hex space.
    /// The whole scanned area (the polygon's bounding box plus one hex of
    /// padding) has to be encodable with the grid's coder, otherwise this
    /// fails with [HexError::EncodingOverflow] before anything is scanned.
    pub fn new(grid: &'a Grid, polygon: &[Point]) -> Result<Self, HexError> {
        let polygon = match polygon {
            [] => {
                return Err(HexError::InvalidArgument(
                    "cannot build a region from an empty polygon".into(),
                ))
            }
            // Closed ring, drop the duplicate vertex
            [first, .., last] if first == last => {
                &polygon[..polygon.len() - 1]
            }
            _ => polygon,
        };

        if let Some(vertex) = polygon.iter().find(|vertex| !vertex.is_finite())
        {
            return Err(HexError::InvalidArgument(format!(
                "polygon vertices must be finite, got {}",
                vertex
            )));
        }
        // Finite pixels can still blow up when scaled by a tiny grid size
        if let Some(vertex) = polygon.iter().find(|vertex| {
            let fractional = grid.fractional_hex_at(**vertex);
            !(fractional.q().is_finite() && fractional.r().is_finite())
        }) {
            return Err(HexError::InvalidArgument(format!(
                "polygon vertex {} is out of range for this grid",
                vertex
            )));
        }

        let hexes = timed!("Region rasterization", rasterize(grid, polygon))?;
        Ok(Self { grid, hexes })
    }

    /// The grid that this region was built in
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Get all hexes in this region, in scan order
    pub fn hexes(&self) -> impl ExactSizeIterator<Item = Hex> + '_ {
        self.hexes.values().copied()
    }

    /// Get the codes of all hexes in this region, in scan order
    pub fn codes(&self) -> impl ExactSizeIterator<Item = HexCode> + '_ {
        self.hexes.keys().copied()
    }

    /// Number of hexes in the region
    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Is the hex part of this region? A hex that can't be encoded by the
    /// grid's coder can never be part of a region, so that's just `false`.
    pub fn contains(&self, hex: Hex) -> bool {
        match self.grid.hex_to_code(hex) {
            Ok(code) => self.hexes.contains_key(&code),
            Err(_) => false,
        }
    }

    /// Get the position of a hex within [Self::hexes], or `None` if the hex
    /// isn't in this region
    pub fn index_of(&self, hex: Hex) -> Option<usize> {
        let code = self.grid.hex_to_code(hex).ok()?;
        self.hexes.get_full(&code).map(|(index, _, _)| index)
    }
}

impl<'a, 'r> IntoIterator for &'r Region<'a> {
    type Item = Hex;
    type IntoIter = std::iter::Copied<indexmap::map::Values<'r, HexCode, Hex>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hexes.values().copied()
    }
}

/// Find every hex that covers the polygon. The polygon must be non-empty and
/// open (last vertex != first vertex).
fn rasterize(
    grid: &Grid,
    polygon: &[Point],
) -> Result<HexCodeIndexMap<Hex>, HexError> {
    let (min, max) = bounding_box(grid, polygon);
    // The coder's range is symmetric on both axes, so if the two extreme
    // corners encode then so does everything between them
    grid.hex_to_code(min)?;
    grid.hex_to_code(max)?;
    trace!("Scanning bounding box {} to {}", min, max);

    let mut hexes = HexCodeIndexMap::default();
    for q in min.q()..=max.q() {
        for r in min.r()..=max.r() {
            let hex = Hex::new(q, r);
            let corners = grid.hex_corners(hex);
            // Checking the polygon's vertices against the hex catches
            // polygons that are small enough to fit between the corners
            let covered = corners
                .iter()
                .any(|corner| point_in_polygon(polygon, *corner))
                || polygon
                    .iter()
                    .any(|vertex| point_in_polygon(&corners, *vertex));
            if covered {
                hexes.insert(grid.hex_to_code(hex)?, hex);
            }
        }
    }

    Ok(hexes)
}

/// Get the axial bounding box of a polygon, as the minimum and maximum
/// corners. The box is padded by one hex on every side, because a hex can
/// overlap the polygon even when no vertex maps into it. Padding saturates
/// at the edges of the `i64` range.
fn bounding_box(grid: &Grid, polygon: &[Point]) -> (Hex, Hex) {
    let mut hexes = polygon.iter().map(|vertex| grid.hex_at(*vertex));
    // Caller guarantees at least one vertex
    let first = hexes.next().unwrap_or_default();
    let (min, max) = hexes.fold((first, first), |(min, max), hex| {
        (
            Hex::new(min.q().min(hex.q()), min.r().min(hex.r())),
            Hex::new(max.q().max(hex.q()), max.r().max(hex.r())),
        )
    });
    (
        Hex::new(min.q().saturating_sub(1), min.r().saturating_sub(1)),
        Hex::new(max.q().saturating_add(1), max.r().saturating_add(1)),
    )
}
