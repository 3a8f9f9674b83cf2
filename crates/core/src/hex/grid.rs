use crate::{
    config::GridConfig,
    error::HexError,
    hex::{FractionalHex, Hex, HexCode, HexCoder, Orientation, Point},
    region::Region,
    util,
};
use anyhow::Context;
use log::info;
use std::cmp;
use validator::Validate;

/// A coordinate system that ties hex space to pixel space. A grid is an
/// orientation (pointy or flat), a pixel offset for the center of the origin
/// hex, and a per-axis scale. It also carries the [HexCoder] that is used to
/// give hexes their canonical identity.
///
/// Grids are immutable. Every operation is a pure function of the grid and
/// its inputs, so a grid can be shared freely between threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    orientation: Orientation,
    origin: Point,
    size: Point,
    coder: HexCoder,
}

impl Grid {
    /// Create a new grid. The size is the distance from a hex's center to its
    /// corners, per axis. A size with a zero (or non-finite) component is
    /// rejected, since pixel-to-hex conversion divides by it. The origin must
    /// be finite too.
    pub fn new(
        orientation: impl Into<Orientation>,
        origin: Point,
        size: Point,
        coder: HexCoder,
    ) -> Result<Self, HexError> {
        if size.x() == 0.0 || size.y() == 0.0 || !size.is_finite() {
            return Err(HexError::InvalidArgument(format!(
                "grid size must be finite and non-zero on both axes, got {}",
                size
            )));
        }
        if !origin.is_finite() {
            return Err(HexError::InvalidArgument(format!(
                "grid origin must be finite, got {}",
                origin
            )));
        }

        Ok(Self {
            orientation: orientation.into(),
            origin,
            size,
            coder,
        })
    }

    /// Create a new grid from a config. Returns an error if the config is
    /// invalid. Validation errors can be downcast to
    /// [ValidationErrors](validator::ValidationErrors).
    pub fn from_config(config: GridConfig) -> anyhow::Result<Self> {
        info!("Building grid with config {:#?}", config);

        config.validate().context("invalid config")?;
        let coder = HexCoder::new(config.bits_per_axis)?;
        Ok(Self::new(config.orientation, config.origin, config.size, coder)?)
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Point {
        self.size
    }

    pub fn coder(&self) -> &HexCoder {
        &self.coder
    }

    /// Map a pixel onto hex space, without rounding
    pub fn fractional_hex_at(&self, point: Point) -> FractionalHex {
        let [b0, b1, b2, b3] = *self.orientation.backward();
        let x = (point.x() - self.origin.x()) / self.size.x();
        let y = (point.y() - self.origin.y()) / self.size.y();
        FractionalHex::new(b0 * x + b1 * y, b2 * x + b3 * y)
    }

    /// Get the hex that contains the given pixel. Pixels so far away that
    /// their hex is outside the `i64` range get a saturated hex.
    pub fn hex_at(&self, point: Point) -> Hex {
        self.fractional_hex_at(point).round()
    }

    /// Get the pixel at the center of a hex
    pub fn hex_center(&self, hex: Hex) -> Point {
        let [f0, f1, f2, f3] = *self.orientation.forward();
        let q = hex.q() as f64;
        let r = hex.r() as f64;
        let x = (f0 * q + f1 * r) * self.size.x() + self.origin.x();
        let y = (f2 * q + f3 * r) * self.size.y() + self.origin.y();
        Point::new(x, y)
    }

    /// Get the 6 corners of a hex, in pixel space. The order matches the
    /// orientation's corner table, i.e. counter-clockwise (for `y` pointing
    /// up) starting from the orientation's start angle.
    pub fn hex_corners(&self, hex: Hex) -> [Point; 6] {
        let center = self.hex_center(hex);
        let sines = self.orientation.sines();
        let cosines = self.orientation.cosines();
        let mut corners = [Point::ORIGIN; 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner = Point::new(
                self.size.x() * cosines[i] + center.x(),
                self.size.y() * sines[i] + center.y(),
            );
        }
        corners
    }

    /// Get every hex within `layers` steps of the given hex, NOT including
    /// the hex itself. There will always be exactly `3L(L+1)` hexes. The
    /// order is a scan over `q` then `r` offsets, each ascending.
    ///
    /// Returns an error if the neighborhood would reach outside the `i64`
    /// range, or if it's too big to allocate.
    pub fn hex_neighbors(
        &self,
        hex: Hex,
        layers: u32,
    ) -> Result<Vec<Hex>, HexError> {
        let l = i64::from(layers);
        let in_range = |v: i64| v.checked_sub(l).and(v.checked_add(l));
        if in_range(hex.q()).is_none() || in_range(hex.r()).is_none() {
            return Err(HexError::InvalidArgument(format!(
                "{} layers around {} is outside the hex coordinate range",
                layers, hex
            )));
        }

        let too_big = || {
            HexError::InvalidArgument(format!(
                "neighborhood of {} layers is too large",
                layers
            ))
        };
        let capacity = util::neighborhood_len(layers).ok_or_else(too_big)?;
        let mut neighbors = Vec::new();
        neighbors
            .try_reserve_exact(capacity)
            .map_err(|_| too_big())?;

        for dq in -l..=l {
            // If we just do [-l,l] for r as well, then we end up with a
            // diamond instead of a hexagon
            // https://www.redblobgames.com/grids/hexagons/#range
            let r_min = cmp::max(-l, -dq - l);
            let r_max = cmp::min(l, -dq + l);
            for dr in r_min..=r_max {
                if dq == 0 && dr == 0 {
                    continue;
                }
                neighbors.push(hex + Hex::new(dq, dr));
            }
        }
        debug_assert_eq!(neighbors.len(), capacity, "expected 3L(L+1) hexes");

        Ok(neighbors)
    }

    /// Encode a hex with this grid's coder
    pub fn hex_to_code(&self, hex: Hex) -> Result<HexCode, HexError> {
        self.coder.encode_hex(hex)
    }

    /// Decode a hex with this grid's coder
    pub fn hex_from_code(&self, code: HexCode) -> Hex {
        self.coder.decode(code)
    }

    /// Rasterize a polygon into the set of hexes that cover it. Shorthand
    /// for [Region::new].
    pub fn region(&self, polygon: &[Point]) -> Result<Region<'_>, HexError> {
        Region::new(self, polygon)
    }
}
