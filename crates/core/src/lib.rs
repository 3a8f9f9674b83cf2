//! A coordinate and indexing library for hexagonal grids. It converts between
//! continuous pixel space and discrete hex cells, enumerates neighborhoods,
//! gives each hex a compact integer code, and rasterizes polygons into the
//! set of hexes that cover them.
//!
//! ```
//! use hexgrid::{Grid, Hex, HexCoder, OrientationKind, Point};
//!
//! let grid = Grid::new(
//!     OrientationKind::Flat,
//!     Point::new(10.0, 20.0),
//!     Point::new(20.0, 10.0),
//!     HexCoder::default(),
//! )?;
//! assert_eq!(grid.hex_at(Point::new(13.0, 666.0)), Hex::new(0, 37));
//!
//! let region = grid.region(&[
//!     Point::new(20.0, 19.99999),
//!     Point::new(20.0, 40.0),
//!     Point::new(40.0, 60.0),
//!     Point::new(60.0, 40.0),
//!     Point::new(50.0, 30.0),
//!     Point::new(40.0, 40.0),
//! ])?;
//! assert_eq!(region.len(), 6);
//! assert!(region.contains(Hex::new(1, 2)));
//! # Ok::<(), hexgrid::HexError>(())
//! ```
//!
//! See the [hex] module for a description of the coordinate systems, and
//! [GridConfig] for building grids from serialized config.

mod config;
mod error;
pub mod hex;
pub mod region;
mod util;

pub use crate::{
    config::GridConfig,
    error::HexError,
    hex::{
        FractionalHex, Grid, Hex, HexCode, HexCoder, HexDirection, Orientation,
        OrientationKind, Point,
    },
    region::Region,
    util::neighborhood_len,
};
