//! This module holds the basic types for hexagon grids, and the conversions
//! between them.
//!
//! ## Coordinate Systems
//!
//! There are two coordinate systems in play here.
//!
//! ### Hex Coordinates
//!
//! Hex coordinates address whole cells in the tessellation. We use the axial
//! system [defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-axial):
//! each hex has two integer components, `q` and `r`, and a third component
//! `s` that is always `-(q + r)`. **For any hex, `q + r + s = 0`.** The third
//! component is never stored, but a lot of the math (distances, rounding)
//! is much simpler when you think of hexes as cubes sliced by the plane
//! `q + r + s = 0`.
//!
//! ### Pixel Coordinates
//!
//! Pixel coordinates are plain continuous 2D [Point]s. A [Grid] defines how
//! the two spaces line up:
//!
//! - An [Orientation] decides whether hexes are pointy-topped or flat-topped,
//!   and holds the matrices that map between the two spaces
//! - An origin, which is the pixel at the center of hex `(0, 0)`
//! - A size, which scales each pixel axis independently. This is the distance
//!   from a hex's center to its corners, so non-uniform sizes squash hexes
//!
//! Going from hex to pixel is a plain matrix multiplication. Going the other
//! way gives a [FractionalHex], which is then rounded to the nearest [Hex]
//! with cube rounding.
//!
//! ## Hex Codes
//!
//! Each hex also has a compact integer identity, its [HexCode]. Codes are
//! what regions use as lookup keys. See [HexCoder] for the encoding.

mod code;
mod grid;
mod orientation;
mod unit;

pub use self::{code::*, grid::*, orientation::*, unit::*};
