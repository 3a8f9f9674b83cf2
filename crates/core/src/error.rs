use thiserror::Error;

/// Errors that can occur while building grids, encoding hexes, or
/// rasterizing regions. Every failure is local to the call that produced it;
/// nothing is retried and no partial results are ever returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HexError {
    /// An input violated a precondition, e.g. an empty polygon or a grid
    /// with a zero-sized axis.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A hex coordinate is too large (in magnitude) to be packed into a
    /// [HexCode](crate::HexCode) with the configured number of bits.
    #[error("value {value} does not fit in a {bits}-bit hex code axis")]
    EncodingOverflow { value: i64, bits: u32 },
}
