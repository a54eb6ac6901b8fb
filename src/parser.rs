//! Text parser turning `"(x,y[,z])"` strings into tuples.
//!
//! Used by the CLI to read points and vectors from flag values. Parentheses
//! and whitespace are optional; components are signed decimals separated by
//! commas. On failure the error carries a best-effort tuple with NaN in the
//! unparsed fields for diagnostic display.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::tuple::{point, vector, Tuple};

static TUPLE_MATCHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\(?\s*([-+]?\d*\.?\d+)\s*,\s*([-+]?\d*\.?\d+)(?:\s*,\s*([-+]?\d*\.?\d+))?\s*\)?\s*$")
        .expect("bad regex")
});

/// Number of spatial components expected in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimensions {
    /// Two components; z is filled with 0.
    Two,
    /// Three components (the default).
    #[default]
    Three,
}

impl Dimensions {
    fn count(self) -> usize {
        match self {
            Dimensions::Two => 2,
            Dimensions::Three => 3,
        }
    }
}

/// Kind of tuple the parsed coordinates should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Produce a point (w=1).
    Point,
    /// Produce a vector (w=0, the default).
    #[default]
    Vector,
}

/// Options controlling how tuple text is interpreted.
///
/// The default parses a 3-D vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct TupleFormat {
    /// Expected component count.
    pub dimensions: Dimensions,
    /// Kind of tuple to construct.
    pub kind: Kind,
}

impl TupleFormat {
    /// Format for a 3-D point such as a launch position.
    pub fn point_3d() -> Self {
        Self {
            dimensions: Dimensions::Three,
            kind: Kind::Point,
        }
    }

    /// Format for a 3-D vector such as a velocity.
    pub fn vector_3d() -> Self {
        Self::default()
    }

    /// Format for a 2-D vector such as wind; z is filled with 0.
    pub fn vector_2d() -> Self {
        Self {
            dimensions: Dimensions::Two,
            kind: Kind::Vector,
        }
    }
}

/// Failure to parse tuple text.
#[derive(Debug, Error)]
pub enum ParseTupleError {
    /// The input did not match the `(x,y[,z])` shape at all.
    #[error("invalid input: expected format '(x,y[,z])'")]
    Format,
    /// The input matched but carried the wrong number of components.
    #[error("invalid input: expected {expected} dimensions, got {got}")]
    Dimensions {
        /// Component count the caller asked for.
        expected: usize,
        /// Component count found in the text.
        got: usize,
        /// Best-effort recovery of what did parse.
        partial: Tuple,
    },
}

impl ParseTupleError {
    /// Best-effort tuple for diagnostic display.
    ///
    /// Components that could not be recovered from the input are NaN, so
    /// [`Tuple::is_nan`] is always true for this value.
    pub fn partial(&self) -> Tuple {
        match self {
            ParseTupleError::Format => Tuple::NAN,
            ParseTupleError::Dimensions { partial, .. } => *partial,
        }
    }
}

/// Parse a string representation of a tuple in the format `(x,y[,z])`.
///
/// Surrounding parentheses and whitespace are optional. `format` selects the
/// expected component count and whether a point or vector is produced; the
/// default is a 3-D vector. A dimension mismatch between the text and the
/// requested format is an error.
pub fn parse_tuple(input: &str, format: TupleFormat) -> Result<Tuple, ParseTupleError> {
    let caps = TUPLE_MATCHER.captures(input).ok_or(ParseTupleError::Format)?;

    // The regex only admits valid decimal shapes, so component parses cannot
    // fail; NaN keeps the function total all the same.
    let x = caps[1].parse().unwrap_or(f64::NAN);
    let y = caps[2].parse().unwrap_or(f64::NAN);
    let z_text = caps.get(3);

    let got = if z_text.is_some() { 3 } else { 2 };
    let expected = format.dimensions.count();
    if got != expected {
        return Err(ParseTupleError::Dimensions {
            expected,
            got,
            partial: build(format.kind, x, y, f64::NAN),
        });
    }

    let z = match format.dimensions {
        Dimensions::Three => z_text
            .map(|m| m.as_str().parse().unwrap_or(f64::NAN))
            .unwrap_or(f64::NAN),
        Dimensions::Two => 0.0,
    };

    Ok(build(format.kind, x, y, z))
}

fn build(kind: Kind, x: f64, y: f64, z: f64) -> Tuple {
    match kind {
        Kind::Point => point(x, y, z),
        Kind::Vector => vector(x, y, z),
    }
}
