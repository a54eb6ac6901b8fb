//! Homogeneous-coordinate tuples for 3D geometry.
//!
//! A tuple (x, y, z, w) represents a point when w is (approximately) 1 and a
//! vector when w is (approximately) 0. Any other w is an "irregular" tuple,
//! kept for algebraic completeness. The kind is derived from w on demand and
//! never stored; every operation picks its w rule from the kinds of its
//! operands.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Default tolerance for approximate comparison and classification.
pub const EPSILON: f64 = 1e-6;

/// Compare two floats for approximate equality.
///
/// A non-positive `epsilon` falls back to [`EPSILON`]. Values above 0.5 make
/// the point and vector classification bands overlap and are not meaningful.
pub fn near_eq(a: f64, b: f64, epsilon: f64) -> bool {
    let eps = if epsilon > 0.0 { epsilon } else { EPSILON };
    (a - b).abs() < eps
}

/// Point, vector, or irregular tuple in homogeneous coordinates (x, y, z, w).
///
/// A point has w=1, a vector has w=0. The struct is a plain immutable value:
/// every operation returns a new tuple and nothing is mutated in place.
#[derive(Debug, Clone, Copy)]
pub struct Tuple {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
    /// Homogeneous component selecting the tuple's kind.
    pub w: f64,
}

/// Shorthand for creating a tuple with homogeneous coordinates (x, y, z, w).
///
/// Usable for both points and vectors, depending on the value of w. If w=1 it
/// represents a point; if w=0 a vector; anything else is an irregular tuple.
pub fn tuple(x: f64, y: f64, z: f64, w: f64) -> Tuple {
    Tuple::new(x, y, z, w)
}

/// Create a new point in 3D space. The resulting tuple has w=1.
pub fn point(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 1.0)
}

/// Create a new vector in 3D space. The resulting tuple has w=0.
pub fn vector(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 0.0)
}

impl Tuple {
    /// Sentinel for undefined results such as division by zero or
    /// normalization of a zero-magnitude tuple. An ordinary value, detected
    /// with [`Tuple::is_nan`], not an error.
    pub const NAN: Tuple = Tuple {
        x: f64::NAN,
        y: f64::NAN,
        z: f64::NAN,
        w: f64::NAN,
    };

    /// Create a tuple from raw homogeneous coordinates.
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// True if the tuple is a point (w within [`EPSILON`] of 1).
    pub fn is_point(&self) -> bool {
        self.is_point_within(EPSILON)
    }

    /// True if the tuple's w is within `epsilon` of 1.
    pub fn is_point_within(&self, epsilon: f64) -> bool {
        near_eq(self.w, 1.0, epsilon)
    }

    /// True if the tuple is a vector (w within [`EPSILON`] of 0).
    pub fn is_vector(&self) -> bool {
        self.is_vector_within(EPSILON)
    }

    /// True if the tuple's w is within `epsilon` of 0.
    pub fn is_vector_within(&self, epsilon: f64) -> bool {
        near_eq(self.w, 0.0, epsilon)
    }

    /// True if any component is NaN. Detects the [`Tuple::NAN`] sentinel as
    /// well as partially recovered parse results.
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan()
    }

    /// Reinterpret the coordinates as a point (w forced to 1).
    pub fn to_point(&self) -> Tuple {
        point(self.x, self.y, self.z)
    }

    /// Reinterpret the coordinates as a vector (w forced to 0).
    pub fn to_vector(&self) -> Tuple {
        vector(self.x, self.y, self.z)
    }

    /// Componentwise approximate equality with the default [`EPSILON`].
    pub fn approx_eq(&self, other: Tuple) -> bool {
        self.approx_eq_within(other, EPSILON)
    }

    /// Componentwise approximate equality; all four components must match
    /// within `epsilon`.
    pub fn approx_eq_within(&self, other: Tuple, epsilon: f64) -> bool {
        near_eq(self.x, other.x, epsilon)
            && near_eq(self.y, other.y, epsilon)
            && near_eq(self.z, other.z, epsilon)
            && near_eq(self.w, other.w, epsilon)
    }

    /// Length of the tuple.
    ///
    /// Points have no magnitude by convention and return 0. Vectors use the
    /// familiar 3-component length; irregular tuples include w.
    pub fn magnitude(&self) -> f64 {
        if self.is_point() {
            return 0.0;
        }

        let mut square_sum = self.x * self.x + self.y * self.y + self.z * self.z;
        if !self.is_vector() {
            square_sum += self.w * self.w;
        }

        square_sum.sqrt()
    }

    /// Scale the tuple to unit magnitude.
    ///
    /// Zero-magnitude inputs (points, the zero vector) yield [`Tuple::NAN`].
    pub fn normalize(&self) -> Tuple {
        *self / self.magnitude()
    }

    /// Dot product.
    ///
    /// NaN if either operand is a point (points have no dot product by
    /// convention); 3-component dot for two vectors; 4-component dot when an
    /// irregular tuple is involved.
    pub fn dot(&self, other: Tuple) -> f64 {
        if self.is_point() || other.is_point() {
            return f64::NAN;
        }

        let mut product = self.x * other.x + self.y * other.y + self.z * other.z;
        if !(self.is_vector() && other.is_vector()) {
            product += self.w * other.w;
        }

        product
    }
}

impl Add for Tuple {
    type Output = Tuple;

    fn add(self, rhs: Tuple) -> Tuple {
        let w = if self.is_point() && rhs.is_point() {
            0.0 // the sum of two points is interpreted as a vector
        } else {
            self.w + rhs.w
        };

        Tuple::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, w)
    }
}

impl Sub for Tuple {
    type Output = Tuple;

    fn sub(self, rhs: Tuple) -> Tuple {
        let w = if self.is_point() && rhs.is_vector() || self.is_vector() && rhs.is_point() {
            1.0 // subtraction between a point and a vector is interpreted as a point
        } else {
            self.w - rhs.w
        };

        Tuple::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, w)
    }
}

impl Neg for Tuple {
    type Output = Tuple;

    fn neg(self) -> Tuple {
        let w = if self.is_point() || self.is_vector() {
            self.w // negating a point or vector keeps its kind
        } else {
            -self.w
        };

        Tuple::new(-self.x, -self.y, -self.z, w)
    }
}

impl Mul<f64> for Tuple {
    type Output = Tuple;

    fn mul(self, scalar: f64) -> Tuple {
        let w = if self.is_point() || self.is_vector() {
            self.w // scaling a point or vector keeps its kind
        } else {
            self.w * scalar
        };

        Tuple::new(self.x * scalar, self.y * scalar, self.z * scalar, w)
    }
}

impl Div<f64> for Tuple {
    type Output = Tuple;

    /// Division by zero yields [`Tuple::NAN`] rather than panicking.
    fn div(self, scalar: f64) -> Tuple {
        if scalar == 0.0 {
            return Tuple::NAN;
        }

        self * (1.0 / scalar)
    }
}

impl fmt::Display for Tuple {
    /// Formats as `Point(x, y, z)`, `Vector(x, y, z)` or `Tuple(x, y, z, w)`
    /// with six decimal digits per field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "Point({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
        } else if self.is_vector() {
            write!(f, "Vector({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
        } else {
            write!(
                f,
                "Tuple({:.6}, {:.6}, {:.6}, {:.6})",
                self.x, self.y, self.z, self.w
            )
        }
    }
}
