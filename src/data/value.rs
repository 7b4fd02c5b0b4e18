//! Field value kinds and the small fixed-size value types they denote.
//!
//! A field stores its node data as flat `f64` components; the types here
//! give those components a typed view (scalar, 3-vector, 3×3-matrix) plus
//! the arithmetic the evaluation and projection layers need.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul};

use num_traits::Zero;

/// Classification of a field's per-node data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ValueKind {
    /// One real component per node.
    Scalar,
    /// A 3-component vector per node.
    Vector,
    /// A 3×3 matrix per node.
    Matrix,
}

impl ValueKind {
    /// Number of real components per node.
    pub fn components(self) -> usize {
        match self {
            ValueKind::Scalar => 1,
            ValueKind::Vector => 3,
            ValueKind::Matrix => 9,
        }
    }
}

/// 3-component real vector.
///
/// Doubles as a local (reference) coordinate: only the first
/// `dimension` components are meaningful for an entity of that dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3(pub [f64; 3]);

impl Vector3 {
    /// The origin / zero vector.
    pub const ZERO: Vector3 = Vector3([0.0; 3]);

    /// Component-wise constructor.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3([x, y, z])
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;
    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3([self[0] + rhs[0], self[1] + rhs[1], self[2] + rhs[2]])
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, s: f64) -> Vector3 {
        Vector3([self[0] * s, self[1] * s, self[2] * s])
    }
}

impl Zero for Vector3 {
    fn zero() -> Self {
        Vector3::ZERO
    }
    fn is_zero(&self) -> bool {
        self.0.iter().all(|c| *c == 0.0)
    }
}

/// 3×3 real matrix, row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix3(pub [[f64; 3]; 3]);

impl Matrix3 {
    /// The zero matrix.
    pub const ZERO: Matrix3 = Matrix3([[0.0; 3]; 3]);

    /// Matrix from three rows.
    pub const fn from_rows(r0: [f64; 3], r1: [f64; 3], r2: [f64; 3]) -> Self {
        Matrix3([r0, r1, r2])
    }
}

impl Index<usize> for Matrix3 {
    type Output = [f64; 3];
    #[inline]
    fn index(&self, row: usize) -> &[f64; 3] {
        &self.0[row]
    }
}

impl Add for Matrix3 {
    type Output = Matrix3;
    fn add(self, rhs: Matrix3) -> Matrix3 {
        let mut out = Matrix3::ZERO;
        for r in 0..3 {
            for c in 0..3 {
                out.0[r][c] = self.0[r][c] + rhs.0[r][c];
            }
        }
        out
    }
}

impl Mul<f64> for Matrix3 {
    type Output = Matrix3;
    fn mul(self, s: f64) -> Matrix3 {
        let mut out = Matrix3::ZERO;
        for r in 0..3 {
            for c in 0..3 {
                out.0[r][c] = self.0[r][c] * s;
            }
        }
        out
    }
}

impl Zero for Matrix3 {
    fn zero() -> Self {
        Matrix3::ZERO
    }
    fn is_zero(&self) -> bool {
        self.0.iter().flatten().all(|c| *c == 0.0)
    }
}

/// Capability set of a projectable value type: zero-constructible, addable,
/// scalar-multipliable, with a flat component encoding.
pub trait FieldValue:
    Copy + PartialEq + std::fmt::Debug + Zero + Mul<f64, Output = Self> + 'static
{
    /// The kind tag this type implements.
    const KIND: ValueKind;

    /// Decode from a flat component slice of length `KIND.components()`.
    fn from_components(src: &[f64]) -> Self;

    /// Encode into a flat component slice of length `KIND.components()`.
    fn write_components(&self, dst: &mut [f64]);
}

impl FieldValue for f64 {
    const KIND: ValueKind = ValueKind::Scalar;

    fn from_components(src: &[f64]) -> Self {
        debug_assert_eq!(src.len(), 1);
        src[0]
    }

    fn write_components(&self, dst: &mut [f64]) {
        debug_assert_eq!(dst.len(), 1);
        dst[0] = *self;
    }
}

impl FieldValue for Vector3 {
    const KIND: ValueKind = ValueKind::Vector;

    fn from_components(src: &[f64]) -> Self {
        debug_assert_eq!(src.len(), 3);
        Vector3([src[0], src[1], src[2]])
    }

    fn write_components(&self, dst: &mut [f64]) {
        debug_assert_eq!(dst.len(), 3);
        dst.copy_from_slice(&self.0);
    }
}

impl FieldValue for Matrix3 {
    const KIND: ValueKind = ValueKind::Matrix;

    fn from_components(src: &[f64]) -> Self {
        debug_assert_eq!(src.len(), 9);
        let mut out = Matrix3::ZERO;
        for r in 0..3 {
            out.0[r].copy_from_slice(&src[3 * r..3 * r + 3]);
        }
        out
    }

    fn write_components(&self, dst: &mut [f64]) {
        debug_assert_eq!(dst.len(), 9);
        for r in 0..3 {
            dst[3 * r..3 * r + 3].copy_from_slice(&self.0[r]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_component_counts() {
        assert_eq!(ValueKind::Scalar.components(), 1);
        assert_eq!(ValueKind::Vector.components(), 3);
        assert_eq!(ValueKind::Matrix.components(), 9);
    }

    #[test]
    fn vector_arithmetic() {
        let v = Vector3::new(1.0, 2.0, 3.0) * 2.0 + Vector3::new(0.5, 0.0, -1.0);
        assert_eq!(v, Vector3::new(2.5, 4.0, 5.0));
        assert!(Vector3::zero().is_zero());
    }

    #[test]
    fn component_round_trip() {
        let m = Matrix3::from_rows([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]);
        let mut buf = [0.0; 9];
        m.write_components(&mut buf);
        assert_eq!(Matrix3::from_components(&buf), m);

        let v = Vector3::new(-1.0, 0.25, 8.0);
        let mut buf = [0.0; 3];
        v.write_components(&mut buf);
        assert_eq!(Vector3::from_components(&buf), v);
    }
}
