// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides the 4x4 matrix type used for world transforms.

use super::vector::{Vec3, Vec4};
use std::ops::Mul;

/// A 4x4 row-major matrix following the row-vector convention (`v' = v * M`).
///
/// This is the layout in which a rendering context reports its world transform:
/// the translation lives in `rows[3]`. Shaders consume matrices in the opposite
/// convention, so the renderer uploads the [`transpose`](Mat4::transpose).
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Mat4 {
    /// The rows of the matrix. `rows[0]` is the first row, and so on.
    pub rows: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ],
    };

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        rows: [Vec4::ZERO; 4],
    };

    /// Creates a new matrix from four row vectors.
    #[inline]
    pub const fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self {
            rows: [r0, r1, r2, r3],
        }
    }

    /// Creates a matrix from a row-major 2D array, `m[row][col]`.
    #[inline]
    pub fn from_array(m: [[f32; 4]; 4]) -> Self {
        Self {
            rows: m.map(|r| Vec4::new(r[0], r[1], r[2], r[3])),
        }
    }

    /// Creates a translation matrix (translation stored in the last row).
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.rows[3] = v.extend(1.0);
        m
    }

    /// Creates a non-uniform scale matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_rows(
            Vec4::new(scale.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, scale.z, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Returns a column of the matrix as a `Vec4`.
    #[inline]
    pub fn get_col(&self, index: usize) -> Vec4 {
        Vec4::new(
            self.rows[0][index],
            self.rows[1][index],
            self.rows[2][index],
            self.rows[3][index],
        )
    }

    /// Returns the element at `rows[row][col]`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.rows[row][col]
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(
            self.get_col(0),
            self.get_col(1),
            self.get_col(2),
            self.get_col(3),
        )
    }

    /// Transforms a point (`w = 1`) using the row-vector convention.
    #[inline]
    pub fn transform_point3(&self, p: Vec3) -> Vec3 {
        let v = p.extend(1.0);
        Vec3::new(
            v.dot(self.get_col(0)),
            v.dot(self.get_col(1)),
            v.dot(self.get_col(2)),
        )
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat4` (`self` is applied first).
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        let rhs_cols = [rhs.get_col(0), rhs.get_col(1), rhs.get_col(2), rhs.get_col(3)];
        Self {
            rows: self.rows.map(|row| {
                Vec4::new(
                    row.dot(rhs_cols[0]),
                    row.dot(rhs_cols[1]),
                    row.dot(rhs_cols[2]),
                    row.dot(rhs_cols[3]),
                )
            }),
        }
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Mat4 {
        Mat4::from_array([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ])
    }

    #[test]
    fn test_transpose_swaps_rows_and_columns() {
        let m = sample();
        let t = m.transpose();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(t.get(j, i), m.get(i, j));
            }
        }
        assert_eq!(t.rows[0], Vec4::new(1.0, 5.0, 9.0, 13.0));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_identity_is_neutral() {
        let m = sample();
        assert_eq!(m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn test_translation_lives_in_last_row() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.rows[3], Vec4::new(1.0, 2.0, 3.0, 1.0));
        let p = m.transform_point3(Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.y, 3.0);
        assert_relative_eq!(p.z, 4.0);
    }

    #[test]
    fn test_scale_then_translate_order() {
        let m = Mat4::from_scale(Vec3::new(2.0, 2.0, 2.0))
            * Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let p = m.transform_point3(Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(p.x, 3.0);
        assert_relative_eq!(p.y, 2.0);
        assert_relative_eq!(p.z, 2.0);
    }
}
