use std::ops;

use super::{
    approx_eq::ApproxEq,
    index::{Column, Row},
    point::Point,
    tuple::Tuple,
    vector::Vector,
};
use crate::error::{Error, Result};

/// Row-major `R`x`C` grid of doubles.
#[derive(Debug, Clone, Copy)]
pub struct Matrix<const R: usize, const C: usize> {
    data: [[f64; C]; R],
}

pub type Matrix2 = Matrix<2, 2>;
pub type Matrix3 = Matrix<3, 3>;
pub type Matrix4 = Matrix<4, 4>;

impl<const R: usize, const C: usize> Matrix<R, C> {
    pub const fn new(data: [[f64; C]; R]) -> Self {
        Self { data }
    }

    pub const fn zero() -> Self {
        Self::new([[0.; C]; R])
    }

    pub const fn rows(&self) -> usize {
        R
    }

    pub const fn columns(&self) -> usize {
        C
    }

    fn check_bounds(row: Row, column: Column) -> Result<()> {
        if row.value() >= R || column.value() >= C {
            return Err(Error::MatrixIndexOutOfBounds {
                row,
                column,
                rows: R,
                columns: C,
            });
        }
        Ok(())
    }

    pub fn get(&self, row: Row, column: Column) -> Result<f64> {
        Self::check_bounds(row, column)?;
        Ok(self.data[row.value()][column.value()])
    }

    pub fn set(&mut self, row: Row, column: Column, value: f64) -> Result<()> {
        Self::check_bounds(row, column)?;
        self.data[row.value()][column.value()] = value;
        Ok(())
    }

    pub fn transpose(&self) -> Matrix<C, R> {
        let mut res = Matrix::<C, R>::zero();
        for (row, values) in self.data.iter().enumerate() {
            for (column, value) in values.iter().enumerate() {
                res.data[column][row] = *value;
            }
        }
        res
    }
}

impl<const N: usize> Matrix<N, N> {
    pub const IDENTITY: Self = Self::identity();

    pub const fn identity() -> Self {
        let mut data = [[0.; N]; N];
        let mut i = 0;
        while i < N {
            data[i][i] = 1.;
            i += 1;
        }
        Self { data }
    }
}

impl<const N: usize> Default for Matrix<N, N> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Removing one row and one column of a square matrix.
/// Implemented per size, as the result is one smaller in both dimensions.
pub trait Submatrix {
    type Output: Determinant;

    /// Panics if `row` or `column` is out of range.
    fn submatrix(&self, row: Row, column: Column) -> Self::Output;
}

pub trait Determinant {
    fn determinant(&self) -> f64;
}

impl Determinant for Matrix<1, 1> {
    fn determinant(&self) -> f64 {
        self.data[0][0]
    }
}

impl Determinant for Matrix<2, 2> {
    fn determinant(&self) -> f64 {
        self.data[0][0] * self.data[1][1] - self.data[0][1] * self.data[1][0]
    }
}

macro_rules! impl_submatrix {
    ($($n:literal => $m:literal),* $(,)?) => {
        $(
            impl Submatrix for Matrix<$n, $n> {
                type Output = Matrix<$m, $m>;

                fn submatrix(&self, row: Row, column: Column) -> Self::Output {
                    assert!(
                        row.value() < $n && column.value() < $n,
                        "submatrix index ({row}, {column}) out of range for {}x{} matrix",
                        $n,
                        $n
                    );
                    let mut data = [[0.; $m]; $m];
                    let kept_rows = (0..$n).filter(|&r| r != row.value());
                    for (dst_row, src_row) in kept_rows.enumerate() {
                        let kept_columns = (0..$n).filter(|&c| c != column.value());
                        for (dst_column, src_column) in kept_columns.enumerate() {
                            data[dst_row][dst_column] = self.data[src_row][src_column];
                        }
                    }
                    Matrix::new(data)
                }
            }
        )*
    };
}

// cofactor expansion along the first row
macro_rules! impl_expanded_determinant {
    ($($n:literal),* $(,)?) => {
        $(
            impl Determinant for Matrix<$n, $n> {
                fn determinant(&self) -> f64 {
                    Column::range(Column($n))
                        .map(|column| self[(Row(0), column)] * self.cofactor(Row(0), column))
                        .sum()
                }
            }
        )*
    };
}

impl_submatrix!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5);
impl_expanded_determinant!(3, 4, 5, 6);

impl<const N: usize> Matrix<N, N>
where
    Self: Submatrix + Determinant,
{
    pub fn minor(&self, row: Row, column: Column) -> f64 {
        self.submatrix(row, column).determinant()
    }

    /// Minor with its sign flipped when `row + column` is odd.
    pub fn cofactor(&self, row: Row, column: Column) -> f64 {
        let minor = self.minor(row, column);
        if (row.value() + column.value()) % 2 == 1 {
            -minor
        } else {
            minor
        }
    }

    pub fn minors(&self) -> Self {
        self.map_indexed(|row, column| self.minor(row, column))
    }

    pub fn cofactors(&self) -> Self {
        self.map_indexed(|row, column| self.cofactor(row, column))
    }

    fn map_indexed(&self, f: impl Fn(Row, Column) -> f64) -> Self {
        let mut res = Self::zero();
        for row in Row::range(Row(N)) {
            for column in Column::range(Column(N)) {
                res[(row, column)] = f(row, column);
            }
        }
        res
    }

    pub fn invertible(&self) -> bool {
        !self.determinant().approx_eq(&0.)
    }

    /// Adjugate divided by the determinant.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det.approx_eq(&0.) {
            return Err(Error::NonInvertibleMatrix);
        }
        Ok(self.cofactors().transpose() / det)
    }
}

impl<const R: usize, const C: usize> ApproxEq for Matrix<R, C> {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(x, y)| x.approx_eq_epsilon(y, epsilon))
    }
}

impl<const R: usize, const C: usize> PartialEq for Matrix<R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl<const R: usize, const C: usize> ops::Index<(Row, Column)> for Matrix<R, C> {
    type Output = f64;

    fn index(&self, (row, column): (Row, Column)) -> &Self::Output {
        &self.data[row.value()][column.value()]
    }
}

impl<const R: usize, const C: usize> ops::IndexMut<(Row, Column)> for Matrix<R, C> {
    fn index_mut(&mut self, (row, column): (Row, Column)) -> &mut Self::Output {
        &mut self.data[row.value()][column.value()]
    }
}

impl<const R: usize, const K: usize, const C: usize> ops::Mul<&Matrix<K, C>> for &Matrix<R, K> {
    type Output = Matrix<R, C>;

    fn mul(self, rhs: &Matrix<K, C>) -> Self::Output {
        let mut output = Matrix::<R, C>::zero();
        for row in 0..R {
            for column in 0..C {
                output.data[row][column] = (0..K)
                    .map(|k| self.data[row][k] * rhs.data[k][column])
                    .sum();
            }
        }
        output
    }
}

impl<const R: usize, const K: usize, const C: usize> ops::Mul<Matrix<K, C>> for Matrix<R, K> {
    type Output = Matrix<R, C>;

    fn mul(self, rhs: Matrix<K, C>) -> Self::Output {
        &self * &rhs
    }
}

impl<const N: usize> ops::MulAssign<Matrix<N, N>> for Matrix<N, N> {
    fn mul_assign(&mut self, rhs: Matrix<N, N>) {
        *self = *self * rhs;
    }
}

impl<const R: usize, const C: usize> ops::Mul<f64> for Matrix<R, C> {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self.data.iter_mut().flatten().for_each(|x| *x *= rhs);
        self
    }
}

impl<const R: usize, const C: usize> ops::Div<f64> for Matrix<R, C> {
    type Output = Self;

    fn div(mut self, rhs: f64) -> Self::Output {
        self.data.iter_mut().flatten().for_each(|x| *x /= rhs);
        self
    }
}

impl From<Point> for Matrix<4, 1> {
    fn from(p: Point) -> Self {
        Self::new([[p.x()], [p.y()], [p.z()], [p.w()]])
    }
}

impl From<Vector> for Matrix<4, 1> {
    fn from(v: Vector) -> Self {
        Self::new([[v.x()], [v.y()], [v.z()], [v.w()]])
    }
}

/// Multiplies in homogeneous coordinates and drops the resulting `w`,
/// so a vector stays a vector whatever the bottom row holds.
impl<T> ops::Mul<T> for &Matrix<4, 4>
where
    T: Tuple,
{
    type Output = T;

    fn mul(self, rhs: T) -> Self::Output {
        let column = [rhs.x(), rhs.y(), rhs.z(), rhs.w()];
        let row = |r: usize| -> f64 {
            self.data[r]
                .iter()
                .zip(column.iter())
                .map(|(a, b)| a * b)
                .sum()
        };
        T::new(row(0), row(1), row(2))
    }
}

impl<T> ops::Mul<T> for Matrix<4, 4>
where
    T: Tuple,
{
    type Output = T;

    #[allow(clippy::op_ref)]
    fn mul(self, rhs: T) -> Self::Output {
        &self * rhs
    }
}
