// Serial matrices built from a seed row.
//
// Row `i` of the matrix is the seed transposed so that it starts on the
// reflection of seed element `i` about the first element. Row 0 is the seed
// itself and column 0 holds the reflections. The four canonical forms are
// views of that grid: rows (prime), columns (inversion), and both with the
// row order reversed.

use std::ops::Index;

use enum_iterator::{all, Sequence};
use float_cmp::{ApproxEq, F64Margin};
use log::debug;

use crate::error::{invalid, Result};
use crate::intervals::{derive_intervals, PitchValue, Row};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Matrix<T> {
    rows: Vec<Row<T>>,
}

impl<T> Matrix<T> {
    /// Fails unless every row has the same length.
    pub fn from_rows(rows: Vec<Row<T>>) -> Result<Self> {
        if let Some(first) = rows.first() {
            let width = first.len();
            if let Some(i) = rows.iter().position(|r| r.len() != width) {
                return invalid(format!(
                    "row {i} has {} values, expected {width}",
                    rows[i].len()
                ));
            }
        }
        Ok(Matrix { rows })
    }

    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row<T>> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row<T>> {
        self.rows.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().flatten()
    }
}

impl<T: Copy> Matrix<T> {
    pub fn get(&self, row: usize, column: usize) -> Option<T> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    pub fn column(&self, column: usize) -> Option<Row<T>> {
        if column < self.width() {
            Some(self.rows.iter().map(|r| r[column]).collect())
        } else {
            None
        }
    }

    pub fn transposed(&self) -> Self {
        Matrix {
            rows: (0..self.width()).filter_map(|j| self.column(j)).collect(),
        }
    }

    /// Reverses the order of the rows. Each row keeps its own order.
    pub fn reversed(&self) -> Self {
        Matrix {
            rows: self.rows.iter().rev().cloned().collect(),
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(&self, mut f: F) -> Matrix<U> {
        Matrix {
            rows: self
                .rows
                .iter()
                .map(|r| r.iter().map(|v| f(*v)).collect())
                .collect(),
        }
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = Row<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<'a> ApproxEq for &'a Matrix<f64> {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.len() == other.len()
            && self.rows.iter().zip(other.rows.iter()).all(|(a, b)| {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(&x, &y)| x.approx_eq(y, margin))
            })
    }
}

/// `matrix[i][j] = reflections[i] + intervals[j]`, giving an `n x n` grid whose row 0 is `row`.
pub fn build_matrix<T: PitchValue>(row: &[T]) -> Result<Matrix<T>> {
    let (intervals, reflections) = derive_intervals(row)?;
    let rows = reflections
        .iter()
        .map(|start| intervals.iter().map(|step| *start + *step).collect())
        .collect();
    debug!("built {0}x{0} matrix from {row:?}", row.len());
    Ok(Matrix { rows })
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Sequence)]
pub enum Form {
    Prime,
    Inversion,
    Retrograde,
    RetrogradeInversion,
}

impl Form {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Form::Prime => "P",
            Form::Inversion => "I",
            Form::Retrograde => "R",
            Form::RetrogradeInversion => "RI",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalForms<T> {
    prime: Matrix<T>,
    inversion: Matrix<T>,
    retrograde: Matrix<T>,
    retrograde_inversion: Matrix<T>,
}

impl<T: Copy> CanonicalForms<T> {
    pub fn new(matrix: Matrix<T>) -> Self {
        let inversion = matrix.transposed();
        CanonicalForms {
            retrograde: matrix.reversed(),
            retrograde_inversion: inversion.reversed(),
            prime: matrix,
            inversion,
        }
    }

    pub fn form(&self, form: Form) -> &Matrix<T> {
        match form {
            Form::Prime => &self.prime,
            Form::Inversion => &self.inversion,
            Form::Retrograde => &self.retrograde,
            Form::RetrogradeInversion => &self.retrograde_inversion,
        }
    }

    pub fn prime(&self) -> &Matrix<T> {
        &self.prime
    }

    pub fn inversion(&self) -> &Matrix<T> {
        &self.inversion
    }

    pub fn retrograde(&self) -> &Matrix<T> {
        &self.retrograde
    }

    pub fn retrograde_inversion(&self) -> &Matrix<T> {
        &self.retrograde_inversion
    }

    pub fn iter(&self) -> impl Iterator<Item = (Form, &Matrix<T>)> {
        all::<Form>().map(move |f| (f, self.form(f)))
    }
}

pub fn canonical_forms<T: Copy>(matrix: Matrix<T>) -> CanonicalForms<T> {
    CanonicalForms::new(matrix)
}

pub fn serial_forms<T: PitchValue>(row: &[T]) -> Result<CanonicalForms<T>> {
    build_matrix(row).map(CanonicalForms::new)
}
