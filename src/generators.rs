use log::debug;

use crate::error::{invalid, Result};
use crate::intervals::{PitchValue, Row};
use crate::matrix::{build_matrix, Matrix};

/// A source of seed rows for the matrix pipeline.
pub trait RowGenerator {
    type Value: PitchValue;

    fn generate(&self) -> Result<Row<Self::Value>>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Identity<T>(pub Row<T>);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OvertoneSeries {
    pub fundamental: f64,
    pub partial_count: usize,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UndertoneSeries {
    pub fundamental: f64,
    pub partial_count: usize,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fibonacci<T> {
    pub seed: T,
    pub length: usize,
}

impl<T: PitchValue> RowGenerator for Identity<T> {
    type Value = T;

    fn generate(&self) -> Result<Row<T>> {
        Ok(identity(&self.0))
    }
}

impl RowGenerator for OvertoneSeries {
    type Value = f64;

    fn generate(&self) -> Result<Row<f64>> {
        overtone_series(self.fundamental, self.partial_count)
    }
}

impl RowGenerator for UndertoneSeries {
    type Value = f64;

    fn generate(&self) -> Result<Row<f64>> {
        undertone_series(self.fundamental, self.partial_count)
    }
}

impl<T: PitchValue> RowGenerator for Fibonacci<T> {
    type Value = T;

    fn generate(&self) -> Result<Row<T>> {
        fibonacci_sequence(self.seed, self.length)
    }
}

pub fn generate_matrix<G: RowGenerator>(generator: &G) -> Result<Matrix<G::Value>> {
    build_matrix(&generator.generate()?)
}

pub fn identity<T: Clone>(row: &[T]) -> Row<T> {
    row.to_vec()
}

fn check_partial_count(partial_count: usize) -> Result<()> {
    if partial_count < 1 {
        invalid("partial count must be at least 1")
    } else {
        Ok(())
    }
}

fn check_fundamental(fundamental: f64) -> Result<()> {
    if fundamental <= 0.0 {
        invalid(format!("fundamental must be positive, got {fundamental}"))
    } else {
        Ok(())
    }
}

/// Partials `1..=partial_count` above `fundamental`. A zero fundamental is accepted.
pub fn overtone_series(fundamental: f64, partial_count: usize) -> Result<Row<f64>> {
    check_partial_count(partial_count)?;
    Ok((1..=partial_count).map(|p| fundamental * p as f64).collect())
}

pub fn undertone_series(fundamental: f64, partial_count: usize) -> Result<Row<f64>> {
    check_partial_count(partial_count)?;
    check_fundamental(fundamental)?;
    Ok((1..=partial_count).map(|p| fundamental / p as f64).collect())
}

/// Row `i` is the overtone series of the `i`th undertone, so `m[i][j] = fundamental / (i+1) * (j+1)`.
pub fn overtone_matrix(fundamental: f64, partial_count: usize) -> Result<Matrix<f64>> {
    let rows = undertone_series(fundamental, partial_count)?
        .into_iter()
        .map(|undertone| overtone_series(undertone, partial_count))
        .collect::<Result<Vec<_>>>()?;
    debug!("built {partial_count}x{partial_count} overtone matrix on {fundamental}");
    Matrix::from_rows(rows)
}

/// `a, b, a + b, ...` truncated to `length` terms. Only emitted terms are ever summed.
pub fn fibonacci_from<T: PitchValue>(a: T, b: T, length: usize) -> Result<Row<T>> {
    if length < 1 {
        return invalid("fibonacci length must be at least 1");
    }
    let mut seq = Vec::with_capacity(length);
    seq.push(a);
    if length > 1 {
        seq.push(b);
    }
    while seq.len() < length {
        let next = seq[seq.len() - 2] + seq[seq.len() - 1];
        seq.push(next);
    }
    Ok(seq)
}

/// Starts from `(seed, seed)`, or from `(0, 1)` when `seed` is zero.
pub fn fibonacci_sequence<T: PitchValue>(seed: T, length: usize) -> Result<Row<T>> {
    if seed.is_zero() {
        fibonacci_from(T::zero(), T::one(), length)
    } else {
        fibonacci_from(seed, seed, length)
    }
}

pub fn fibonacci_matrix<T: PitchValue>(seed: T, length: usize) -> Result<Matrix<T>> {
    let rows = fibonacci_sequence(seed, length)?
        .into_iter()
        .map(|term| fibonacci_sequence(term, length))
        .collect::<Result<Vec<_>>>()?;
    debug!("built {length}x{length} fibonacci matrix from seed {seed:?}");
    Matrix::from_rows(rows)
}
