use std::fmt::Debug;

use num::{Num, Signed};
use trait_set::trait_set;

use crate::error::{invalid, Result};

trait_set! {
    pub trait PitchValue = Num + Signed + Copy + Debug;
}

pub type Row<T> = Vec<T>;

/// The value mirrored about `pivot`: `pivot + (pivot - value)`.
pub fn reflect<T: PitchValue>(pivot: T, value: T) -> T {
    pivot + (pivot - value)
}

/// Returns `(intervals, reflections)` for `row`, both measured against its first element.
pub fn derive_intervals<T: PitchValue>(row: &[T]) -> Result<(Row<T>, Row<T>)> {
    match row.first() {
        None => invalid("cannot derive intervals from an empty row"),
        Some(&first) => Ok((
            row.iter().map(|v| *v - first).collect(),
            row.iter().map(|v| reflect(first, *v)).collect(),
        )),
    }
}
