use bare_metal_modulo::ModNumC;
use log::debug;
use num::traits::AsPrimitive;
use num::{Integer, PrimInt};

use crate::intervals::Row;
use crate::matrix::Matrix;

pub const A440: f64 = 440.0;
pub const NOTES_PER_OCTAVE: i64 = 12;
pub const USIZE_NOTES_PER_OCTAVE: usize = NOTES_PER_OCTAVE as usize;

pub type PitchClass = ModNumC<usize, USIZE_NOTES_PER_OCTAVE>;

/// Equal-temperament tuning anchored at `reference_hz` on `reference_note`.
///
/// The default anchors 440/32 Hz on note 9, which is the same mapping as
/// 440 Hz on note 69 ([`Tuning::a4`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tuning {
    reference_hz: f64,
    reference_note: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::new(A440 / 32.0, 9.0)
    }
}

impl Tuning {
    pub fn new(reference_hz: f64, reference_note: f64) -> Self {
        Tuning {reference_hz, reference_note}
    }

    pub fn a4() -> Self {
        Tuning::new(A440, 69.0)
    }

    pub fn reference_hz(&self) -> f64 {self.reference_hz}

    pub fn reference_note(&self) -> f64 {self.reference_note}

    pub fn frequency(&self, note: f64) -> f64 {
        self.reference_hz * 2.0_f64.powf((note - self.reference_note) / NOTES_PER_OCTAVE as f64)
    }

    pub fn frequencies<T: AsPrimitive<f64>>(&self, row: &[T]) -> Row<f64> {
        row.iter().map(|n| self.frequency(n.as_())).collect()
    }

    pub fn frequency_matrix<T: AsPrimitive<f64>>(&self, matrix: &Matrix<T>) -> Matrix<f64> {
        debug!("converting {}x{} matrix to frequencies", matrix.len(), matrix.width());
        matrix.map(|n| self.frequency(n.as_()))
    }
}

pub fn midi_to_frequency(note: f64) -> f64 {
    Tuning::default().frequency(note)
}

pub fn pitch_class(note: i64) -> PitchClass {
    ModNumC::new(note.mod_floor(&NOTES_PER_OCTAVE) as usize)
}

pub fn pitch_classes(row: &[i64]) -> Row<PitchClass> {
    row.iter().map(|n| pitch_class(*n)).collect()
}

impl Matrix<i64> {
    pub fn pitch_classes(&self) -> Matrix<PitchClass> {
        self.map(pitch_class)
    }
}

/// Negative values are never prime.
pub fn is_prime<T: PrimInt>(value: T) -> bool {
    match value.to_u64() {
        Some(n) if n >= 2 => (2..).take_while(|d| *d <= n / *d).all(|d| n % d != 0),
        _ => false,
    }
}

/// Keeps the prime elements in their original order, duplicates included.
pub fn filter_primes<T: PrimInt>(values: &[T]) -> Row<T> {
    values.iter().copied().filter(|v| is_prime(*v)).collect()
}

pub fn largest_prime_factor(value: u64) -> Option<u64> {
    if value < 2 {
        return None;
    }
    let mut remaining = value;
    let mut largest = 1;
    let mut divisor = 2;
    while divisor <= remaining / divisor {
        while remaining % divisor == 0 {
            largest = divisor;
            remaining /= divisor;
        }
        divisor += 1;
    }
    Some(if remaining > 1 {remaining} else {largest})
}
