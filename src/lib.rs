mod compositions;
mod error;
mod generators;
mod intervals;
mod matrix;
mod postprocess;

pub use compositions::*;
pub use error::*;
pub use generators::*;
pub use intervals::*;
pub use matrix::*;
pub use postprocess::*;

#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod tests {
    use enum_iterator::all;
    use float_cmp::ApproxEq;

    use crate::*;

    #[test]
    fn test_pipeline() -> anyhow::Result<()> {
        init_test_logging();
        let row = Identity(vec![60_i64, 64, 67, 72, 76]).generate()?;
        let forms = canonical_forms(build_matrix(&row)?);
        assert_eq!(forms.prime()[1], vec![56, 60, 63, 68, 72]);

        let tuning = Tuning::default();
        for form in all::<Form>() {
            let freqs = tuning.frequency_matrix(forms.form(form));
            assert_eq!(freqs.len(), row.len());
            assert!(freqs.values().all(|f| *f > 0.0));
        }
        let first = tuning.frequencies(&forms.retrograde_inversion()[0]);
        assert!(first[4].approx_eq(midi_to_frequency(60.0), (1e-9, 4)));
        Ok(())
    }

    #[test]
    fn test_fibonacci_primes_pipeline() -> anyhow::Result<()> {
        let forms = serial_forms(&fibonacci_sequence(1_i64, 8)?)?;
        assert_eq!(forms.prime()[0], vec![1, 1, 2, 3, 5, 8, 13, 21]);
        assert_eq!(filter_primes(&forms.prime()[0]), vec![2, 3, 5, 13]);
        Ok(())
    }

    #[test]
    fn test_invalid_input_surfaces() {
        let err = generate_matrix(&OvertoneSeries { fundamental: 55.0, partial_count: 0 }).unwrap_err();
        assert!(matches!(err, PitchError::InvalidInput(_)));
        let err: anyhow::Error = compositions(2, 3).unwrap_err().into();
        assert!(err.to_string().starts_with("invalid input"));
    }
}
