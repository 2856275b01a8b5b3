//! Peak envelope computation
//!
//! Reduces a sample window to one (min, max) pair per output column. At
//! most zoom levels many samples share a pixel column; keeping the extrema
//! preserves transients that single-sample picking would lose, while
//! drawing every sample would be wasted work.
//!
//! Pairs are seeded at 0.0, so silent and out-of-range windows reduce to a
//! flat (0.0, 0.0) instead of an undefined value. With min <= 0 <= max the
//! envelope always touches the center line.

use frutilla_core::Sample;

/// Samples consumed per column: `max(1, floor(visible / columns))`.
pub fn column_step(visible: usize, columns: usize) -> usize {
    if columns == 0 {
        return 1;
    }
    1.max(visible / columns)
}

/// Per-column (min, max) reduction of a visible window.
///
/// Column `x` covers `[scroll + floor(x/columns * visible), .. + step)`,
/// truncated at the end of the data. Always returns exactly `columns`
/// pairs - columns that fall entirely outside the data stay at the flat
/// (0.0, 0.0) seed.
pub fn column_peaks(
    samples: &[Sample],
    scroll: usize,
    visible: usize,
    columns: usize,
) -> Vec<(f32, f32)> {
    let step = column_step(visible, columns);
    let mut peaks = Vec::with_capacity(columns);

    for x in 0..columns {
        let start = scroll + (x as f64 / columns as f64 * visible as f64).floor() as usize;
        let mut min = 0.0f32;
        let mut max = 0.0f32;

        if start < samples.len() {
            let end = (start + step).min(samples.len());
            for &sample in &samples[start..end] {
                if sample < min {
                    min = sample;
                }
                if sample > max {
                    max = sample;
                }
            }
        }

        peaks.push((min, max));
    }

    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 44100 samples alternating between +0.8 and -0.6
    fn make_square(len: usize) -> Vec<Sample> {
        (0..len)
            .map(|i| if i % 2 == 0 { 0.8 } else { -0.6 })
            .collect()
    }

    #[test]
    fn test_column_step_full_view() {
        assert_eq!(column_step(44100, 200), 220);
        assert_eq!(column_step(100, 200), 1, "Step floors at 1 when zoomed in");
        assert_eq!(column_step(0, 200), 1);
        assert_eq!(column_step(44100, 0), 1);
    }

    #[test]
    fn test_exact_column_count() {
        let samples = make_square(44100);
        let peaks = column_peaks(&samples, 0, 44100, 200);
        assert_eq!(peaks.len(), 200, "One pair per output column");
    }

    #[test]
    fn test_peaks_capture_extrema() {
        let samples = make_square(44100);
        let peaks = column_peaks(&samples, 0, 44100, 200);
        for (i, &(min, max)) in peaks.iter().enumerate() {
            assert!(
                (max - 0.8).abs() < 1e-6,
                "Column {} should see the positive peak, got {}",
                i,
                max
            );
            assert!((min + 0.6).abs() < 1e-6);
        }
    }

    #[test]
    fn test_silence_reduces_to_flat_pairs() {
        let samples = vec![0.0; 1000];
        let peaks = column_peaks(&samples, 0, 1000, 50);
        assert!(peaks.iter().all(|&p| p == (0.0, 0.0)));
    }

    #[test]
    fn test_positive_only_signal_keeps_zero_floor() {
        let samples = vec![0.5; 1000];
        let peaks = column_peaks(&samples, 0, 1000, 10);
        for &(min, max) in &peaks {
            assert_eq!(min, 0.0, "Seed keeps the envelope anchored at center");
            assert_eq!(max, 0.5);
        }
    }

    #[test]
    fn test_out_of_range_window_is_flat() {
        let samples = vec![1.0; 100];
        let peaks = column_peaks(&samples, 500, 1000, 10);
        assert_eq!(peaks.len(), 10);
        assert!(
            peaks.iter().all(|&p| p == (0.0, 0.0)),
            "Columns past the end of the data stay flat"
        );
    }

    #[test]
    fn test_window_truncates_at_data_end() {
        // Visible window runs past the data: later columns are flat,
        // earlier ones still reduce what exists.
        let mut samples = vec![0.0; 100];
        samples[10] = 0.9;
        let peaks = column_peaks(&samples, 0, 400, 40);
        assert_eq!(peaks[1], (0.0, 0.9), "Sample 10 lands in column 1");
        assert!(peaks[20..].iter().all(|&p| p == (0.0, 0.0)));
    }

    #[test]
    fn test_zero_columns_yields_empty() {
        let samples = vec![0.5; 100];
        assert!(column_peaks(&samples, 0, 100, 0).is_empty());
    }
}
