//! Growth analysis of the measured running times.

use crate::benchmark::Measurements;

/// Exponential fit `seconds ≈ a * factor^n` of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Growth {
    /// Multiplier of the running time per unit increase of `n`.
    pub factor: f64,
    /// Coefficient of determination of the fit in log space.
    pub r_squared: f64,
}

impl Growth {
    /// Fits `ln(seconds)` against `n` by ordinary least squares.
    ///
    /// Samples with a zero duration carry no information in log space and are skipped. Returns
    /// `None` unless at least two samples with distinct sizes remain.
    pub fn fit(measurements: &Measurements) -> Option<Growth> {
        let (xs, ys): (Vec<f64>, Vec<f64>) = measurements
            .rows()
            .filter(|&(_, _, seconds)| seconds > 0.0)
            .map(|(n, _, seconds)| (n as f64, seconds.ln()))
            .unzip();

        if xs.len() < 2 {
            return None;
        }

        let len = xs.len() as f64;
        let x_bar = xs.iter().sum::<f64>() / len;
        let y_bar = ys.iter().sum::<f64>() / len;

        let mut sxy = 0.;
        let mut sxx = 0.;
        for (&x, &y) in xs.iter().zip(&ys) {
            sxy += (x - x_bar) * (y - y_bar);
            sxx += (x - x_bar).powi(2);
        }
        if sxx == 0. {
            return None;
        }

        let slope = sxy / sxx;
        let intercept = y_bar - slope * x_bar;

        let mut ss_res = 0.;
        let mut ss_tot = 0.;
        for (&x, &y) in xs.iter().zip(&ys) {
            ss_res += (y - (intercept + slope * x)).powi(2);
            ss_tot += (y - y_bar).powi(2);
        }
        let r_squared = if ss_tot == 0. { 1. } else { 1. - ss_res / ss_tot };

        Some(Growth {
            factor: slope.exp(),
            r_squared,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    fn measurements(rows: &[(u64, f64)]) -> Measurements {
        let mut m = Measurements::new();
        for &(n, seconds) in rows {
            m.push(n, 0, seconds);
        }
        m
    }

    #[test]
    fn recovers_exact_exponential() {
        let rows: Vec<_> = (10..=30)
            .step_by(2)
            .map(|n| (n, 1e-9 * 1.618_f64.powi(n as i32)))
            .collect();
        let growth = Growth::fit(&measurements(&rows)).unwrap();
        assert_relative_eq!(growth.factor, 1.618, epsilon = 1e-9);
        assert_relative_eq!(growth.r_squared, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn doubling_gives_factor_two() {
        let growth = Growth::fit(&measurements(&[(1, 1.0), (2, 2.0), (3, 4.0)])).unwrap();
        assert_relative_eq!(growth.factor, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_durations_are_skipped() {
        let growth = Growth::fit(&measurements(&[(0, 0.0), (1, 1.0), (2, 3.0)])).unwrap();
        assert_relative_eq!(growth.factor, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn too_few_samples() {
        assert!(Growth::fit(&measurements(&[])).is_none());
        assert!(Growth::fit(&measurements(&[(10, 1.0)])).is_none());
        assert!(Growth::fit(&measurements(&[(10, 0.0), (12, 0.0)])).is_none());
        assert!(Growth::fit(&measurements(&[(10, 1.0), (10, 2.0)])).is_none());
    }
}
