//! Value-axis ranges and tick placement.

use crate::chart::Scale;

/// Preferred number of tick intervals on a value axis.
pub const TARGET_TICKS: usize = 5;

/// Resolved numeric range of one value axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAxis {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl ValueAxis {
    /// Fit an axis to `values`, honoring the scale's fixed bounds and
    /// begin-at-zero flag.
    pub fn fit(scale: Option<&Scale>, values: impl IntoIterator<Item = f64>) -> Self {
        let (mut lo, mut hi) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if lo > hi {
            (lo, hi) = (0.0, 1.0);
        }

        let fixed_min = scale.and_then(|s| s.min);
        let fixed_max = scale.and_then(|s| s.max);
        if scale.is_some_and(|s| s.begin_at_zero) {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        if let Some(min) = fixed_min {
            lo = min;
        }
        if let Some(max) = fixed_max {
            hi = max;
        }
        if (hi - lo).abs() < f64::EPSILON {
            let pad = if lo.abs() < f64::EPSILON { 1.0 } else { lo.abs() * 0.1 };
            if fixed_min.is_none() {
                lo -= pad;
            }
            hi += pad;
        }

        let step = nice_step(hi - lo, TARGET_TICKS);
        if fixed_min.is_none() {
            lo = (lo / step).floor() * step;
        }
        if fixed_max.is_none() {
            hi = (hi / step).ceil() * step;
        }

        Self {
            min: lo,
            max: hi,
            ticks: ticks_between(lo, hi, step),
        }
    }

    /// Position of `value` within the axis as a fraction in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// A 1/2/5 × 10^n step that splits `span` into about `target` intervals.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Tick counts are tiny
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10_f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    nice * magnitude
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)] // Bounded by the tick count
fn ticks_between(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let first = (lo / step - 1e-9).ceil();
    let last = (hi / step + 1e-9).floor();
    if last < first {
        return vec![lo, hi];
    }
    let count = (last - first) as usize;
    (0..=count)
        .map(|i| {
            let value = (first + i as f64) * step;
            // Strip float noise such as 0.30000000000000004
            (value / step).round() * step
        })
        .collect()
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
