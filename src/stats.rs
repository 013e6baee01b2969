use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, ServiceError};
use crate::numbers::NumberSequence;

pub fn mean(numbers: &[f64]) -> Result<f64> {
    if numbers.is_empty() {
        return Err(ServiceError::EmptySequence);
    }
    Ok(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

pub fn median(numbers: &[f64]) -> Result<f64> {
    if numbers.is_empty() {
        return Err(ServiceError::EmptySequence);
    }
    let mut sorted = numbers.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Most frequent value. Candidates are visited in the order they were first
/// seen and only a strictly higher count takes the lead, so ties go to the
/// earliest value and all-unique input yields the first value.
pub fn mode(numbers: &[f64]) -> Result<f64> {
    // (value, count) in first-insertion order
    let mut occurrences: Vec<(f64, usize)> = Vec::new();
    // value key -> position in `occurrences`
    let mut positions: HashMap<u64, usize> = HashMap::with_capacity(numbers.len());

    for &value in numbers {
        let position = *positions.entry(value_key(value)).or_insert_with(|| {
            occurrences.push((value, 0));
            occurrences.len() - 1
        });
        occurrences[position].1 += 1;
    }

    let mut mode = None;
    let mut max_count = 0;
    for (value, count) in occurrences {
        if count > max_count {
            mode = Some(value);
            max_count = count;
        }
    }

    mode.ok_or(ServiceError::EmptySequence)
}

/// Hash key for a finite value. Values equal under `==` share a key, so
/// `-0.0` and `0.0` count together.
fn value_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// The statistic an endpoint computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    Median,
    Mode,
}

impl Statistic {
    pub const ALL: [Statistic; 3] = [Statistic::Mean, Statistic::Median, Statistic::Mode];

    /// Routes match case-insensitively and tolerate one trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        Statistic::ALL
            .iter()
            .copied()
            .find(|statistic| statistic.path().eq_ignore_ascii_case(path))
    }

    pub fn path(self) -> &'static str {
        match self {
            Statistic::Mean => "/mean",
            Statistic::Median => "/median",
            Statistic::Mode => "/mode",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Statistic::Mean => "Mean",
            Statistic::Median => "Median",
            Statistic::Mode => "Mode",
        }
    }

    pub fn compute(self, numbers: &NumberSequence) -> Result<f64> {
        let numbers = numbers.as_slice();
        match self {
            Statistic::Mean => mean(numbers),
            Statistic::Median => median(numbers),
            Statistic::Mode => mode(numbers),
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Render a result the way it appears in a response body, following
/// JavaScript number formatting: no trailing `.0`, no negative zero,
/// `Infinity` for overflow and exponent form outside `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    // `{:e}` gives the shortest digits, e.g. `1.5e-7` or `1e21`
    let exponential = format!("{:e}", value);
    match exponential.split_once('e') {
        Some((digits, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", digits, exponent)
        }
        _ => exponential,
    }
}
