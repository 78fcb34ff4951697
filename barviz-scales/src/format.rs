//! Fixed-precision tick label formatting with thousands grouping.

use numfmt::{Formatter, Precision};

use crate::array::tick_step;

/// Formats numeric tick values into labels
pub trait NumberFormatter: std::fmt::Debug {
    fn format(&self, values: &[f32]) -> Vec<String>;
}

/// Formats every tick with the number of decimals implied by the tick step,
/// so that a step of 0.5 yields `"0.0"`, `"0.5"`, ... and a step of 2 yields
/// `"0"`, `"2"`, ...
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickFormatter {
    pub precision: usize,
    pub grouping: bool,
}

impl TickFormatter {
    /// Formatter for the ticks of `[start, stop]` divided into about `count` steps
    pub fn for_domain(start: f32, stop: f32, count: f32) -> Self {
        Self {
            precision: precision_for_step(tick_step(start, stop, count)),
            grouping: true,
        }
    }
}

impl Default for TickFormatter {
    fn default() -> Self {
        Self {
            precision: 0,
            grouping: true,
        }
    }
}

impl NumberFormatter for TickFormatter {
    fn format(&self, values: &[f32]) -> Vec<String> {
        values
            .iter()
            .map(|v| format_fixed(*v, self.precision, self.grouping))
            .collect()
    }
}

/// Number of decimals needed to distinguish ticks `step` apart
pub fn precision_for_step(step: f32) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    // Round before flooring so 0.1 stored as 0.099999... still gives one decimal
    let exponent = (step.log10() * 1e4).round() / 1e4;
    (-exponent.floor()).max(0.0) as usize
}

/// Formats `value` with exactly `precision` decimals, grouping thousands with
/// `,` when `grouping` is set
pub fn format_fixed(value: f32, precision: usize, grouping: bool) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let precision = precision.min(u8::MAX as usize) as u8;

    // Rounded in f64 so the f32 representation error never leaks into the label
    let scale = 10f64.powi(precision as i32);
    let rounded = (value as f64 * scale).round() / scale;
    // "-0" and "-0.00" read as zero
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    let mut formatter = if grouping {
        match Formatter::new().separator(',') {
            Ok(formatter) => formatter,
            Err(_) => Formatter::new(),
        }
    } else {
        Formatter::new()
    }
    .precision(Precision::Decimals(precision));

    let mut label = formatter.fmt2(rounded).to_string();
    pad_decimals(&mut label, precision as usize);
    label
}

/// Restores trailing zeros trimmed by the formatter so labels line up
fn pad_decimals(label: &mut String, precision: usize) {
    if precision == 0 {
        return;
    }
    let decimals = match label.find('.') {
        Some(dot) => label.len() - dot - 1,
        None => {
            label.push('.');
            0
        }
    };
    for _ in decimals..precision {
        label.push('0');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_for_step() {
        assert_eq!(precision_for_step(2.0), 0);
        assert_eq!(precision_for_step(10.0), 0);
        assert_eq!(precision_for_step(0.5), 1);
        assert_eq!(precision_for_step(0.1), 1);
        assert_eq!(precision_for_step(0.02), 2);
        assert_eq!(precision_for_step(f32::NAN), 0);
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(20.0, 0, true), "20");
        assert_eq!(format_fixed(2.5, 1, true), "2.5");
        assert_eq!(format_fixed(1234567.0, 0, true), "1,234,567");
        assert_eq!(format_fixed(-1500.0, 0, true), "-1,500");
        assert_eq!(format_fixed(1500.0, 0, false), "1500");
        assert_eq!(format_fixed(-0.0, 1, true), "0.0");
        assert_eq!(format_fixed(-0.01, 1, true), "0.0");
    }

    #[test]
    fn test_format_fixed_keeps_trailing_zeros() {
        assert_eq!(format_fixed(0.7, 1, true), "0.7");
        assert_eq!(format_fixed(1.0, 1, true), "1.0");
        assert_eq!(format_fixed(2.5, 2, true), "2.50");
        assert_eq!(format_fixed(1500.0, 1, true), "1,500.0");
    }

    #[test]
    fn test_tick_formatter_for_domain() {
        let formatter = TickFormatter::for_domain(0.0, 1.0, 10.0);
        assert_eq!(formatter.format(&[0.0, 0.5, 1.0]), vec!["0.0", "0.5", "1.0"]);

        let formatter = TickFormatter::for_domain(0.0, 2000.0, 10.0);
        assert_eq!(formatter.format(&[0.0, 2000.0]), vec!["0", "2,000"]);
    }
}
