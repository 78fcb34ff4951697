//! Nice tick generation for continuous domains.
//!
//! Tick increments are powers of ten multiplied by 1, 2, or 5, chosen so that
//! roughly `count` ticks cover `[start, stop]`.

// Error thresholds between the 1/2/5/10 increment multipliers
const E10: f32 = 7.071_068; // sqrt(50)
const E5: f32 = 3.162_277_7; // sqrt(10)
const E2: f32 = 1.414_213_5; // sqrt(2)

/// Generate approximately `count` ticks within `[start, stop]`
pub fn ticks(start: f32, stop: f32, count: f32) -> Vec<f32> {
    if count <= 0.0 || count.is_nan() {
        return vec![];
    }

    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };

    if !(i2 >= i1) {
        return vec![];
    }

    let n = (i2 - i1 + 1.0) as usize;
    (0..n)
        .map(|i| {
            let i = i as f32;
            let k = if reverse { i2 - i } else { i1 + i };
            // Negative increments encode 1 / 10^k steps, dividing keeps them exact
            if inc < 0.0 {
                k / -inc
            } else {
                k * inc
            }
        })
        .collect()
}

fn increment_factor(step: f32) -> (f32, f32) {
    let power = step.log10().floor();
    let error = step / 10.0_f32.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    (power, factor)
}

/// Returns `(first_index, last_index, increment)`; a negative increment is the
/// reciprocal of the real step.
fn tick_spec(start: f32, stop: f32, count: f32) -> (f32, f32, f32) {
    let step = (stop - start) / count.max(0.0);
    let (power, factor) = increment_factor(step);

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let temp_inc = 10.0_f32.powf(-power) / factor;
        i1 = (start * temp_inc).round();
        i2 = (stop * temp_inc).round();
        if i1 / temp_inc < start {
            i1 += 1.0;
        }
        if i2 / temp_inc > stop {
            i2 -= 1.0;
        }
        inc = -temp_inc;
    } else {
        inc = 10.0_f32.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && 0.5 <= count && count < 2.0 {
        return tick_spec(start, stop, count * 2.0);
    }

    (i1, i2, inc)
}

/// The increment between ticks for the given range and count.
///
/// Negative results are reciprocals (`-10.0` means a step of `0.1`).
pub fn tick_increment(start: f32, stop: f32, count: f32) -> f32 {
    if !(count > 0.0) {
        return f32::NAN;
    }

    if start == stop {
        return f32::NEG_INFINITY;
    }

    let step = (stop - start) / count.max(0.0);
    if step == 0.0 {
        return f32::NAN;
    }

    let (power, factor) = increment_factor(step);
    if power >= 0.0 {
        10.0_f32.powf(power) * factor
    } else {
        -(10.0_f32.powf(-power)) / factor
    }
}

/// The absolute distance between adjacent ticks
pub fn tick_step(start: f32, stop: f32, count: f32) -> f32 {
    let step0 = (stop - start).abs() / count.max(0.0);
    if !step0.is_finite() || step0 == 0.0 {
        return f32::NAN;
    }
    let (power, factor) = increment_factor(step0);
    10.0_f32.powf(power) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks() {
        assert_eq!(
            ticks(0.0, 1.0, 10.0),
            vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
        );
        assert_eq!(ticks(0.0, 1.0, 5.0), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(ticks(0.0, 1.0, 2.0), vec![0.0, 0.5, 1.0]);
        assert_eq!(ticks(0.0, 1.0, 1.0), vec![0.0, 1.0]);
    }

    #[test]
    fn test_ticks_bar_domains() {
        assert_eq!(
            ticks(0.0, 20.0, 10.0),
            vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0]
        );
        assert_eq!(ticks(0.0, 30.0, 10.0).len(), 16);
        assert_eq!(ticks(0.0, 1000.0, 5.0), vec![0.0, 200.0, 400.0, 600.0, 800.0, 1000.0]);
    }

    #[test]
    fn test_ticks_reversed() {
        assert_eq!(ticks(1.0, 0.0, 2.0), vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_ticks_edge_cases() {
        assert_eq!(ticks(f32::NAN, 1.0, 1.0), Vec::<f32>::new());
        assert_eq!(ticks(0.0, 1.0, f32::NAN), Vec::<f32>::new());
        assert_eq!(ticks(0.0, 1.0, 0.0), Vec::<f32>::new());
        assert_eq!(ticks(0.0, 1.0, -1.0), Vec::<f32>::new());
        assert_eq!(ticks(1.0, 1.0, 10.0), vec![1.0]);
    }

    #[test]
    fn test_tick_increment() {
        assert_eq!(tick_increment(0.0, 20.0, 10.0), 2.0);
        assert_eq!(tick_increment(0.0, 100.0, 10.0), 10.0);
        assert_eq!(tick_increment(0.0, 1.0, 10.0), -10.0);
        assert_eq!(tick_increment(0.0, 1.0, 5.0), -5.0);
        assert!(tick_increment(0.0, 1.0, 0.0).is_nan());
        assert!(tick_increment(1.0, 1.0, 1.0).is_infinite());
    }

    #[test]
    fn test_tick_step() {
        assert_eq!(tick_step(0.0, 20.0, 10.0), 2.0);
        assert_eq!(tick_step(20.0, 0.0, 10.0), 2.0);
        assert_eq!(tick_step(0.0, 30.0, 10.0), 2.0);
        assert!(tick_step(0.0, 0.0, 10.0).is_nan());
    }
}
