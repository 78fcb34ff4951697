use crate::array;
use crate::error::ScaleError;

use super::ContinuousNumericScale;

#[derive(Clone, Debug)]
pub struct LinearNumericScaleConfig {
    pub domain: (f32, f32),
    pub range: (f32, f32),
    pub clamp: bool,
    pub range_offset: Option<f32>,
    pub nice: Option<usize>,
    pub round: bool,
}

impl Default for LinearNumericScaleConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
            range_offset: None,
            nice: None,
            round: false,
        }
    }
}

/// A linear scale that maps numeric input values from a domain to a range.
/// Supports clamping, domain niceing, and tick generation.
///
/// The range may be inverted (start > end), which is how screen-space y axes
/// put the domain minimum at the bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearNumericScale {
    domain_start: f32,
    domain_end: f32,
    range_start: f32,
    range_end: f32,
    clamp: bool,
    range_offset: Option<f32>,
    round: bool,
}

impl LinearNumericScale {
    /// Builds a scale, rejecting non-finite domain or range bounds
    pub fn try_new(config: &LinearNumericScaleConfig) -> Result<Self, ScaleError> {
        let (d0, d1) = config.domain;
        if !d0.is_finite() || !d1.is_finite() {
            return Err(ScaleError::InvalidDomain(d0, d1));
        }
        let (r0, r1) = config.range;
        if !r0.is_finite() || !r1.is_finite() {
            return Err(ScaleError::InvalidRange(r0, r1));
        }

        let this = Self {
            domain_start: d0,
            domain_end: d1,
            range_start: r0,
            range_end: r1,
            clamp: config.clamp,
            range_offset: config.range_offset,
            round: config.round,
        };

        Ok(match config.nice {
            Some(count) => this.nice(Some(count)),
            None => this,
        })
    }

    /// Extends the domain to nice round numbers for better tick selection
    pub fn nice(mut self, count: Option<usize>) -> Self {
        if self.domain_start == self.domain_end {
            return self;
        }

        let (mut start, mut stop) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };

        let count = count.unwrap_or(10) as f32;
        let mut prestep = 0.0;
        let mut max_iter = 10;

        while max_iter > 0 {
            let step = array::tick_increment(start, stop, count);
            if step == prestep {
                break;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = step;
            max_iter -= 1;
        }

        if self.domain_start <= self.domain_end {
            self.domain_start = start;
            self.domain_end = stop;
        } else {
            self.domain_start = stop;
            self.domain_end = start;
        }
        self
    }

    fn is_degenerate(&self) -> bool {
        self.domain_start == self.domain_end || self.range_start == self.range_end
    }

    fn range_extent(&self) -> (f32, f32) {
        if self.range_start <= self.range_end {
            (self.range_start, self.range_end)
        } else {
            (self.range_end, self.range_start)
        }
    }
}

impl ContinuousNumericScale for LinearNumericScale {
    fn domain(&self) -> (f32, f32) {
        (self.domain_start, self.domain_end)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_start, self.range_end)
    }

    fn clamp(&self) -> bool {
        self.clamp
    }

    fn scale(&self, value: f32) -> f32 {
        // Every value collapses onto the range start when there is nothing to interpolate
        if self.is_degenerate() {
            return self.range_start;
        }

        let scale = (self.range_end - self.range_start) / (self.domain_end - self.domain_start);
        let offset = self.range_start - scale * self.domain_start + self.range_offset.unwrap_or(0.0);

        let mut out = scale * value + offset;
        if self.clamp {
            let (lo, hi) = self.range_extent();
            out = out.clamp(lo, hi);
        }
        if self.round {
            out = out.round();
        }
        out
    }

    fn invert(&self, value: f32) -> f32 {
        if self.is_degenerate() {
            return self.domain_start;
        }

        let scale = (self.domain_end - self.domain_start) / (self.range_end - self.range_start);
        let offset = self.domain_start - scale * self.range_start;

        let mut v = value - self.range_offset.unwrap_or(0.0);
        if self.clamp {
            let (lo, hi) = self.range_extent();
            v = v.clamp(lo, hi);
        }
        scale * v + offset
    }

    fn ticks(&self, count: Option<f32>) -> Vec<f32> {
        array::ticks(self.domain_start, self.domain_end, count.unwrap_or(10.0))
    }
}
