use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::error::ScaleError;

/// Options applied when mapping values through a [`BandScale`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BandScaleOptions {
    /// Position within the band, 0 is the band start and 1 its end
    pub band: Option<f32>,
    /// Constant pixel offset added to every output
    pub range_offset: Option<f32>,
}

/// A band scale divides a continuous range into uniform bands, one per
/// distinct domain value.
///
/// The domain keeps first-occurrence order and drops duplicates, so it can be
/// built directly from a column of categorical values. Commonly used for the
/// categorical axis of bar charts.
#[derive(Debug, Clone)]
pub struct BandScale<D: Debug + Clone + Hash + Eq> {
    domain: IndexSet<D>,
    range: (f32, f32),
    padding_inner: f32,
    padding_outer: f32,
    align: f32,
    round: bool,
    start: f32,
    step: f32,
}

impl<D: Debug + Clone + Hash + Eq> BandScale<D> {
    /// Creates a new band scale from the (possibly repeating) domain values.
    ///
    /// # Defaults
    /// - range: (0.0, 1.0)
    /// - padding_inner: 0.0
    /// - padding_outer: 0.0
    /// - align: 0.5
    /// - round: false
    pub fn try_new(domain: impl IntoIterator<Item = D>) -> Result<Self, ScaleError> {
        let mut this = Self {
            domain: domain.into_iter().collect(),
            range: (0.0, 1.0),
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            round: false,
            start: 0.0,
            step: 0.0,
        };
        this.update_bands()?;
        Ok(this)
    }

    fn update_bands(&mut self) -> Result<(), ScaleError> {
        let n = self.domain.len();
        if n == 0 {
            return Err(ScaleError::EmptyDomain);
        }
        if !self.range.0.is_finite() || !self.range.1.is_finite() {
            return Err(ScaleError::InvalidRange(self.range.0, self.range.1));
        }

        let (start, stop) = self.sorted_range();
        let step = (stop - start)
            / 1.0_f32.max(bandspace(
                n,
                Some(self.padding_inner),
                Some(self.padding_outer),
            ));
        let step = if self.round { step.floor() } else { step };

        let start = start + (stop - start - step * (n as f32 - self.padding_inner)) * self.align;
        let start = if self.round { start.round() } else { start };

        self.start = start;
        self.step = step;
        Ok(())
    }

    fn sorted_range(&self) -> (f32, f32) {
        if self.range.1 < self.range.0 {
            (self.range.1, self.range.0)
        } else {
            (self.range.0, self.range.1)
        }
    }

    fn is_reversed(&self) -> bool {
        self.range.1 < self.range.0
    }

    /// Sets the output range as (start, end).
    ///
    /// The range may be reversed, in which case the first domain value maps to
    /// the band nearest `end`.
    pub fn range(mut self, range: (f32, f32)) -> Result<Self, ScaleError> {
        self.range = range;
        self.update_bands()?;
        Ok(self)
    }

    /// Sets the range and enables rounding of band edges to whole pixels
    pub fn range_round(mut self, range: (f32, f32)) -> Result<Self, ScaleError> {
        self.range = range;
        self.round = true;
        self.update_bands()?;
        Ok(self)
    }

    /// Sets the ratio of each step reserved for blank space between bands, in [0, 1]
    pub fn padding_inner(mut self, padding: f32) -> Result<Self, ScaleError> {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.update_bands()?;
        Ok(self)
    }

    /// Sets the blank space before the first and after the last band, in steps
    pub fn padding_outer(mut self, padding: f32) -> Result<Self, ScaleError> {
        self.padding_outer = padding.max(0.0);
        self.update_bands()?;
        Ok(self)
    }

    pub fn padding(mut self, padding: f32) -> Result<Self, ScaleError> {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.padding_outer = padding.max(0.0);
        self.update_bands()?;
        Ok(self)
    }

    /// Sets how leftover space is distributed: 0 packs bands at the start,
    /// 0.5 centers them, 1 packs them at the end.
    pub fn align(mut self, align: f32) -> Result<Self, ScaleError> {
        self.align = align.clamp(0.0, 1.0);
        self.update_bands()?;
        Ok(self)
    }

    pub fn round(mut self, round: bool) -> Result<Self, ScaleError> {
        self.round = round;
        self.update_bands()?;
        Ok(self)
    }

    /// The distinct domain values in first-occurrence order
    pub fn domain(&self) -> &IndexSet<D> {
        &self.domain
    }

    pub fn get_range(&self) -> (f32, f32) {
        self.range
    }

    pub fn get_padding_inner(&self) -> f32 {
        self.padding_inner
    }

    pub fn get_padding_outer(&self) -> f32 {
        self.padding_outer
    }

    pub fn get_align(&self) -> f32 {
        self.align
    }

    pub fn get_round(&self) -> bool {
        self.round
    }

    /// Width of each band
    pub fn bandwidth(&self) -> f32 {
        let bandwidth = self.step * (1.0 - self.padding_inner);
        if self.round {
            bandwidth.round()
        } else {
            bandwidth
        }
    }

    /// Distance between the starts of adjacent bands
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Start of the band at position `index`, honoring range reversal
    fn band_start(&self, index: usize) -> f32 {
        let n = self.domain.len();
        let position = if self.is_reversed() { n - 1 - index } else { index };
        self.start + self.step * position as f32
    }

    /// Maps a domain value to its band start (plus options). Values outside the
    /// domain map to NaN.
    pub fn scale(&self, value: &D, opts: &BandScaleOptions) -> f32 {
        let Some(index) = self.domain.get_index_of(value) else {
            return f32::NAN;
        };
        let offset = self.bandwidth() * opts.band.unwrap_or(0.0) + opts.range_offset.unwrap_or(0.0);
        self.band_start(index) + offset
    }

    pub fn scale_all<'a>(&self, values: impl IntoIterator<Item = &'a D>, opts: &BandScaleOptions) -> Vec<f32>
    where
        D: 'a,
    {
        values.into_iter().map(|v| self.scale(v, opts)).collect()
    }

    /// Band positions for every domain value, in domain order
    pub fn scale_domain(&self, opts: &BandScaleOptions) -> Vec<f32> {
        self.scale_all(self.domain.iter(), opts)
    }

    /// Maps a range value back to the domain value whose band contains it.
    ///
    /// Returns `None` outside the range and inside padding gaps.
    pub fn invert(&self, value: f32) -> Option<&D> {
        if value.is_nan() {
            return None;
        }
        let (lo, hi) = self.sorted_range();
        if value < lo || value > hi {
            return None;
        }

        let bandwidth = self.bandwidth();
        (0..self.domain.len()).find_map(|index| {
            let start = self.band_start(index);
            if value >= start && value <= start + bandwidth {
                self.domain.get_index(index)
            } else {
                None
            }
        })
    }
}

/// Number of steps a band scale needs for `count` bands and the given padding.
///
/// Inner padding is clamped to [0, 1], outer padding to >= 0, both default to 0.
pub fn bandspace(count: usize, padding_inner: Option<f32>, padding_outer: Option<f32>) -> f32 {
    let padding_inner = padding_inner.unwrap_or(0.0).clamp(0.0, 1.0);
    let padding_outer = padding_outer.unwrap_or(0.0).max(0.0);

    let count = count as f32;
    count - padding_inner + padding_outer * 2.0
}
