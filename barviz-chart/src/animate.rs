use barviz_common::time::Duration;
use barviz_common::types::RgbaColor;
use barviz_common::value::ScalarOrArray;
use barviz_scenegraph::marks::rect::SceneRectMark;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::canvas::{DrawingSurface, MarkHandle};
use crate::config::AnimationConfig;
use crate::data::FieldValue;
use crate::error::BarChartError;
use crate::geometry::PlottingArea;
use crate::scales::ChartScales;

/// Timing curve applied to transition progress
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    CubicInOut,
    QuadOut,
}

impl Easing {
    /// Maps normalized time in `[0, 1]` to eased progress in `[0, 1]`
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    0.5 * u * u * u + 1.0
                }
            }
            Easing::QuadOut => t * (2.0 - t),
        }
    }
}

/// Geometry of one bar at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarFrame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BarFrame {
    pub fn lerp(&self, to: &BarFrame, t: f32) -> BarFrame {
        let mix = |a: f32, b: f32| if a == b { a } else { a + (b - a) * t };
        BarFrame {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            width: mix(self.width, to.width),
            height: mix(self.height, to.height),
        }
    }
}

/// Baseline to settled animation of a single bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarTransition {
    pub baseline: BarFrame,
    pub settled: BarFrame,
    pub duration: Duration,
    pub easing: Easing,
}

impl BarTransition {
    /// Eased progress after `elapsed`. A zero duration is complete immediately.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        self.easing
            .apply(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    /// Baseline before any time has passed, even when the settled geometry is NaN
    pub fn frame_at(&self, elapsed: Duration) -> BarFrame {
        if elapsed >= self.duration {
            return self.settled;
        }
        if elapsed.is_zero() {
            return self.baseline;
        }
        self.baseline.lerp(&self.settled, self.progress(elapsed))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Transitions for every rect of one rect mark, index aligned with the mark
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RectTransition {
    pub bars: Vec<BarTransition>,
}

impl RectTransition {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn duration(&self) -> Duration {
        self.bars
            .iter()
            .map(|bar| bar.duration)
            .max()
            .unwrap_or_default()
    }

    pub fn frames_at(&self, elapsed: Duration) -> Vec<BarFrame> {
        self.bars.iter().map(|bar| bar.frame_at(elapsed)).collect()
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.bars.iter().all(|bar| bar.is_finished(elapsed))
    }
}

/// Writes `frames` into the geometry channels of `mark`
pub fn apply_frames(mark: &mut SceneRectMark, frames: &[BarFrame]) {
    mark.len = frames.len() as u32;
    mark.x = ScalarOrArray::new_array(frames.iter().map(|f| f.x).collect());
    mark.y = ScalarOrArray::new_array(frames.iter().map(|f| f.y).collect());
    mark.width = ScalarOrArray::new_array(frames.iter().map(|f| f.width).collect());
    mark.height = ScalarOrArray::new_array(frames.iter().map(|f| f.height).collect());
}

/// Rect mark holding one bar per frame
pub fn make_bar_mark(frames: &[BarFrame], fill: RgbaColor) -> SceneRectMark {
    let mut mark = SceneRectMark {
        name: "bars".to_string(),
        clip: false,
        fill: fill.into(),
        ..Default::default()
    };
    apply_frames(&mut mark, frames);
    mark
}

/// Binds records to bars and grows them from the zero baseline.
///
/// Bars are keyed by array position. Horizontal geometry is final on enter,
/// only `y` and `height` move during the transition.
#[derive(Debug, Clone)]
pub struct BarAnimator<'a> {
    scales: &'a ChartScales,
    area: PlottingArea,
    animation: AnimationConfig,
    fill: RgbaColor,
}

impl<'a> BarAnimator<'a> {
    pub fn new(
        scales: &'a ChartScales,
        area: PlottingArea,
        animation: AnimationConfig,
        fill: RgbaColor,
    ) -> Self {
        Self {
            scales,
            area,
            animation,
            fill,
        }
    }

    /// Zero-height bars resting on the bottom edge
    pub fn baseline_frames(&self, x_values: &[FieldValue]) -> Vec<BarFrame> {
        let bandwidth = self.scales.x.bandwidth();
        x_values
            .iter()
            .map(|x| BarFrame {
                x: self.scales.x_position(x),
                y: self.area.chart_height,
                width: bandwidth,
                height: 0.0,
            })
            .collect()
    }

    /// Final bar geometry. Non-numeric values give NaN geometry.
    pub fn settled_frames(&self, x_values: &[FieldValue], y_values: &[FieldValue]) -> Vec<BarFrame> {
        self.baseline_frames(x_values)
            .into_iter()
            .zip(y_values)
            .map(|(baseline, value)| {
                let y = self.scales.y_position(value);
                BarFrame {
                    y,
                    height: self.area.chart_height - y,
                    ..baseline
                }
            })
            .collect()
    }

    pub fn transition(&self, baseline: &[BarFrame], settled: &[BarFrame]) -> RectTransition {
        let duration = self.animation.duration();
        RectTransition {
            bars: baseline
                .iter()
                .zip(settled)
                .map(|(baseline, settled)| BarTransition {
                    baseline: *baseline,
                    settled: *settled,
                    duration,
                    easing: self.animation.easing,
                })
                .collect(),
        }
    }

    /// Appends the baseline bars to `surface` and starts their transition.
    ///
    /// Returns the handle of the appended mark and the bars in their settled
    /// state.
    pub fn animate<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        x_values: &[FieldValue],
        y_values: &[FieldValue],
    ) -> Result<(MarkHandle, SceneRectMark), BarChartError> {
        let baseline = self.baseline_frames(x_values);
        let settled = self.settled_frames(x_values, y_values);
        for (i, frame) in settled.iter().enumerate() {
            log::trace!(
                "bar {i}: x={} width={} y={} height={}",
                frame.x,
                frame.width,
                frame.y,
                frame.height
            );
        }

        let handle = surface.append_rects(make_bar_mark(&baseline, self.fill));
        surface.start_transition(handle, self.transition(&baseline, &settled))?;
        Ok((handle, make_bar_mark(&settled, self.fill)))
    }
}
