pub use crate::animate::{BarFrame, BarTransition, Easing, RectTransition};
pub use crate::canvas::{DrawingSurface, MarkHandle, SceneCanvas};
pub use crate::chart::{BarChart, RenderSummary};
pub use crate::config::{AnimationConfig, ChartConfig, Margins};
pub use crate::data::{extract_field, Category, Dataset, FieldValue, Record};
pub use crate::error::BarChartError;
pub use crate::geometry::PlottingArea;
pub use crate::tooltip::{BarTooltips, NoTooltips, TooltipLabels, TooltipService};

pub use barviz_common::time::Duration;
