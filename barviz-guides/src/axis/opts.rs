/// Which side of the plot an axis sits on. Ticks and labels extend away from the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Top,
    Bottom,
    Left,
    Right,
}

impl AxisOrientation {
    pub fn is_vertical(&self) -> bool {
        matches!(self, AxisOrientation::Left | AxisOrientation::Right)
    }

    /// +1 when ticks grow toward positive coordinates, -1 otherwise
    pub fn tick_direction(&self) -> f32 {
        match self {
            AxisOrientation::Bottom | AxisOrientation::Right => 1.0,
            AxisOrientation::Top | AxisOrientation::Left => -1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    pub orientation: AxisOrientation,
    /// Approximate tick count for continuous scales
    pub tick_count: f32,
    pub tick_length: f32,
    pub tick_font_size: f32,
}

impl AxisConfig {
    pub fn new(orientation: AxisOrientation) -> Self {
        Self {
            orientation,
            ..Default::default()
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            orientation: AxisOrientation::Bottom,
            tick_count: 10.0,
            tick_length: 6.0,
            tick_font_size: 10.0,
        }
    }
}
