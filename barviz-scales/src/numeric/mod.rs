pub mod linear;

/// A scale mapping a continuous numeric domain onto a continuous numeric range
pub trait ContinuousNumericScale: std::fmt::Debug {
    fn domain(&self) -> (f32, f32);

    fn range(&self) -> (f32, f32);

    fn clamp(&self) -> bool;

    /// Maps one domain value into the range
    fn scale(&self, value: f32) -> f32;

    /// Maps one range value back into the domain
    fn invert(&self, value: f32) -> f32;

    /// Roughly `count` human-readable values covering the domain
    fn ticks(&self, count: Option<f32>) -> Vec<f32>;

    fn scale_all(&self, values: &[f32]) -> Vec<f32> {
        values.iter().map(|v| self.scale(*v)).collect()
    }
}
