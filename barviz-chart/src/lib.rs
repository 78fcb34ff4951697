pub mod animate;
pub mod axes;
pub mod canvas;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod geometry;
pub mod prelude;
pub mod scales;
pub mod tooltip;
