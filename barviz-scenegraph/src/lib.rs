pub mod error;
pub mod marks;
pub mod scene_graph;
