//! Clock types shared by the animation code.
//! `web_time` stands in for `std::time` on wasm targets.

#[cfg(target_arch = "wasm32")]
pub use web_time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Duration;
