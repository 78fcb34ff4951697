pub mod time;
pub mod types;
pub mod value;
