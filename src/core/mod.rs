pub mod generator;
pub mod parser;
pub mod render;

pub use crate::domain::ports::ConfigProvider;
