pub mod calendar;
pub mod element;
pub mod engine;
pub mod fallback;
pub mod lunar;
pub mod normalize;
pub mod personality;
pub mod prompt;
pub mod submission;
pub mod tables;

pub use crate::domain::model::{FortuneReport, FortuneRequest, GolfProfile, PillarSet};
pub use crate::domain::ports::{CalendricalResolver, ConfigProvider, Storage};
pub use crate::utils::error::Result;
