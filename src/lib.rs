pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::{LambdaConfig, S3Storage};

pub use app::service::{FortuneResponse, FortuneService};
pub use config::cli::LocalStorage;
pub use core::{calendar::SexagenaryResolver, engine::FortuneEngine};
pub use utils::error::{FortuneError, Result};
