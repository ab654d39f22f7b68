pub mod canvas;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod connector;
pub mod figures;
pub mod palette;
pub mod render;
pub mod text_metrics;

#[cfg(feature = "cli")]
pub use cli::run;
