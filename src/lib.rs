pub mod action;
pub mod app;
pub mod apply;
pub mod cli;
pub mod color;
pub mod config;
pub mod current;
pub mod error;
pub mod menu;
pub mod palette;
pub mod prompt;
pub mod recent;
pub mod store;
pub mod workspace;

pub use app::App;
pub use color::ColorItem;
pub use config::Config;
pub use error::{Error, Result};
