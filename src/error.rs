use thiserror::Error;

use crate::color::ColorItem;
use crate::config::ConfigError;
use crate::store::StoreError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Color with this name or code already exists")]
    Duplicate { name: String, color: String },

    #[error("Color not found: \"{}\" ({})", .0.name, .0.color)]
    NotFound(ColorItem),

    #[error("No saved color named \"{0}\"")]
    UnknownColor(String),

    #[error("No open workspace folder found")]
    NoWorkspace,

    #[error("Could not determine where to keep colors; pass --store")]
    NoStorePath,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
