// Errors surfaced by the launcher library.

use gamepage_common::path::EntryError;
use gamepage_common::window::SpecError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::facility::FacilityError;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error("invalid window settings")]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("windowing facility failed")]
    Facility(#[from] FacilityError),
}
