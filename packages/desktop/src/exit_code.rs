// Consistent exit codes for the gamepage binary.
//
//   0  = success (window closed normally)
//   1  = general error
//   2  = usage/config error
//   10 = windowing facility failed
//   11 = executable location unavailable

use std::process;

use gamepage_common::path::EntryError;

use crate::config::ConfigError;
use crate::error::LaunchError;
use crate::facility::FacilityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    Error = 1,
    Usage = 2,
    Facility = 10,
    Environment = 11,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Map an anyhow error to an exit code by inspecting the error chain.
    pub fn from_error(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if let Some(launch_err) = cause.downcast_ref::<LaunchError>() {
                return Self::from_launch_error(launch_err);
            }
            if let Some(entry_err) = cause.downcast_ref::<EntryError>() {
                return Self::from_entry_error(entry_err);
            }
            if cause.is::<ConfigError>() {
                return Self::Usage;
            }
            if cause.is::<FacilityError>() {
                return Self::Facility;
            }
        }

        Self::Error
    }

    pub fn from_launch_error(err: &LaunchError) -> Self {
        match err {
            LaunchError::Entry(entry_err) => Self::from_entry_error(entry_err),
            LaunchError::Spec(_) | LaunchError::Config(_) => Self::Usage,
            LaunchError::Facility(_) => Self::Facility,
        }
    }

    fn from_entry_error(err: &EntryError) -> Self {
        match err {
            EntryError::CurrentExe(_) | EntryError::NoParent(_) => Self::Environment,
            EntryError::NotAbsolute(_) => Self::Error,
        }
    }
}

impl From<ExitCode> for process::ExitCode {
    fn from(code: ExitCode) -> Self {
        process::ExitCode::from(code.code() as u8)
    }
}
