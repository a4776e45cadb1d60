#[cfg(windows)]
use windows::Win32::Foundation::WIN32_ERROR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[cfg(windows)]
    Windows(WIN32_ERROR),
    /// A table with no rows or no columns cannot be positioned.
    EmptyTable,
    InvalidOptions(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(windows)]
impl From<WIN32_ERROR> for Error {
    fn from(e: WIN32_ERROR) -> Self {
        Self::Windows(e)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            #[cfg(windows)]
            Self::Windows(e) => write!(fmt, "win32 error {}", e.0),
            Self::EmptyTable => write!(fmt, "table has no cells"),
            Self::InvalidOptions(what) => write!(fmt, "invalid options: {what}"),
        }
    }
}

impl std::error::Error for Error {}
