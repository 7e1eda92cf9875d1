use std::fmt;

use crate::flow::BookingStage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MovieNotFound { id: String },
    InvalidSeat(String),
    SelectionLimit { max: usize },
    EmptySelection,
    InvalidTransition { from: BookingStage, action: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MovieNotFound { id } => write!(f, "movie not found: {}", id),
            Error::InvalidSeat(raw) => write!(f, "invalid seat: {}", raw),
            Error::SelectionLimit { max } => write!(f, "selection limit reached (max {})", max),
            Error::EmptySelection => write!(f, "no seats selected"),
            Error::InvalidTransition { from, action } => {
                write!(f, "invalid transition: {} from {:?} stage", action, from)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
