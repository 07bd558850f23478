use std::error;
use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::result;

#[derive(Debug)]
pub enum LongMapError {
    IO(io::Error),
    InvalidKey(String, ParseIntError),
    MissingArgument(&'static str),
    UnknownCommand(String),
    UnknownPolicy(String),
}

impl fmt::Display for LongMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IO(err) => write!(f, "IO: {}", err),
            Self::InvalidKey(key, err) => write!(f, "Invalid key {:?}: {}", key, err),
            Self::MissingArgument(name) => write!(f, "Missing argument: {}", name),
            Self::UnknownCommand(name) => write!(f, "Unknown command: {}", name),
            Self::UnknownPolicy(name) => write!(f, "Unrecognized update policy: {}", name),
        }
    }
}

impl error::Error for LongMapError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::IO(source) => Some(source),
            Self::InvalidKey(_, source) => Some(source),
            Self::MissingArgument(_) => None,
            Self::UnknownCommand(_) => None,
            Self::UnknownPolicy(_) => None,
        }
    }
}

impl From<io::Error> for LongMapError {
    fn from(e: io::Error) -> Self {
        Self::IO(e)
    }
}

pub type Result<T> = result::Result<T, LongMapError>;
