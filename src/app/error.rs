use config::ConfigError;
use sample_results::query::error::Error as QueryError;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Criteria(ConfigError),
    Query(QueryError),
    Output(serde_json::Error),
}

impl ::std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Criteria(ref err) => write!(f, "Failed to load criteria: {}", err),
            Error::Query(ref err) => write!(f, "Failed to query samples: {}", err),
            Error::Output(ref err) => write!(f, "Failed to render output: {}", err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Criteria(err)
    }
}

impl From<QueryError> for Error {
    fn from(err: QueryError) -> Self {
        Error::Query(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Output(err)
    }
}
