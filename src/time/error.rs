use std::fmt;
use std::iter::repeat;

/// An error that occurred while building a timestamp from its literal form.
#[derive(Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    Syntax(String),
    OutOfRange(String),
}

impl ::std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Syntax(ref err) => err.fmt(f),
            Error::OutOfRange(ref err) => err.fmt(f),
        }
    }
}

// Framed output keeps the offending literal readable in panics coming
// from `"...".parse::<Timestamp>().unwrap()`.
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (kind, err) = match *self {
            Error::Syntax(ref err) => ("Syntax", err),
            Error::OutOfRange(ref err) => ("OutOfRange", err),
        };
        let hr: String = repeat('~').take(79).collect();
        writeln!(f, "{}(", kind)?;
        writeln!(f, "{}", hr)?;
        writeln!(f, "{}", err)?;
        writeln!(f, "{}", hr)?;
        write!(f, ")")
    }
}
