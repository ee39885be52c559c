use std::fmt;
use std::io;

#[derive(Debug)]
pub enum BenchmarkError {
    /// Mazes need odd dimensions of at least 3 so walls and cells alternate.
    InvalidMazeSize { width: usize, height: usize },
    Io(io::Error),
    Csv(csv::Error),
    MalformedMap(String),
    UnknownBenchmark(String),
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMazeSize { width, height } => write!(
                f,
                "invalid map size {}x{}: only odd numbers of at least 3",
                width, height
            ),
            Self::Io(e) => write!(f, "could not read benchmark file: {}", e),
            Self::Csv(e) => write!(f, "could not parse scenario record: {}", e),
            Self::MalformedMap(reason) => write!(f, "malformed map: {}", reason),
            Self::UnknownBenchmark(name) => write!(f, "no benchmark named {}", name),
        }
    }
}

impl std::error::Error for BenchmarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BenchmarkError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for BenchmarkError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<walkdir::Error> for BenchmarkError {
    fn from(e: walkdir::Error) -> Self {
        Self::Io(e.into())
    }
}
