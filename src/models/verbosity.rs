//! Verbosity threshold that decides which events make it into the log
use std::fmt;
use std::str::FromStr;

/// Ordered noise level; comparisons follow declaration order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    Quiet,
    Minimal,
    #[default]
    Normal,
    Detailed,
    Diagnostic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVerbosity(pub String);

impl fmt::Display for UnknownVerbosity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Unknown verbosity '{}', expected one of: q[uiet], m[inimal], n[ormal], d[etailed], diag[nostic]",
            self.0
        )
    }
}

impl std::error::Error for UnknownVerbosity {}

impl FromStr for Verbosity {
    type Err = UnknownVerbosity;

    fn from_str(input: &str) -> Result<Verbosity, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "q" | "quiet" => Ok(Self::Quiet),
            "m" | "minimal" => Ok(Self::Minimal),
            "n" | "normal" => Ok(Self::Normal),
            "d" | "detailed" => Ok(Self::Detailed),
            "diag" | "diagnostic" => Ok(Self::Diagnostic),
            _ => Err(UnknownVerbosity(input.to_string())),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Minimal => write!(f, "minimal"),
            Self::Normal => write!(f, "normal"),
            Self::Detailed => write!(f, "detailed"),
            Self::Diagnostic => write!(f, "diagnostic"),
        }
    }
}
