//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use medlocator::geo::CoordError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging.
    LoggingInit(String),
    /// No hospital (or more than one) matched the given name.
    HospitalNotFound {
        query: String,
        matches: Vec<String>,
    },
    /// A `--fix` argument could not be parsed.
    InvalidFix { value: String, reason: String },
    /// Coordinates outside the valid lat/lon domain.
    InvalidCoordinates(CoordError),
    /// Terminal setup or drawing failed.
    Terminal(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::HospitalNotFound { matches, .. } if !matches.is_empty() => {
                eprintln!();
                eprintln!("Matching hospitals:");
                for name in matches {
                    eprintln!("  - {}", name);
                }
                eprintln!("Use a longer fragment to pick exactly one.");
            }
            CliError::HospitalNotFound { .. } => {
                eprintln!();
                eprintln!("Run `medlocator list` to see all known hospitals.");
            }
            CliError::InvalidFix { .. } => {
                eprintln!();
                eprintln!("Expected format: --fix LAT,LON or --fix LAT,LON,ACCURACY_M");
                eprintln!("Example: --fix 0.3050,32.5900,25");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::HospitalNotFound { query, matches } if matches.len() > 1 => {
                write!(f, "'{}' matches {} hospitals", query, matches.len())
            }
            CliError::HospitalNotFound { query, .. } => {
                write!(f, "No hospital matches '{}'", query)
            }
            CliError::InvalidFix { value, reason } => {
                write!(f, "Invalid --fix value '{}': {}", value, reason)
            }
            CliError::InvalidCoordinates(e) => write!(f, "Invalid coordinates: {}", e),
            CliError::Terminal(e) => write!(f, "Terminal error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InvalidCoordinates(e) => Some(e),
            CliError::Terminal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::InvalidCoordinates(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Terminal(e)
    }
}
