use std::fmt;

/// Errors reported by grid construction and configuration checks
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// A grid dimension was below 1
    InvalidDimensions { cols: i32, rows: i32 },
    /// Configuration values are inconsistent with each other
    InvalidConfig(String),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { cols, rows } => {
                write!(f, "invalid grid dimensions {}x{} (both must be at least 1)", cols, rows)
            }
            MazeError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_dimensions() {
        let err = MazeError::InvalidDimensions { cols: 0, rows: 3 };
        assert_eq!(err.to_string(), "invalid grid dimensions 0x3 (both must be at least 1)");
    }
}
