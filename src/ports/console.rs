use crate::PatternError;

/// Line-oriented output sink that products write their behavior to.
pub trait Console: Send + Sync {
    fn print_line(&self, line: &str) -> Result<(), PatternError>;
}
