use crate::{Console, PatternError};

/// Product of the Factory Method example.
pub trait BaseCar: Send + Sync {
    /// Prints the car's price line.
    fn show_cost(&self, console: &dyn Console) -> Result<(), PatternError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MastodonCar;

impl BaseCar for MastodonCar {
    fn show_cost(&self, console: &dyn Console) -> Result<(), PatternError> {
        console.print_line("Mastodon car cost is $100,000")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RhinoCar;

impl BaseCar for RhinoCar {
    fn show_cost(&self, console: &dyn Console) -> Result<(), PatternError> {
        console.print_line("Rhino car cost is $50,000")
    }
}
