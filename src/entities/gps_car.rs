// src/entities/gps_car.rs

use crate::{BodyStyle, Console, PatternError};

/// Mastodon product family of the Abstract Factory example.
pub trait Mastodon: Send + Sync {
    fn use_gps(&self, console: &dyn Console) -> Result<(), PatternError>;
}

/// Rhino product family of the Abstract Factory example.
pub trait Rhino: Send + Sync {
    fn use_gps(&self, console: &dyn Console) -> Result<(), PatternError>;
}

fn print_gps(
    console: &dyn Console,
    style: BodyStyle,
    brand: &str,
) -> Result<(), PatternError> {
    console.print_line(&format!("{} {} GPS", style.label(), brand))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MastodonSedanCar;

impl Mastodon for MastodonSedanCar {
    fn use_gps(&self, console: &dyn Console) -> Result<(), PatternError> {
        print_gps(console, BodyStyle::Sedan, "Mastodon")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MastodonHatchbackCar;

impl Mastodon for MastodonHatchbackCar {
    fn use_gps(&self, console: &dyn Console) -> Result<(), PatternError> {
        print_gps(console, BodyStyle::Hatchback, "Mastodon")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RhinoSedanCar;

impl Rhino for RhinoSedanCar {
    fn use_gps(&self, console: &dyn Console) -> Result<(), PatternError> {
        print_gps(console, BodyStyle::Sedan, "Rhino")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RhinoHatchbackCar;

impl Rhino for RhinoHatchbackCar {
    fn use_gps(&self, console: &dyn Console) -> Result<(), PatternError> {
        print_gps(console, BodyStyle::Hatchback, "Rhino")
    }
}
