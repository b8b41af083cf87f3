// src/factories/mod.rs

pub mod abstract_car_factory;
pub mod car_factory;

pub use abstract_car_factory::{AbstractCarFactory, HatchbackCarFactory, SedanCarFactory};
pub use car_factory::{CarFactory, MastodonCarFactory, RhinoCarFactory};

use crate::{BodyStyle, CarKind};

/// Keyed access to every concrete factory in the crate.
///
/// Lookups go through the closed key enums and cannot fail; raw strings are
/// turned into keys by their `TryFrom<&str>` impls first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Factories;

impl Factories {
    pub fn new() -> Self {
        Self
    }

    /// Returns the Factory Method factory for `kind`.
    pub fn car(&self, kind: CarKind) -> Box<dyn CarFactory> {
        car_factory::create_factory(kind)
    }

    /// Returns the Abstract Factory implementation for `style`.
    pub fn family(&self, style: BodyStyle) -> Box<dyn AbstractCarFactory> {
        abstract_car_factory::create_factory(style)
    }

    /// Selector keys accepted by the Factory Method example.
    pub fn car_keys(&self) -> Vec<&'static str> {
        CarKind::ALL.iter().map(CarKind::as_str).collect()
    }

    /// Selector keys accepted by the Abstract Factory example.
    pub fn family_keys(&self) -> Vec<&'static str> {
        BodyStyle::ALL.iter().map(BodyStyle::as_str).collect()
    }
}
