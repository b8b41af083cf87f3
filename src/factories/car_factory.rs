// src/factories/car_factory.rs

use crate::{BaseCar, CarKind, MastodonCar, RhinoCar};

/// Factory Method: one creation method returning the `BaseCar` abstraction.
pub trait CarFactory: Send + Sync {
    fn make_car(&self) -> Box<dyn BaseCar>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MastodonCarFactory;

impl CarFactory for MastodonCarFactory {
    fn make_car(&self) -> Box<dyn BaseCar> {
        tracing::debug!(car = "mastodon", "making car");
        Box::new(MastodonCar)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RhinoCarFactory;

impl CarFactory for RhinoCarFactory {
    fn make_car(&self) -> Box<dyn BaseCar> {
        tracing::debug!(car = "rhino", "making car");
        Box::new(RhinoCar)
    }
}

/// Returns a new factory for the given car kind.
///
/// # Examples
/// ```
/// use creational_patterns::{CarKind, adapters::RecordingConsole, factories::car_factory};
///
/// let console = RecordingConsole::new();
/// let factory = car_factory::create_factory(CarKind::Rhino);
/// factory.make_car().show_cost(&console).unwrap();
/// assert_eq!(console.lines(), vec!["Rhino car cost is $50,000"]);
/// ```
pub fn create_factory(kind: CarKind) -> Box<dyn CarFactory> {
    tracing::debug!(%kind, "selecting car factory");
    match kind {
        CarKind::Mastodon => Box::new(MastodonCarFactory),
        CarKind::Rhino => Box::new(RhinoCarFactory),
    }
}
