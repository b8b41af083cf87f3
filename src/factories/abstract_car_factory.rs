// src/factories/abstract_car_factory.rs

use crate::{
    BodyStyle, Mastodon, MastodonHatchbackCar, MastodonSedanCar, Rhino, RhinoHatchbackCar,
    RhinoSedanCar,
};

/// Abstract Factory: one creation method per product family.
///
/// Every product returned by a single implementation belongs to the same
/// body style.
pub trait AbstractCarFactory: Send + Sync {
    fn create_mastodon(&self) -> Box<dyn Mastodon>;

    fn create_rhino(&self) -> Box<dyn Rhino>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SedanCarFactory;

impl AbstractCarFactory for SedanCarFactory {
    fn create_mastodon(&self) -> Box<dyn Mastodon> {
        tracing::debug!(style = "sedan", "creating mastodon");
        Box::new(MastodonSedanCar)
    }

    fn create_rhino(&self) -> Box<dyn Rhino> {
        tracing::debug!(style = "sedan", "creating rhino");
        Box::new(RhinoSedanCar)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HatchbackCarFactory;

impl AbstractCarFactory for HatchbackCarFactory {
    fn create_mastodon(&self) -> Box<dyn Mastodon> {
        tracing::debug!(style = "hatchback", "creating mastodon");
        Box::new(MastodonHatchbackCar)
    }

    fn create_rhino(&self) -> Box<dyn Rhino> {
        tracing::debug!(style = "hatchback", "creating rhino");
        Box::new(RhinoHatchbackCar)
    }
}

/// Returns a new factory for the given body style.
pub fn create_factory(style: BodyStyle) -> Box<dyn AbstractCarFactory> {
    tracing::debug!(%style, "selecting car family factory");
    match style {
        BodyStyle::Sedan => Box::new(SedanCarFactory),
        BodyStyle::Hatchback => Box::new(HatchbackCarFactory),
    }
}
