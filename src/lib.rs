pub mod adapters;
pub mod application;
pub mod entities;
pub mod errors;
pub mod factories;
pub mod logging;
pub mod models;
pub mod ports;

pub use entities::*;
pub use errors::*;
pub use factories::{
    AbstractCarFactory, CarFactory, HatchbackCarFactory, MastodonCarFactory, RhinoCarFactory,
    SedanCarFactory,
};
pub use models::*;
pub use ports::*;
