pub mod demo_runner;
pub mod drivers;

pub use demo_runner::{DemoRunner, RunSummary};
pub use drivers::{NO_FACTORY_NOTICE, app_car_factory, app_factory};
