pub mod car;
pub mod gps_car;

pub use car::*;
pub use gps_car::*;
