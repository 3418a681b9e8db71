pub mod camera;
pub mod constants;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod state;
pub mod throttle;

pub use camera::*;
pub use controller::*;
pub use error::*;
pub use geometry::*;
pub use state::*;
pub use throttle::*;
