pub mod animation;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod frequency;
pub mod geometry;
pub mod orbit;
pub mod playback;
pub mod schedule;
pub mod session;
pub mod uniforms;

pub use animation::*;
pub use camera::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use error::VizError;
pub use frequency::*;
pub use geometry::*;
pub use orbit::*;
pub use playback::*;
pub use schedule::*;
pub use session::*;
pub use uniforms::*;
