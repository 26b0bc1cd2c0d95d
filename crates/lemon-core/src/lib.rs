pub mod camera;
pub mod constants;
pub mod error;
pub mod lift;
pub mod mesh;
pub mod parallax;
pub mod scene;
pub mod spring;
pub mod state;
pub mod wave;

pub use camera::*;
pub use error::*;
pub use lift::*;
pub use mesh::*;
pub use parallax::*;
pub use scene::*;
pub use spring::*;
pub use state::*;
pub use wave::*;
