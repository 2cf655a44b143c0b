/// Wire3D Core Library - Software wireframe rendering pipeline
///
/// This library provides the framebuffer, rasterization primitives, rotation
/// and perspective projection, and the scene builders that tie them together.

pub mod color;
pub mod error;
pub mod framebuffer;
pub mod geometry;
pub mod projection;
pub mod raster;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use color::Color;
pub use error::{RenderError, RenderResult};
pub use framebuffer::Framebuffer;
pub use geometry::{Edge, Wireframe, CUBE_EDGES};
pub use projection::Projection;
pub use raster::Raster;
pub use scene::{draw_wireframe, CubeScene, DotsScene, DrawReport, Scene, WireStyle};
pub use transform::{rotate_x, rotate_y, rotate_z, Axis, RotationOrder, RotationState, Transform};
