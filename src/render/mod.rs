//! Rendering descriptors
//!
//! Builds a per-frame draw list from the game state and tessellates it into
//! colored triangles. Window, GPU and font handling belong to the host.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Frame, Prompt, Shape, frame, prompt_text};
pub use shapes::frame_vertices;
pub use vertex::Vertex;
