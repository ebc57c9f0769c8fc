/// Graphics device module - GPU resource types and traits used by the bake

pub mod graphics_device;
pub mod texture;
pub mod render_target;
pub mod shader;

pub use graphics_device::*;
pub use texture::*;
pub use render_target::*;
pub use shader::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
