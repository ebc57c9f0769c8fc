/// Renderer module - scene rendering entry point used by the bake

pub mod renderer;

pub use renderer::Renderer;

// Mock renderer for tests (no GPU required)
#[cfg(test)]
pub mod mock_renderer;
