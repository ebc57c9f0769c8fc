/*!
# Galaxy 3D Lightmapper

Static lightmap baking for Galaxy 3D scenes.

The bake renders every lightmap-enabled light's diffuse contribution into
one RGBM texture per lightmapped model, dilates the result to hide UV
seams, and hands the textures back to the scene's mesh instances.

## Architecture

- **Lightmapper**: bake orchestrator, owns the produced lightmaps
- **GraphicsDevice**: GPU texture / render target / quad draw trait
- **Renderer**: scene rendering trait (one pass per light)
- **Scene**: nodes, models, mesh instances, lights, materials and fog
- **ResourceManager**: named model assets with lightmap area hints

Backends provide concrete types that implement the GPU traits.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod graphics_device;
pub mod renderer;
pub mod camera;
pub mod resource;
pub mod scene;
pub mod lightmapper;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // GPU traits
    pub use crate::graphics_device::GraphicsDevice;
    pub use crate::renderer::Renderer;

    // Most used types
    pub use crate::lightmapper::{Lightmapper, LightmapperConfig};
    pub use crate::resource::ResourceManager;
    pub use crate::scene::Scene;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // GPU resource sub-module
    pub mod render {
        pub use crate::graphics_device::*;
        pub use crate::renderer::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Lightmapper sub-module
    pub mod lightmapper {
        pub use crate::lightmapper::*;
    }
}

// Re-export math library at crate root
pub use glam;
