//! Error types for the Galaxy3D lightmapper
//!
//! This module defines the error types used by the lightmapper,
//! the scene model and the GPU resource layer it drives.

use std::fmt;

/// Result type for Galaxy3D lightmapper operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D lightmapper errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (Vulkan, DirectX, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture, render target, scene key, etc.)
    InvalidResource(String),

    /// Initialization failed (device, renderer, subsystems)
    InitializationFailed(String),

    /// A single GPU resource (e.g. one lightmap texture) could not be allocated.
    ///
    /// The bake skips the affected object and keeps going.
    ResourceAllocation(String),
}

impl Error {
    /// Whether this error only affects one object of a bake
    pub fn is_resource_allocation(&self) -> bool {
        matches!(self, Error::ResourceAllocation(_) | Error::OutOfMemory)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::ResourceAllocation(msg) => write!(f, "Resource allocation failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
