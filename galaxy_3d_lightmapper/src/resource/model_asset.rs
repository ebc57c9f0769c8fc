/// Model asset - shared, named description of a model's source data.
///
/// Only the data the bake consumes is kept here: an optional lightmap
/// area hint (the surface area of the geometry along each axis, computed
/// by the asset pipeline).

use glam::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelAsset {
    name: String,
    area: Option<Vec3>,
}

impl ModelAsset {
    pub fn new(name: impl Into<String>, area: Option<Vec3>) -> Self {
        Self { name: name.into(), area }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lightmap area hint, if the asset pipeline computed one
    pub fn area(&self) -> Option<Vec3> {
        self.area
    }

    pub fn set_area(&mut self, area: Option<Vec3>) {
        self.area = area;
    }
}
