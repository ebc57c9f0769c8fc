/// Scene walker: finds the models a bake touches

use crate::scene::{NodeKey, Scene};

/// Nodes carrying a model, in depth-first order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedModels {
    /// Nodes whose model receives a lightmap
    pub bakeable: Vec<NodeKey>,
    /// Every enabled node with a model (bakeable or not)
    pub all_models: Vec<NodeKey>,
}

/// Walk the subtree under `root`, parent before children.
///
/// A disabled node prunes its whole subtree.
pub fn collect_models(scene: &Scene, root: NodeKey) -> CollectedModels {
    let mut collected = CollectedModels::default();
    let mut stack = vec![root];

    while let Some(key) = stack.pop() {
        let Some(node) = scene.node(key) else { continue };
        if !node.enabled {
            continue;
        }
        if let Some(model) = node.model() {
            collected.all_models.push(key);
            if model.lightmapped {
                collected.bakeable.push(key);
            }
        }
        stack.extend(node.children().iter().rev().copied());
    }

    collected
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
