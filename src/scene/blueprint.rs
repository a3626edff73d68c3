//! Scene blueprint loading and validation
//!
//! The host loads scene content from author-controlled data. The blueprint
//! is the typed form of that data: every node has a name, a category and a
//! position, and item nodes carry a required non-negative points payload.
//! Validation happens here, at load time, so a malformed item is rejected
//! before play instead of faulting mid-collision.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::category::Category;

/// One node in the authored scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeBlueprint {
    pub name: String,
    pub category: Category,
    pub position: Vec2,
    /// Points awarded on collection; required when `category` is `Item`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

/// The authored scene: a flat list of named nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneBlueprint {
    pub nodes: Vec<NodeBlueprint>,
}

/// Load-time blueprint fault
#[derive(Debug, Error)]
pub enum BlueprintError {
    #[error("failed to parse scene blueprint: {0}")]
    Json(#[from] serde_json::Error),
    #[error("item node `{0}` carries no points value")]
    ItemWithoutPoints(String),
    #[error("duplicate node name `{0}`")]
    DuplicateName(String),
}

impl SceneBlueprint {
    /// Parse and validate a JSON blueprint
    pub fn from_json(json: &str) -> Result<Self, BlueprintError> {
        let blueprint: Self = serde_json::from_str(json)?;
        blueprint.validate()?;
        Ok(blueprint)
    }

    /// Check the invariants the core relies on
    pub fn validate(&self) -> Result<(), BlueprintError> {
        for (i, node) in self.nodes.iter().enumerate() {
            if node.category == Category::Item && node.points.is_none() {
                return Err(BlueprintError::ItemWithoutPoints(node.name.clone()));
            }
            if self.nodes[..i].iter().any(|n| n.name == node.name) {
                return Err(BlueprintError::DuplicateName(node.name.clone()));
            }
        }
        Ok(())
    }
}
