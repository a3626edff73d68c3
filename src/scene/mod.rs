//! Host scene collaborator seam
//!
//! The core never owns entities. It holds opaque [`NodeHandle`]s into the
//! host engine's scene graph and talks to it through [`SceneGraph`]:
//! read-only queries plus the handful of mutation commands the game issues
//! (move, impulse, remove, spawn, action control). Any host that can answer
//! these can run the core; [`memory::MemoryScene`] is the in-process
//! reference host used by the demo binary and the test suite.

pub mod blueprint;
pub mod memory;

use glam::Vec2;

use crate::sim::category::BodyFilter;

/// Opaque handle to a live scene entity, owned by the host
///
/// Handles can go stale: the node may be removed between the time a handle
/// is captured and the time it is used. Callers check
/// [`SceneGraph::is_live`] before mutating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(u32);

impl NodeHandle {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Well-known node names the core looks up at startup
pub mod names {
    pub const ACTOR: &str = "actor";
    pub const ENEMY: &str = "enemy";
    pub const ITEM: &str = "item";
    pub const PLATFORM: &str = "platform";
    pub const SCORE_LABEL: &str = "score_label";
}

/// Named repeating actions and spawn templates owned by the host
pub mod keys {
    /// The item's ambient back-and-forth motion
    pub const ITEM_DRIFT: &str = "item_drift";
    /// Template a projectile is instantiated from
    pub const PROJECTILE_TEMPLATE: &str = "projectile";
    /// Destruction effect emitted on mutual destruction
    pub const EXPLOSION_EFFECT: &str = "explosion";
}

/// The host scene graph, as seen by the core
///
/// Queries are cheap and side-effect free. Commands on stale handles must
/// be ignored by the host; the core still checks liveness first so rules
/// stay idempotent under duplicate contact reports.
pub trait SceneGraph {
    /// Startup lookup of a named node
    fn node_named(&self, name: &str) -> Option<NodeHandle>;

    /// Whether the node is still part of the active scene
    fn is_live(&self, node: NodeHandle) -> bool;

    /// Current position, if the node is live
    fn position(&self, node: NodeHandle) -> Option<Vec2>;

    /// Points payload attached to an item node
    fn points_value(&self, node: NodeHandle) -> Option<u32>;

    /// Instantaneous teleport
    fn set_position(&mut self, node: NodeHandle, position: Vec2);

    /// Additive physics impulse (never sets velocity directly)
    fn apply_impulse(&mut self, node: NodeHandle, impulse: Vec2);

    /// Remove the node from the scene; its handle goes stale
    fn remove(&mut self, node: NodeHandle);

    /// Configure category and collision/contact-test masks
    fn set_body_filter(&mut self, node: NodeHandle, filter: BodyFilter);

    /// Start a named repeating motion action
    fn run_action(&mut self, node: NodeHandle, key: &str);

    /// Cancel a named action; a no-op if it is not running
    fn cancel_action(&mut self, node: NodeHandle, key: &str);

    /// Replace a label node's text
    fn set_label_text(&mut self, node: NodeHandle, text: String);

    /// Instantiate a node from a named template at a position
    fn instantiate(&mut self, template: &str, position: Vec2) -> Option<NodeHandle>;

    /// Fire-and-forget visual effect
    fn add_effect(&mut self, effect: &str, position: Vec2);
}
