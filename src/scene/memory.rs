//! In-memory reference scene
//!
//! A minimal [`SceneGraph`] host with no physics or rendering: a flat node
//! table with liveness flags. Commands are recorded (impulses, effects,
//! spawns) so the test suite and the demo binary can observe the command
//! traffic the core issues.

use glam::Vec2;

use super::blueprint::SceneBlueprint;
use super::{NodeHandle, SceneGraph};
use crate::sim::category::{BodyFilter, Category};

#[derive(Debug, Clone)]
struct MemoryNode {
    handle: NodeHandle,
    name: String,
    category: Category,
    position: Vec2,
    points: Option<u32>,
    live: bool,
    filter: Option<BodyFilter>,
    actions: Vec<String>,
    text: Option<String>,
}

/// In-memory scene host for tests and the headless demo
#[derive(Debug, Default)]
pub struct MemoryScene {
    nodes: Vec<MemoryNode>,
    next_id: u32,
    impulses: Vec<(NodeHandle, Vec2)>,
    effects: Vec<(String, Vec2)>,
    spawned: Vec<NodeHandle>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from a validated blueprint
    pub fn from_blueprint(blueprint: &SceneBlueprint) -> Self {
        let mut scene = Self::new();
        for node in &blueprint.nodes {
            scene.insert(node.name.clone(), node.category, node.position, node.points);
        }
        scene
    }

    fn insert(
        &mut self,
        name: String,
        category: Category,
        position: Vec2,
        points: Option<u32>,
    ) -> NodeHandle {
        let handle = NodeHandle::from_raw(self.next_id);
        self.next_id += 1;
        self.nodes.push(MemoryNode {
            handle,
            name,
            category,
            position,
            points,
            live: true,
            filter: None,
            actions: Vec::new(),
            text: None,
        });
        handle
    }

    fn node(&self, handle: NodeHandle) -> Option<&MemoryNode> {
        self.nodes.iter().find(|n| n.handle == handle && n.live)
    }

    fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut MemoryNode> {
        self.nodes.iter_mut().find(|n| n.handle == handle && n.live)
    }

    // --- observation helpers ---

    /// Body filter applied to a node, if any
    pub fn body_filter(&self, handle: NodeHandle) -> Option<BodyFilter> {
        self.node(handle).and_then(|n| n.filter)
    }

    /// Whether a named action is currently running on a node
    pub fn action_running(&self, handle: NodeHandle, key: &str) -> bool {
        self.node(handle)
            .is_some_and(|n| n.actions.iter().any(|k| k == key))
    }

    /// Current label text on a node
    pub fn label_text(&self, handle: NodeHandle) -> Option<&str> {
        self.node(handle).and_then(|n| n.text.as_deref())
    }

    /// Every impulse applied so far, in order
    pub fn impulses(&self) -> &[(NodeHandle, Vec2)] {
        &self.impulses
    }

    /// Every visual effect requested so far
    pub fn effects(&self) -> &[(String, Vec2)] {
        &self.effects
    }

    /// Nodes created through [`SceneGraph::instantiate`]
    pub fn spawned(&self) -> &[NodeHandle] {
        &self.spawned
    }

    /// Number of nodes still in the scene
    pub fn live_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.live).count()
    }
}

impl SceneGraph for MemoryScene {
    fn node_named(&self, name: &str) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find(|n| n.live && n.name == name)
            .map(|n| n.handle)
    }

    fn is_live(&self, node: NodeHandle) -> bool {
        self.node(node).is_some()
    }

    fn position(&self, node: NodeHandle) -> Option<Vec2> {
        self.node(node).map(|n| n.position)
    }

    fn points_value(&self, node: NodeHandle) -> Option<u32> {
        self.node(node).and_then(|n| n.points)
    }

    fn set_position(&mut self, node: NodeHandle, position: Vec2) {
        if let Some(n) = self.node_mut(node) {
            n.position = position;
        }
    }

    fn apply_impulse(&mut self, node: NodeHandle, impulse: Vec2) {
        if self.node(node).is_some() {
            self.impulses.push((node, impulse));
        }
    }

    fn remove(&mut self, node: NodeHandle) {
        if let Some(n) = self.node_mut(node) {
            n.live = false;
        }
    }

    fn set_body_filter(&mut self, node: NodeHandle, filter: BodyFilter) {
        if let Some(n) = self.node_mut(node) {
            n.category = filter.category;
            n.filter = Some(filter);
        }
    }

    fn run_action(&mut self, node: NodeHandle, key: &str) {
        if let Some(n) = self.node_mut(node) {
            if !n.actions.iter().any(|k| k == key) {
                n.actions.push(key.to_string());
            }
        }
    }

    fn cancel_action(&mut self, node: NodeHandle, key: &str) {
        if let Some(n) = self.node_mut(node) {
            n.actions.retain(|k| k != key);
        }
    }

    fn set_label_text(&mut self, node: NodeHandle, text: String) {
        if let Some(n) = self.node_mut(node) {
            n.text = Some(text);
        }
    }

    fn instantiate(&mut self, template: &str, position: Vec2) -> Option<NodeHandle> {
        let handle = self.insert(template.to_string(), Category::None, position, None);
        self.spawned.push(handle);
        Some(handle)
    }

    fn add_effect(&mut self, effect: &str, position: Vec2) {
        self.effects.push((effect.to_string(), position));
    }
}
