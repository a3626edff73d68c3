//! Contact events and resolution outcomes
//!
//! The physics collaborator reports touches as unordered pairs of
//! category-tagged bodies. Resolution itself lives on
//! [`Game`](super::driver::Game); this module holds the event shape and the
//! vocabulary of outcomes and faults.

use thiserror::Error;

use super::category::Category;
use crate::scene::NodeHandle;

/// One party to a contact: a live-at-report-time scene body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactBody {
    pub node: NodeHandle,
    pub category: Category,
}

impl ContactBody {
    pub fn new(node: NodeHandle, category: Category) -> Self {
        Self { node, category }
    }
}

/// An unordered pair of touching bodies, consumed once by the resolver
///
/// The referenced nodes may have been removed between the physics report
/// and resolution; the resolver re-checks liveness before acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub body_a: ContactBody,
    pub body_b: ContactBody,
}

impl ContactEvent {
    pub fn new(body_a: ContactBody, body_b: ContactBody) -> Self {
        Self { body_a, body_b }
    }

    /// If the actor is one party, return `(actor, other)`
    pub fn split_actor(&self) -> Option<(ContactBody, ContactBody)> {
        if self.body_a.category == Category::Actor {
            Some((self.body_a, self.body_b))
        } else if self.body_b.category == Category::Actor {
            Some((self.body_b, self.body_a))
        } else {
            None
        }
    }
}

/// What a resolved contact did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Actor collected the item; points were added to the ledger
    Scored { points: u32 },
    /// Actor met the enemy; both were removed from the scene
    ActorDown,
    /// Two non-actor bodies destroyed each other
    BothDestroyed,
    /// Actor touched a category with no rule attached
    Ignored,
    /// A party was already gone; nothing happened
    Stale,
}

/// Data-integrity fault during contact resolution
///
/// Scene content is author-controlled, so a malformed item is an error to
/// surface, not a value to default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFault {
    #[error("item node {0:?} carries no points value")]
    MissingPoints(NodeHandle),
}
