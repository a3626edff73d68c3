//! Game core module
//!
//! All gameplay logic lives here, behind the [`SceneGraph`] seam:
//! - Category bitmasks and per-entity contact filters
//! - Contact events and their resolution rules
//! - Cooldown-gated fire control and frame timing
//! - Touch-driven motion (engagement impulse, reposition)
//! - The score ledger and the per-frame driver that ties it together
//!
//! Nothing in this module touches rendering, assets or the host run loop.
//!
//! [`SceneGraph`]: crate::scene::SceneGraph

pub mod category;
pub mod contact;
pub mod driver;
pub mod fire;
pub mod motion;
pub mod score;

pub use category::{BodyFilter, Category, CategoryMask};
pub use contact::{ContactBody, ContactEvent, ContactFault, ContactOutcome};
pub use driver::{Game, SetupError};
pub use fire::{FireTimer, FrameClock};
pub use motion::MotionController;
pub use score::ScoreLedger;
