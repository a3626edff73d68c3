//! Physics category taxonomy and contact filtering masks
//!
//! Every scene body carries exactly one [`Category`]. Categories map to
//! disjoint bits so that set membership in a [`CategoryMask`] via bitwise OR
//! is unambiguous. Each entity kind gets a [`BodyFilter`]: which categories
//! physically block it (collision mask) and which merely generate contact
//! notifications (contact-test mask).

use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// The collidable kind of a scene body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Non-colliding scenery (score label, effects)
    None,
    Projectile,
    Actor,
    Enemy,
    Item,
    Platform,
}

impl Category {
    /// Bit value for mask membership. `None` contributes no bits.
    #[inline]
    pub const fn bit(self) -> u32 {
        match self {
            Category::None => 0,
            Category::Projectile => 1,
            Category::Actor => 1 << 1,
            Category::Enemy => 1 << 2,
            Category::Item => 1 << 3,
            Category::Platform => 1 << 4,
        }
    }
}

/// An OR-set of categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryMask(u32);

impl CategoryMask {
    /// The empty mask: collides with/notifies about nothing
    pub const NONE: Self = Self(0);

    #[inline]
    pub const fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bits, for handing to a host physics engine
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl From<Category> for CategoryMask {
    fn from(category: Category) -> Self {
        Self(category.bit())
    }
}

impl BitOr for Category {
    type Output = CategoryMask;

    fn bitor(self, rhs: Category) -> CategoryMask {
        CategoryMask(self.bit() | rhs.bit())
    }
}

impl BitOr<Category> for CategoryMask {
    type Output = CategoryMask;

    fn bitor(self, rhs: Category) -> CategoryMask {
        CategoryMask(self.0 | rhs.bit())
    }
}

/// Collision configuration for one body: its own category, which categories
/// block it, and which categories trigger contact notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyFilter {
    pub category: Category,
    pub collision: CategoryMask,
    pub contact_test: CategoryMask,
}

impl BodyFilter {
    /// The actor rests on the platform and is notified about enemies and items
    pub fn actor() -> Self {
        Self {
            category: Category::Actor,
            collision: Category::Platform.into(),
            contact_test: Category::Enemy | Category::Item,
        }
    }

    /// Enemies pass through everything; contacts with the actor or a
    /// projectile are reported
    pub fn enemy() -> Self {
        Self {
            category: Category::Enemy,
            collision: CategoryMask::NONE,
            contact_test: Category::Actor | Category::Projectile,
        }
    }

    /// The item only reports actor touches
    pub fn item() -> Self {
        Self {
            category: Category::Item,
            collision: CategoryMask::NONE,
            contact_test: Category::Actor.into(),
        }
    }

    /// The platform blocks the actor and reports nothing
    pub fn platform() -> Self {
        Self {
            category: Category::Platform,
            collision: Category::Actor.into(),
            contact_test: CategoryMask::NONE,
        }
    }

    /// Projectiles fly through everything and report enemy hits only
    pub fn projectile() -> Self {
        Self {
            category: Category::Projectile,
            collision: CategoryMask::NONE,
            contact_test: Category::Enemy.into(),
        }
    }
}
