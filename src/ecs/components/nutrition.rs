use std::collections::BTreeSet;

use bevy_ecs::component::Component;

/// Default solution slot used by [`Food`].
pub const FOOD_SOLUTION: &str = "food";

/// Edible entity. Its nutrients live in the named solution slot of the
/// entity's `SolutionContainers`.
#[derive(Component, Debug, Clone)]
pub struct Food {
    pub solution: String,
}

impl Default for Food {
    fn default() -> Self {
        Self {
            solution: FOOD_SOLUTION.to_string(),
        }
    }
}

/// Taste tags, plus reagents whose taste is masked.
#[derive(Component, Debug, Clone, Default)]
pub struct FlavorProfile {
    pub flavors: BTreeSet<String>,
    pub ignore_reagents: BTreeSet<String>,
}

impl FlavorProfile {
    pub fn with_flavors<I, S>(flavors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            flavors: flavors.into_iter().map(Into::into).collect(),
            ignore_reagents: BTreeSet::new(),
        }
    }
}

/// Carcass that can be carved into the listed products.
#[derive(Component, Debug, Clone, Default)]
pub struct Butcherable {
    pub spawned: Vec<String>,
}

/// Base sale value before any modifiers.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct StaticPrice {
    pub price: f64,
}
