use std::collections::BTreeSet;

use bevy_ecs::component::Component;

use crate::chem::{FixedPoint2, ReagentQuantity, Solution};

/// Applied to anything that has been through a deep fryer.
#[derive(Component, Debug, Clone)]
pub struct DeepFried {
    /// Currently applied crispiness level id.
    pub crispiness: Option<String>,
    /// Multiplier on the entity's sale price.
    pub price_coefficient: f32,
}

impl Default for DeepFried {
    fn default() -> Self {
        Self {
            crispiness: None,
            price_coefficient: 1.0,
        }
    }
}

/// Fryer state: its shared cooking oil and the flavor economics applied to
/// whatever it finishes.
#[derive(Component, Debug, Clone)]
pub struct DeepFryer {
    pub solution: Solution,
    pub good_flavors: BTreeSet<String>,
    pub bad_flavors: BTreeSet<String>,
    pub good_reagents: Vec<ReagentQuantity>,
    pub bad_reagents: Vec<ReagentQuantity>,
    pub good_flavor_price_bonus: f32,
    pub bad_flavor_price_malus: f32,
}

const DEFAULT_OIL: &str = "Cornoil";
const DEFAULT_OIL_VOLUME: i64 = 200;

impl Default for DeepFryer {
    fn default() -> Self {
        let mut solution = Solution::with_reagents([ReagentQuantity::new(
            DEFAULT_OIL,
            FixedPoint2::new(DEFAULT_OIL_VOLUME),
        )]);
        solution.refresh_derived();
        Self {
            solution,
            good_flavors: ["greasy", "salty", "oily"].map(String::from).into(),
            bad_flavors: ["bitter", "sour", "chalky"].map(String::from).into(),
            good_reagents: vec![ReagentQuantity::new("Omnizine", FixedPoint2::new(3))],
            bad_reagents: vec![ReagentQuantity::new("Toxin", FixedPoint2::new(3))],
            good_flavor_price_bonus: 0.2,
            bad_flavor_price_malus: 0.3,
        }
    }
}
