use std::collections::BTreeMap;

use bevy_ecs::component::Component;

use crate::chem::{FixedPoint2, ReagentQuantity, Solution};

/// Named solution slots owned by an entity.
#[derive(Component, Debug, Clone, Default)]
pub struct SolutionContainers {
    pub solutions: BTreeMap<String, Solution>,
}

impl SolutionContainers {
    pub fn get(&self, name: &str) -> Option<&Solution> {
        self.solutions.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Solution> {
        self.solutions.get_mut(name)
    }
}

/// Entity cannot host solution containers.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct NoSolutionContainers;

/// Circulatory system: a blood reservoir and an optional reservoir of
/// other chemicals in the bloodstream.
#[derive(Component, Debug, Clone)]
pub struct Bloodstream {
    pub blood_reagent: String,
    pub blood_solution: Solution,
    pub chemical_solution: Option<Solution>,
}

impl Bloodstream {
    /// A bloodstream filled with `volume` of `blood_reagent` and an empty
    /// chemical reservoir of `chemical_capacity`.
    pub fn filled(
        blood_reagent: impl Into<String>,
        volume: FixedPoint2,
        chemical_capacity: FixedPoint2,
    ) -> Self {
        let blood_reagent = blood_reagent.into();
        let blood_solution =
            Solution::with_reagents([ReagentQuantity::new(blood_reagent.clone(), volume)]);
        Self {
            blood_reagent,
            blood_solution,
            chemical_solution: Some(Solution::new(chemical_capacity)),
        }
    }
}
