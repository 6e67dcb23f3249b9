pub mod appearance;
pub mod chemistry;
pub mod common;
pub mod kitchen;
pub mod nutrition;
pub mod paper;

pub use appearance::Appearance;
pub use chemistry::{Bloodstream, NoSolutionContainers, SolutionContainers};
pub use common::{
    ActiveNpc, AtmosExposed, Barotrauma, Buckle, GhostTakeoverAvailable, Internals, MobState,
    Perishable, Respirator, Rotting,
};
pub use kitchen::{DeepFried, DeepFryer};
pub use nutrition::{Butcherable, FOOD_SOLUTION, FlavorProfile, Food, StaticPrice};
pub use paper::Paper;
