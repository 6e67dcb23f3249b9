pub mod app;
pub mod commands;
pub mod components;
pub mod events;
pub mod resources;
pub mod schedule;
pub mod solution_container;
pub mod spawn;
pub mod systems;
pub mod test_helpers;

pub use app::{build_kitchen_app, build_kitchen_app_with};
pub use commands::{FryCommand, apply_fry_commands};
pub use components::{
    ActiveNpc, Appearance, AtmosExposed, Barotrauma, Bloodstream, Buckle, Butcherable, DeepFried,
    DeepFryer, FOOD_SOLUTION, FlavorProfile, Food, GhostTakeoverAvailable, Internals, MobState,
    NoSolutionContainers, Paper, Perishable, Respirator, Rotting, SolutionContainers, StaticPrice,
};
pub use events::KitchenEvent;
pub use resources::{FryLog, KitchenConfig, KitchenRng};
pub use schedule::{KitchenPhase, KitchenTick, configure_kitchen_schedule};
pub use solution_container::{ContainerError, ensure_solution, update_chemicals};
pub use systems::{fried_price, make_crispy, make_edible, try_make_mob_into_food};
