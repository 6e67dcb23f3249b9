pub mod chem;
pub mod ecs;
pub mod proto;

pub use chem::{FixedPoint2, ReagentQuantity, Solution, SolutionError};
pub use ecs::{
    FryCommand, KitchenConfig, KitchenEvent, build_kitchen_app, fried_price, make_crispy,
    make_edible, try_make_mob_into_food,
};
pub use proto::{CrispinessLevelSet, PrototypeError, PrototypeRegistry};
