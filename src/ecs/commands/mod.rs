pub mod applicator;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::chem::FixedPoint2;

pub use applicator::apply_fry_commands;

/// A request to run one frying step on an entity.
///
/// The fryer controller writes these via `MessageWriter<FryCommand>`; the
/// applicator in `KitchenPhase::PostUpdate` executes them in write order.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum FryCommand {
    MakeCrispy {
        item: Entity,
        crispiness: String,
    },
    MakeMobIntoFood {
        mob: Entity,
        force: bool,
    },
    MakeEdible {
        fryer: Entity,
        item: Entity,
        quantity: FixedPoint2,
    },
}
