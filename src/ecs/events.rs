use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::chem::FixedPoint2;

/// Notifications raised while frying, for other systems to react to.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum KitchenEvent {
    CrispinessChanged {
        item: Entity,
        old: Option<String>,
        new: String,
    },
    MobConvertedToFood {
        mob: Entity,
        protein: FixedPoint2,
    },
    MadeEdible {
        item: Entity,
        price_coefficient: f32,
    },
    /// A solution's contents changed and its derived values were refreshed.
    SolutionChanged {
        entity: Entity,
        solution: String,
    },
}
