use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{DeepFried, StaticPrice};

/// Sale price of `entity`: its base price scaled by how well it was fried.
///
/// `None` if the entity has no base price.
pub fn fried_price(world: &World, entity: Entity) -> Option<f64> {
    let base = world.get::<StaticPrice>(entity)?.price;
    let coefficient = world
        .get::<DeepFried>(entity)
        .map_or(1.0, |fried| fried.price_coefficient as f64);
    Some(base * coefficient)
}
