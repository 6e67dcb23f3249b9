use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::chem::FixedPoint2;
use crate::ecs::components::*;

/// Spawn a mob with the usual living-creature components and a bloodstream
/// holding `blood` of `blood_reagent`.
pub fn spawn_mob(
    world: &mut World,
    state: MobState,
    blood_reagent: &str,
    blood: FixedPoint2,
    chemical_capacity: FixedPoint2,
) -> Entity {
    world
        .spawn((
            state,
            ActiveNpc,
            AtmosExposed,
            Barotrauma::default(),
            Buckle::default(),
            Internals,
            Perishable::default(),
            Respirator,
            Bloodstream::filled(blood_reagent, blood, chemical_capacity),
            Butcherable::default(),
        ))
        .id()
}

pub fn spawn_fryer(world: &mut World, fryer: DeepFryer) -> Entity {
    world.spawn(fryer).id()
}

/// Spawn a priced item carrying the given flavors.
pub fn spawn_item(world: &mut World, price: f64, flavors: &[&str]) -> Entity {
    world
        .spawn((
            StaticPrice { price },
            FlavorProfile::with_flavors(flavors.iter().copied()),
        ))
        .id()
}

pub fn spawn_paper(world: &mut World, content: &str) -> Entity {
    world
        .spawn(Paper {
            content: content.to_string(),
        })
        .id()
}
