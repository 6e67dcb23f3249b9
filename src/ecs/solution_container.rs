//! Named solution slots on entities: get-or-create, scoped mutation, and
//! post-change refresh.

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use bevy_ecs::world::World;
use thiserror::Error;

use crate::chem::{FixedPoint2, Solution};
use crate::ecs::components::{NoSolutionContainers, SolutionContainers};
use crate::ecs::events::KitchenEvent;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("entity {0:?} does not exist")]
    MissingEntity(Entity),
    #[error("entity {0:?} cannot host solution containers")]
    Unsupported(Entity),
}

/// Make sure `entity` has a solution slot called `name`, creating an empty
/// zero-capacity one if needed.
///
/// Returns whether the slot already existed.
pub fn ensure_solution(
    world: &mut World,
    entity: Entity,
    name: &str,
) -> Result<bool, ContainerError> {
    let mut entity_mut = world
        .get_entity_mut(entity)
        .map_err(|_| ContainerError::MissingEntity(entity))?;
    if entity_mut.contains::<NoSolutionContainers>() {
        return Err(ContainerError::Unsupported(entity));
    }
    if !entity_mut.contains::<SolutionContainers>() {
        entity_mut.insert(SolutionContainers::default());
    }
    let Some(mut containers) = entity_mut.get_mut::<SolutionContainers>() else {
        return Err(ContainerError::Unsupported(entity));
    };
    if containers.solutions.contains_key(name) {
        return Ok(true);
    }
    containers
        .solutions
        .insert(name.to_string(), Solution::new(FixedPoint2::ZERO));
    Ok(false)
}

/// Run `f` against an existing solution slot. `None` if the slot is missing.
pub fn with_solution<R>(
    world: &mut World,
    entity: Entity,
    name: &str,
    f: impl FnOnce(&mut Solution) -> R,
) -> Option<R> {
    let mut containers = world.get_mut::<SolutionContainers>(entity)?;
    containers.solutions.get_mut(name).map(f)
}

pub fn solution<'w>(world: &'w World, entity: Entity, name: &str) -> Option<&'w Solution> {
    world.get::<SolutionContainers>(entity)?.get(name)
}

/// Refresh derived values of a solution after its contents changed and
/// announce the change.
pub fn update_chemicals(world: &mut World, entity: Entity, name: &str) {
    if with_solution(world, entity, name, Solution::refresh_derived).is_none() {
        return;
    }
    if let Some(mut messages) = world.get_resource_mut::<Messages<KitchenEvent>>() {
        messages.write(KitchenEvent::SolutionChanged {
            entity,
            solution: name.to_string(),
        });
    }
}
