use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use bevy_ecs::resource::Resource;

use crate::ecs::components::{DeepFried, DeepFryer, Food};
use crate::ecs::events::KitchenEvent;
use crate::ecs::resources::{FryLog, KitchenConfig, KitchenRng};
use crate::ecs::solution_container::solution;
use crate::ecs::systems::deep_fryer;
use crate::proto::PrototypeRegistry;

use super::FryCommand;

/// Resources the frying operations need, lifted out of the world for the
/// duration of one applicator pass.
struct FryCtx {
    config: KitchenConfig,
    registry: PrototypeRegistry,
    rng: KitchenRng,
    events: Vec<KitchenEvent>,
}

/// Exclusive system that drains all pending `FryCommand` messages, runs
/// them against the world, and emits `KitchenEvent`s for the results.
///
/// Runs in `KitchenPhase::PostUpdate`.
pub fn apply_fry_commands(world: &mut World) {
    let commands: Vec<FryCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<FryCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return;
    }

    let mut ctx = FryCtx {
        config: take_or_default::<KitchenConfig>(world),
        registry: take_or_default::<PrototypeRegistry>(world),
        rng: take_or_default::<KitchenRng>(world),
        events: Vec::new(),
    };

    for cmd in commands {
        apply_one(&mut ctx, world, cmd);
    }

    let events = std::mem::take(&mut ctx.events);
    if let Some(mut log) = world.get_resource_mut::<FryLog>() {
        log.events.extend(events.iter().cloned());
    }
    if let Some(mut messages) = world.get_resource_mut::<Messages<KitchenEvent>>() {
        messages.write_batch(events);
    }

    world.insert_resource(ctx.config);
    world.insert_resource(ctx.registry);
    world.insert_resource(ctx.rng);
}

fn take_or_default<R: Resource + Default>(world: &mut World) -> R {
    world.remove_resource::<R>().unwrap_or_else(|| {
        tracing::warn!(
            "{} missing from the world, frying with defaults",
            std::any::type_name::<R>()
        );
        R::default()
    })
}

fn apply_one(ctx: &mut FryCtx, world: &mut World, cmd: FryCommand) {
    match cmd {
        FryCommand::MakeCrispy { item, crispiness } => {
            if world.get_entity(item).is_err() {
                tracing::warn!("MakeCrispy for missing entity {item:?}");
                return;
            }
            let old = world
                .get::<DeepFried>(item)
                .and_then(|fried| fried.crispiness.clone());
            deep_fryer::make_crispy(world, &ctx.registry, item, &crispiness);
            ctx.events.push(KitchenEvent::CrispinessChanged {
                item,
                old,
                new: crispiness,
            });
        }
        FryCommand::MakeMobIntoFood { mob, force } => {
            if deep_fryer::try_make_mob_into_food(world, &ctx.config, mob, force) {
                let protein = world
                    .get::<Food>(mob)
                    .and_then(|food| solution(world, mob, &food.solution))
                    .map(|s| s.quantity_of(&ctx.config.protein_reagent))
                    .unwrap_or_default();
                ctx.events
                    .push(KitchenEvent::MobConvertedToFood { mob, protein });
            }
        }
        FryCommand::MakeEdible {
            fryer,
            item,
            quantity,
        } => {
            let ready = world.get::<DeepFried>(item).is_some()
                && world.get::<DeepFryer>(fryer).is_some();
            deep_fryer::make_edible(world, &ctx.config, fryer, item, quantity, &mut ctx.rng.0);
            let has_food = world
                .get::<Food>(item)
                .and_then(|food| solution(world, item, &food.solution))
                .is_some();
            if !ready || !has_food {
                return;
            }
            if let Some(fried) = world.get::<DeepFried>(item) {
                ctx.events.push(KitchenEvent::MadeEdible {
                    item,
                    price_coefficient: fried.price_coefficient,
                });
            }
        }
    }
}
