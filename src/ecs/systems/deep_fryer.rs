//! What a deep fryer does to the things put in it.
//!
//! Three operations, applied in order by the fryer's controller:
//! 1. `make_crispy`: swap the crispiness appearance flag
//! 2. `try_make_mob_into_food`: strip a dead mob down to food, blood to protein
//! 3. `make_edible`: finish a fried item and soak it in the fryer's oil

use std::collections::BTreeSet;

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::Rng;

use crate::chem::{FixedPoint2, Solution};
use crate::ecs::components::{
    ActiveNpc, Appearance, AtmosExposed, Barotrauma, Bloodstream, Buckle, Butcherable, DeepFried,
    DeepFryer, FlavorProfile, Food, GhostTakeoverAvailable, Internals, MobState, Paper,
    Perishable, Respirator, Rotting,
};
use crate::ecs::resources::KitchenConfig;
use crate::ecs::solution_container::{ensure_solution, update_chemicals, with_solution};
use crate::proto::PrototypeRegistry;

/// Lowest price coefficient frying can produce.
pub const MIN_PRICE_COEFFICIENT: f32 = 0.01;

/// Fried food keeps room for twice the oil it absorbed, for condiments and
/// injections.
const FRYER_SOLUTION_BUFFER: i64 = 2;

// ---------------------------------------------------------------------------
// Appearance
// ---------------------------------------------------------------------------

/// Make an item look deep-fried at the given crispiness level.
///
/// Clears the previous level's visual flag and sets the new one. Levels that
/// do not resolve in the registry are skipped silently.
pub fn make_crispy(
    world: &mut World,
    registry: &PrototypeRegistry,
    item: Entity,
    crispiness: &str,
) {
    let Ok(mut entity) = world.get_entity_mut(item) else {
        return;
    };
    if !entity.contains::<Appearance>() {
        entity.insert(Appearance::default());
    }
    if !entity.contains::<DeepFried>() {
        entity.insert(DeepFried::default());
    }

    let old = entity
        .get_mut::<DeepFried>()
        .and_then(|mut fried| fried.crispiness.replace(crispiness.to_string()));

    let Some(mut appearance) = entity.get_mut::<Appearance>() else {
        return;
    };
    if let Some(old_level) = old.as_deref().and_then(|id| registry.index(id)) {
        appearance.set_data(old_level.visual.clone(), false);
    }
    if let Some(new_level) = registry.index(crispiness) {
        appearance.set_data(new_level.visual.clone(), true);
    }
}

// ---------------------------------------------------------------------------
// Mob conversion
// ---------------------------------------------------------------------------

/// Turn a dead mob into food. Irreversible.
///
/// Does nothing and returns `false` unless the mob is dead or `force` is set.
/// Also returns `false` if the mob cannot hold a food solution.
pub fn try_make_mob_into_food(
    world: &mut World,
    config: &KitchenConfig,
    mob: Entity,
    force: bool,
) -> bool {
    let Ok(mut entity) = world.get_entity_mut(mob) else {
        return false;
    };
    let is_dead = entity.get::<MobState>().is_some_and(MobState::is_dead);
    if !force && !is_dead {
        return false;
    }

    entity.remove::<(
        ActiveNpc,
        AtmosExposed,
        Barotrauma,
        Buckle,
        GhostTakeoverAvailable,
        Internals,
        Perishable,
        Respirator,
        Rotting,
    )>();

    if !entity.contains::<Food>() {
        entity.insert(Food::default());
    }
    let food_slot = entity
        .get::<Food>()
        .map(|food| food.solution.clone())
        .unwrap_or_default();

    let already_had_food = match ensure_solution(world, mob, &food_slot) {
        Ok(existed) => existed,
        Err(err) => {
            tracing::warn!("cannot turn {mob:?} into food: {err}");
            return false;
        }
    };

    // Mobs whose food solution mirrors their blood would otherwise be
    // counted twice.
    if already_had_food {
        with_solution(world, mob, &food_slot, Solution::remove_all);
    }

    let mut protein = FixedPoint2::ZERO;
    let drained = world.get_mut::<Bloodstream>(mob).and_then(|mut bloodstream| {
        let bloodstream = &mut *bloodstream;
        let chemicals = bloodstream.chemical_solution.as_ref()?;
        let present = bloodstream.blood_solution.volume();
        bloodstream
            .blood_solution
            .remove_reagent(&config.blood_reagent, FixedPoint2::MAX);
        let blood_removed = present - bloodstream.blood_solution.volume();
        Some((blood_removed, chemicals.clone()))
    });

    if let Some((blood_removed, chemicals)) = drained {
        protein = blood_removed.mul_ratio(config.blood_to_protein_ratio);
        with_solution(world, mob, &food_slot, |food| {
            food.grow_capacity(protein);
            if let Err(err) = food.add_reagent(config.protein_reagent.clone(), protein) {
                tracing::warn!("protein from {mob:?} rejected: {err}");
            }
            food.grow_capacity(chemicals.volume());
            if let Err(err) = food.add_solution(&chemicals) {
                tracing::warn!("bloodstream chemicals from {mob:?} rejected: {err}");
            }
        });

        // If it bled, it probably tastes of meat.
        if blood_removed.is_positive() {
            add_flavor(world, mob, &config.meat_flavor);
        }
    }

    update_chemicals(world, mob, &food_slot);
    tracing::debug!(?mob, %protein, forced = force && !is_dead, "mob turned into food");
    true
}

fn add_flavor(world: &mut World, entity: Entity, flavor: &str) {
    let mut entity_mut = world.entity_mut(entity);
    if let Some(mut profile) = entity_mut.get_mut::<FlavorProfile>() {
        profile.flavors.insert(flavor.to_string());
    } else {
        entity_mut.insert(FlavorProfile::with_flavors([flavor]));
    }
}

// ---------------------------------------------------------------------------
// Finishing
// ---------------------------------------------------------------------------

/// Replace each non-newline character with `mask`, keeping it with
/// probability `retain_chance`.
pub fn corrupt_text(
    content: &str,
    retain_chance: f64,
    mask: char,
    rng: &mut impl Rng,
) -> String {
    let retain_chance = retain_chance.clamp(0.0, 1.0);
    content
        .chars()
        .map(|c| {
            if c == '\n' || rng.random_bool(retain_chance) {
                c
            } else {
                mask
            }
        })
        .collect()
}

/// `max(0.01, 1 + good × bonus − bad × malus)`.
pub fn flavor_price_coefficient(good: usize, bad: usize, bonus: f32, malus: f32) -> f32 {
    (1.0 + good as f32 * bonus - bad as f32 * malus).max(MIN_PRICE_COEFFICIENT)
}

/// Make a fried item edible, soaking up `quantity` of the fryer's oil.
///
/// The item must already have been through [`make_crispy`]; otherwise this
/// logs an error and leaves the item untouched.
pub fn make_edible(
    world: &mut World,
    config: &KitchenConfig,
    fryer: Entity,
    item: Entity,
    quantity: FixedPoint2,
    rng: &mut impl Rng,
) {
    if world.get::<DeepFried>(item).is_none() {
        tracing::error!("{item:?} is missing DeepFried before being made edible");
        return;
    }
    let Some(fryer_state) = world.get::<DeepFryer>(fryer) else {
        tracing::warn!("{fryer:?} is not a deep fryer; cannot finish {item:?}");
        return;
    };
    let good_flavors = fryer_state.good_flavors.clone();
    let bad_flavors = fryer_state.bad_flavors.clone();
    let good_reagents = fryer_state.good_reagents.clone();
    let bad_reagents = fryer_state.bad_reagents.clone();
    let bonus = fryer_state.good_flavor_price_bonus;
    let malus = fryer_state.bad_flavor_price_malus;

    let mut entity = world.entity_mut(item);

    // A fried carcass can't be carved any more.
    entity.remove::<Butcherable>();

    if let Some(mut paper) = entity.get_mut::<Paper>() {
        paper.content = corrupt_text(
            &paper.content,
            config.text_retain_chance,
            config.text_mask_char,
            rng,
        );
    }

    if !entity.contains::<Food>() {
        entity.insert(Food::default());
    }
    let food_slot = entity
        .get::<Food>()
        .map(|food| food.solution.clone())
        .unwrap_or_default();

    let mut extra = Solution::unbounded();
    let mut price_coefficient = None;
    match entity.get_mut::<FlavorProfile>() {
        Some(mut profile) => {
            let good = intersection_count(&profile.flavors, &good_flavors);
            let bad = intersection_count(&profile.flavors, &bad_flavors);
            price_coefficient = Some(flavor_price_coefficient(good, bad, bonus, malus));

            if good > 0 {
                for rq in &good_reagents {
                    add_bonus(&mut extra, &rq.reagent, rq.quantity * good);
                    // Hide the taste of the medicine.
                    profile.ignore_reagents.insert(rq.reagent.clone());
                }
            }
            if bad > 0 {
                for rq in &bad_reagents {
                    add_bonus(&mut extra, &rq.reagent, rq.quantity * bad);
                }
            }
        }
        None => {
            entity.insert(FlavorProfile::default());
        }
    }
    if let Some(coefficient) = price_coefficient {
        if let Some(mut fried) = entity.get_mut::<DeepFried>() {
            fried.price_coefficient = coefficient;
        }
    }

    if let Err(err) = ensure_solution(world, item, &food_slot) {
        tracing::warn!("cannot give {item:?} a food solution: {err}");
        return;
    }

    let oil = match world.get_mut::<DeepFryer>(fryer) {
        Some(mut fryer_state) => fryer_state.solution.split_solution(quantity),
        None => Solution::new(FixedPoint2::ZERO),
    };

    with_solution(world, item, &food_slot, |food| {
        let capacity = quantity * FRYER_SOLUTION_BUFFER + food.volume() + extra.volume();
        food.ensure_capacity(capacity);
        if let Err(err) = food.add_solution(&oil) {
            tracing::warn!("fryer oil for {item:?} rejected: {err}");
        }
        if let Err(err) = food.add_solution(&extra) {
            tracing::warn!("flavor reagents for {item:?} rejected: {err}");
        }
    });
    update_chemicals(world, item, &food_slot);

    tracing::debug!(
        ?item,
        ?fryer,
        %quantity,
        price_coefficient = ?price_coefficient,
        "fried item made edible"
    );
}

fn intersection_count(flavors: &BTreeSet<String>, configured: &BTreeSet<String>) -> usize {
    flavors.intersection(configured).count()
}

fn add_bonus(extra: &mut Solution, reagent: &str, quantity: FixedPoint2) {
    if let Err(err) = extra.add_reagent(reagent, quantity) {
        tracing::warn!("flavor reagent {reagent} rejected: {err}");
    }
}
