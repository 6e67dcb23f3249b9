use bevy_app::App;
use bevy_ecs::entity::Entity;
use deep_fry::ecs::spawn;
use deep_fry::ecs::{DeepFryer, KitchenConfig, MobState, build_kitchen_app};
use deep_fry::FixedPoint2;

pub fn fp(units: i64) -> FixedPoint2 {
    FixedPoint2::new(units)
}

/// A kitchen app with one stock fryer. Blood fries to protein at half rate.
pub fn build_test_kitchen() -> (App, Entity) {
    let mut app = build_kitchen_app(KitchenConfig {
        blood_to_protein_ratio: 0.5,
        ..KitchenConfig::default()
    });
    let fryer = spawn::spawn_fryer(app.world_mut(), DeepFryer::default());
    (app, fryer)
}

pub fn spawn_dead_mouse(app: &mut App, blood: i64) -> Entity {
    spawn::spawn_mob(app.world_mut(), MobState::Dead, "Blood", fp(blood), fp(20))
}
