use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::commands::{FryCommand, apply_fry_commands};
use super::events::KitchenEvent;
use super::resources::{FryLog, KitchenConfig, KitchenRng};
use super::schedule::{KitchenPhase, configure_kitchen_schedule};
use crate::proto::PrototypeRegistry;

/// Build a headless Bevy app with the stock crispiness levels, kitchen
/// resources, message types, and the command applicator.
///
/// Manual tick control:
/// ```no_run
/// # use deep_fry::ecs::{build_kitchen_app, KitchenConfig};
/// # use deep_fry::ecs::schedule::KitchenTick;
/// let mut app = build_kitchen_app(KitchenConfig::default());
/// app.world_mut().run_schedule(KitchenTick);
/// ```
pub fn build_kitchen_app(config: KitchenConfig) -> App {
    build_kitchen_app_with(config, PrototypeRegistry::with_defaults())
}

/// Build a headless Bevy app with a caller-supplied prototype registry.
///
/// Uses the single-threaded executor: every frying step mutates one entity
/// to completion before the next runs.
pub fn build_kitchen_app_with(config: KitchenConfig, registry: PrototypeRegistry) -> App {
    let mut app = App::empty();

    app.insert_resource(KitchenRng::seeded(config.seed));
    app.insert_resource(config);
    app.insert_resource(registry);
    app.insert_resource(FryLog::new());

    MessageRegistry::register_message::<FryCommand>(app.world_mut());
    MessageRegistry::register_message::<KitchenEvent>(app.world_mut());

    let mut schedule = configure_kitchen_schedule(ExecutorKind::SingleThreaded);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(KitchenPhase::PreUpdate));
    schedule.add_systems(apply_fry_commands.in_set(KitchenPhase::PostUpdate));
    app.add_schedule(schedule);
    app
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use bevy_ecs::message::Messages;

    use super::*;
    use crate::ecs::schedule::KitchenTick;

    #[test]
    fn app_builds_without_panic() {
        let _app = build_kitchen_app(KitchenConfig::default());
    }

    #[test]
    fn resources_are_installed() {
        let app = build_kitchen_app(KitchenConfig {
            seed: 9,
            ..KitchenConfig::default()
        });
        assert_eq!(app.world().resource::<KitchenConfig>().seed, 9);
        assert!(app.world().resource::<PrototypeRegistry>().index("Crispy").is_some());
        assert!(app.world().resource::<FryLog>().events.is_empty());
    }

    #[test]
    fn empty_tick_keeps_resources() {
        let mut app = build_kitchen_app(KitchenConfig::default());
        app.world_mut().run_schedule(KitchenTick);
        assert!(app.world().get_resource::<KitchenConfig>().is_some());
        assert!(app.world().get_resource::<PrototypeRegistry>().is_some());
        assert!(app.world().get_resource::<KitchenRng>().is_some());
    }

    #[test]
    fn commands_written_in_update_are_applied_same_tick() {
        let mut app = build_kitchen_app(KitchenConfig::default());
        let item = app.world_mut().spawn_empty().id();
        let fired = Arc::new(AtomicU32::new(0));
        let fired_clone = fired.clone();
        app.add_systems(
            KitchenTick,
            (move |mut commands: bevy_ecs::message::MessageWriter<FryCommand>| {
                if fired_clone.fetch_add(1, Ordering::Relaxed) == 0 {
                    commands.write(FryCommand::MakeCrispy {
                        item,
                        crispiness: "Crispy".to_string(),
                    });
                }
            })
            .in_set(KitchenPhase::Update),
        );

        app.world_mut().run_schedule(KitchenTick);

        assert_eq!(fired.load(Ordering::Relaxed), 1);
        assert!(
            app.world()
                .get::<crate::ecs::components::Appearance>(item)
                .unwrap()
                .flag("crispy")
        );
        assert!(app.world().resource::<Messages<FryCommand>>().is_empty());
    }

    #[test]
    fn missing_resources_fall_back_to_defaults() {
        let mut app = build_kitchen_app(KitchenConfig::default());
        app.world_mut().remove_resource::<KitchenConfig>();
        app.world_mut().remove_resource::<PrototypeRegistry>();
        let item = app.world_mut().spawn_empty().id();

        crate::ecs::test_helpers::fry(
            &mut app,
            [FryCommand::MakeCrispy {
                item,
                crispiness: "Crispy".to_string(),
            }],
        );

        assert_eq!(*app.world().resource::<KitchenConfig>(), KitchenConfig::default());
        assert!(app.world().resource::<PrototypeRegistry>().is_empty());
        assert_eq!(app.world().resource::<FryLog>().events.len(), 1);
    }
}
