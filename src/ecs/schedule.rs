use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

/// Schedule label for one kitchen tick.
/// Run manually via `app.world_mut().run_schedule(KitchenTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct KitchenTick;

/// Ordered phases within each tick.
///
/// Controllers write `FryCommand`s during `Update`; the applicator runs them in
/// `PostUpdate`. Phases run in declaration order: PreUpdate < Update < PostUpdate.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum KitchenPhase {
    PreUpdate,
    Update,
    PostUpdate,
}

/// Build a configured `KitchenTick` schedule with phase ordering.
pub fn configure_kitchen_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(KitchenTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            KitchenPhase::PreUpdate,
            KitchenPhase::Update,
            KitchenPhase::PostUpdate,
        )
            .chain(),
    );
    schedule
}
