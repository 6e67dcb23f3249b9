use bevy_app::App;
use bevy_ecs::message::Messages;

use crate::ecs::commands::FryCommand;
use crate::ecs::events::KitchenEvent;
use crate::ecs::resources::FryLog;
use crate::ecs::schedule::KitchenTick;

/// Queue `commands` and run one tick so the applicator executes them.
pub fn fry(app: &mut App, commands: impl IntoIterator<Item = FryCommand>) {
    app.world_mut()
        .resource_mut::<Messages<FryCommand>>()
        .write_batch(commands);
    app.world_mut().run_schedule(KitchenTick);
}

/// Run `n` ticks.
pub fn tick(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(KitchenTick);
    }
}

/// Events recorded by the applicator so far.
pub fn fry_log(app: &App) -> Vec<KitchenEvent> {
    app.world().resource::<FryLog>().events.clone()
}

/// `SolutionChanged` and other events still buffered in the message queue.
pub fn buffered_events(app: &App) -> Vec<KitchenEvent> {
    let messages = app.world().resource::<Messages<KitchenEvent>>();
    let mut cursor = messages.get_cursor();
    cursor.read(messages).cloned().collect()
}
