use bevy_ecs::resource::Resource;

use crate::ecs::events::KitchenEvent;

/// Every `KitchenEvent` the command applicator has emitted, in order.
/// Unlike the message buffers this is never rotated; callers clear it.
#[derive(Resource, Debug, Clone, Default)]
pub struct FryLog {
    pub events: Vec<KitchenEvent>,
}

impl FryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
