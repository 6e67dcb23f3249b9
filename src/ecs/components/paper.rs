use bevy_ecs::component::Component;

/// Writable text carried by paper-like items.
#[derive(Component, Debug, Clone, Default)]
pub struct Paper {
    pub content: String,
}
