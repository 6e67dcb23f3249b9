use bevy_ecs::component::Component;

/// Coarse health state of a mob.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MobState {
    #[default]
    Alive,
    Critical,
    Dead,
}

impl MobState {
    pub fn is_dead(&self) -> bool {
        matches!(self, MobState::Dead)
    }
}

// ---------------------------------------------------------------------------
// Behaviour components, stripped when a mob is turned into food
// ---------------------------------------------------------------------------

/// Mob is driven by an active AI controller.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ActiveNpc;

/// Mob exchanges heat and gas with the surrounding atmosphere.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AtmosExposed;

/// Mob takes damage from pressure differences.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Barotrauma {
    pub damage_per_tick: f32,
}

/// Mob can be strapped to chairs and beds.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Buckle {
    pub buckled: bool,
}

/// Mob can be taken over by a ghost player.
#[derive(Component, Debug, Clone, Default)]
pub struct GhostTakeoverAvailable {
    pub role_name: String,
}

/// Mob breathes from an attached gas tank.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Internals;

/// Mob decays after death.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Perishable {
    pub rot_after_secs: u32,
}

/// Mob breathes.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Respirator;

/// Mob is actively rotting.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Rotting;
