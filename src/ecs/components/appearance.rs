use std::collections::BTreeMap;

use bevy_ecs::component::Component;

/// Visual flags read by the renderer. Presence marks an entity as
/// appearance-capable.
#[derive(Component, Debug, Clone, Default)]
pub struct Appearance {
    flags: BTreeMap<String, bool>,
}

impl Appearance {
    pub fn set_data(&mut self, key: impl Into<String>, value: bool) {
        self.flags.insert(key.into(), value);
    }

    /// `false` for keys never set.
    pub fn flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Keys currently set to `true`.
    pub fn active_flags(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, on)| **on)
            .map(|(key, _)| key.as_str())
    }
}
