use serde::{Deserialize, Serialize};

/// A named frying tier and the appearance key that renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrispinessLevelSet {
    pub id: String,
    /// Appearance flag toggled on while this level is applied.
    pub visual: String,
}

impl CrispinessLevelSet {
    pub fn new(id: impl Into<String>, visual: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visual: visual.into(),
        }
    }
}

/// Stock levels registered by [`PrototypeRegistry::with_defaults`](super::PrototypeRegistry::with_defaults).
pub const DEFAULT_LEVELS: &[(&str, &str)] = &[
    ("Crispy", "crispy"),
    ("Burnt", "burnt"),
    ("Charred", "charred"),
];
