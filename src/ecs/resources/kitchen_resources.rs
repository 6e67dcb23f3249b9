use bevy_ecs::resource::Resource;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Deserialize;

/// Tunables for the frying pipeline.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct KitchenConfig {
    pub seed: u64,
    /// Protein produced per unit of blood fried off a mob.
    pub blood_to_protein_ratio: f32,
    pub blood_reagent: String,
    pub protein_reagent: String,
    /// Flavor tag given to mobs that had blood in them.
    pub meat_flavor: String,
    /// Chance that a character of fried text survives.
    pub text_retain_chance: f64,
    pub text_mask_char: char,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            blood_to_protein_ratio: 0.1,
            blood_reagent: "Blood".to_string(),
            protein_reagent: "Protein".to_string(),
            meat_flavor: "meaty".to_string(),
            text_retain_chance: 0.4,
            text_mask_char: 'x',
        }
    }
}

impl KitchenConfig {
    /// Parse from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// RNG shared by kitchen systems, seeded once from `KitchenConfig::seed`.
#[derive(Resource)]
pub struct KitchenRng(pub SmallRng);

impl KitchenRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for KitchenRng {
    fn default() -> Self {
        Self::seeded(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            KitchenConfig::from_json_str(r#"{"blood_to_protein_ratio": 0.5, "seed": 7}"#).unwrap();
        assert_eq!(config.blood_to_protein_ratio, 0.5);
        assert_eq!(config.seed, 7);
        assert_eq!(config.protein_reagent, "Protein");
        assert_eq!(config.text_mask_char, 'x');
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(KitchenConfig::from_json_str("{}").unwrap(), KitchenConfig::default());
    }
}
