// Plant model - One trackable entry in the daily watering list

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    /// Stable identifier, used as the key in the persisted state.
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub notes: String,
}

impl Plant {
    pub fn new(id: &str, name: &str, location: &str, notes: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            notes: notes.to_string(),
        }
    }

    pub fn display_string(&self, watered: bool) -> String {
        let mark = if watered { "[x]" } else { "[ ]" };
        format!("{} {}", mark, self.name)
    }
}

/// Built-in list used when the config file does not define any plants.
pub fn default_plants() -> Vec<Plant> {
    vec![
        Plant::new(
            "monstera",
            "Monstera deliciosa",
            "Living room",
            "Water when the top 3 cm of soil is dry. Likes bright, indirect light.",
        ),
        Plant::new(
            "pothos",
            "Golden pothos",
            "Living room",
            "Let the soil dry out between waterings. Drooping leaves mean it is thirsty.",
        ),
        Plant::new(
            "sansevieria",
            "Snake plant",
            "Bedroom",
            "Very little water, roughly every two weeks. Never leave water in the saucer.",
        ),
        Plant::new(
            "peace-lily",
            "Peace lily",
            "Bedroom",
            "Keep the soil slightly moist. Mist the leaves in dry weather.",
        ),
        Plant::new(
            "basil",
            "Basil",
            "Kitchen",
            "Water daily in summer, at the base, not on the leaves.",
        ),
        Plant::new(
            "aloe",
            "Aloe vera",
            "Kitchen",
            "Soak thoroughly, then wait until the soil is completely dry.",
        ),
    ]
}
