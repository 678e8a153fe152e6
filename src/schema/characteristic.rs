use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Game-mode variant a difficulty belongs to
///
/// Serializes as its bare name (e.g. `"OneSaber"`). Labels outside the
/// built-in set pass through untouched as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Characteristic {
    Standard,
    OneSaber,
    NoArrows,
    Custom(String),
}

impl Characteristic {
    /// Normalize a legacy difficulty entry's characteristic
    ///
    /// Precedence: a one-handed map is always `OneSaber`; then the legacy
    /// spaced labels; then any non-empty label verbatim; otherwise `Standard`.
    pub fn normalize(one_saber_map: bool, label: &str) -> Self {
        if one_saber_map {
            return Characteristic::OneSaber;
        }
        match label {
            "One Saber" => Characteristic::OneSaber,
            "No Arrows" => Characteristic::NoArrows,
            "" => Characteristic::Standard,
            other => Characteristic::from_name(other),
        }
    }

    /// Parse a characteristic written under its current name
    pub fn from_name(name: &str) -> Self {
        match name {
            "Standard" => Characteristic::Standard,
            "OneSaber" => Characteristic::OneSaber,
            "NoArrows" => Characteristic::NoArrows,
            other => Characteristic::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Characteristic::Standard => "Standard",
            Characteristic::OneSaber => "OneSaber",
            Characteristic::NoArrows => "NoArrows",
            Characteristic::Custom(name) => name,
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Characteristic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Characteristic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Characteristic::from_name(&name))
    }
}

/// Rank written for difficulty names outside the canonical five
pub const UNKNOWN_RANK: i64 = 0;

/// Fixed rank of a canonical difficulty name
///
/// Easy=1, Normal=3, Hard=5, Expert=7, Expert+=9. `ExpertPlus` is the legacy
/// spelling of Expert+. Returns `None` for anything else.
pub fn difficulty_rank(difficulty: &str) -> Option<i64> {
    match difficulty {
        "Easy" => Some(1),
        "Normal" => Some(3),
        "Hard" => Some(5),
        "Expert" => Some(7),
        "ExpertPlus" | "Expert+" => Some(9),
        _ => None,
    }
}
