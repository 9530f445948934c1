//! Strongly typed domain primitives for the LPA document.
//!
//! These newtypes and small enums give identifiers and form answers a
//! type of their own so they cannot be mixed up with free text.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of an LPA document, also the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LpaId(pub String);

impl LpaId {
    /// Generates a new reference in the `M-XXXX-XXXX-XXXX` shape.
    pub fn generate() -> Self {
        let raw = Uuid::new_v4().simple().to_string().to_uppercase();
        let digits: Vec<char> = raw.chars().take(12).collect();
        let groups: Vec<String> = digits
            .chunks(4)
            .map(|chunk| chunk.iter().collect())
            .collect();
        Self(format!("M-{}", groups.join("-")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LpaId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LpaId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for LpaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier of an actor, generated once when the actor is first entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorUid(pub Uuid);

impl ActorUid {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorUid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ActorUid {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl std::fmt::Display for ActorUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Answer to a yes/no question that may not have been asked yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum YesNo {
    #[default]
    Unset,
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }

    pub fn is_no(&self) -> bool {
        matches!(self, Self::No)
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl FromStr for YesNo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            other => Err(format!("invalid yes/no answer: {}", other)),
        }
    }
}

/// A postal address. An address with no first line counts as not provided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Address {
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: String,
    #[serde(default)]
    pub line3: String,
    #[serde(default)]
    pub town: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    "GB".to_string()
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.line1.trim().is_empty()
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<&str> = [
            self.line1.as_str(),
            self.line2.as_str(),
            self.line3.as_str(),
            self.town.as_str(),
            self.postcode.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Which kind of LPA is being made. Decides the type-specific task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LpaType {
    #[default]
    PropertyAndAffairs,
    PersonalWelfare,
}

impl LpaType {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::PropertyAndAffairs => "property-and-affairs",
            Self::PersonalWelfare => "personal-welfare",
        }
    }
}

impl FromStr for LpaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "property-and-affairs" | "pfa" => Ok(Self::PropertyAndAffairs),
            "personal-welfare" | "hw" => Ok(Self::PersonalWelfare),
            other => Err(format!("unknown LPA type: {}", other)),
        }
    }
}

/// When a property and affairs LPA may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanBeUsedWhen {
    HasCapacity,
    CapacityLost,
}

impl FromStr for CanBeUsedWhen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "when-has-capacity" => Ok(Self::HasCapacity),
            "when-capacity-lost" => Ok(Self::CapacityLost),
            other => Err(format!("unknown option: {}", other)),
        }
    }
}

/// Whether personal welfare attorneys may decide on life-sustaining treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeSustainingTreatment {
    OptionA,
    OptionB,
}

impl FromStr for LifeSustainingTreatment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "option-a" => Ok(Self::OptionA),
            "option-b" => Ok(Self::OptionB),
            other => Err(format!("unknown option: {}", other)),
        }
    }
}
