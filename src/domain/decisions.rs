//! How a group of attorneys must act, and when replacements step in.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::types::YesNo;

/// How attorneys make decisions when more than one is appointed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionMode {
    Jointly,
    Severally,
    JointlyAndSeverally,
    JointlyForSomeSeverallyForOthers,
}

impl DecisionMode {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Jointly => "jointly",
            Self::Severally => "severally",
            Self::JointlyAndSeverally => "jointly-and-severally",
            Self::JointlyForSomeSeverallyForOthers => "jointly-for-some-severally-for-others",
        }
    }

    /// The mixed mode is the only one that carries free-text details.
    pub fn is_mixed(&self) -> bool {
        matches!(self, Self::JointlyForSomeSeverallyForOthers)
    }
}

impl FromStr for DecisionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "jointly" => Ok(Self::Jointly),
            "severally" => Ok(Self::Severally),
            "jointly-and-severally" => Ok(Self::JointlyAndSeverally),
            "jointly-for-some-severally-for-others" | "mixed" => {
                Ok(Self::JointlyForSomeSeverallyForOthers)
            }
            other => Err(format!("unknown decision mode: {}", other)),
        }
    }
}

/// Whether `mode` needs the extra "happy if one cannot act" answer for `actor_count` actors.
pub fn requires_happiness_confirmation(mode: DecisionMode, actor_count: usize) -> bool {
    actor_count > 1 && mode == DecisionMode::JointlyAndSeverally
}

/// The decision rule recorded for one attorney collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AttorneyDecisions {
    pub how: Option<DecisionMode>,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub happy_if_one_cannot_act: YesNo,
}

impl AttorneyDecisions {
    /// Returns the decisions with `how` set. Details survive only for the mixed
    /// mode, and a previous happiness answer only when the mode is unchanged.
    pub fn apply(&self, how: DecisionMode, details: &str) -> Self {
        let happy_if_one_cannot_act = if self.how == Some(how) {
            self.happy_if_one_cannot_act
        } else {
            YesNo::Unset
        };

        Self {
            how: Some(how),
            details: if how.is_mixed() {
                details.to_string()
            } else {
                String::new()
            },
            happy_if_one_cannot_act,
        }
    }

    pub fn is(&self, mode: DecisionMode) -> bool {
        self.how == Some(mode)
    }

    pub fn requires_happiness_confirmation(&self, actor_count: usize) -> bool {
        self.how
            .is_some_and(|how| requires_happiness_confirmation(how, actor_count))
    }

    /// True when the recorded answers are enough for `actor_count` actors.
    pub fn is_settled(&self, actor_count: usize) -> bool {
        if actor_count <= 1 {
            return true;
        }
        match self.how {
            None => false,
            Some(how) if how.is_mixed() && self.details.trim().is_empty() => false,
            Some(how) if requires_happiness_confirmation(how, actor_count) => {
                self.happy_if_one_cannot_act.is_yes()
            }
            Some(_) => true,
        }
    }

    /// Drops answers that no longer apply. `keep` says whether the decision
    /// is still asked for at all.
    pub fn prune(&mut self, actor_count: usize, keep: bool) {
        if !keep {
            *self = Self::default();
            return;
        }
        if !self.how.is_some_and(|how| how.is_mixed()) {
            self.details.clear();
        }
        if !self.requires_happiness_confirmation(actor_count) {
            self.happy_if_one_cannot_act = YesNo::Unset;
        }
    }
}

/// When replacement attorneys take over from jointly and severally acting attorneys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepIn {
    WhenAllCanNoLongerAct,
    WhenOneCanNoLongerAct,
    AnotherWay,
}

impl FromStr for StepIn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "when-all-can-no-longer-act" => Ok(Self::WhenAllCanNoLongerAct),
            "one" | "when-one-can-no-longer-act" => Ok(Self::WhenOneCanNoLongerAct),
            "other" | "another-way" => Ok(Self::AnotherWay),
            other => Err(format!("unknown step-in rule: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReplacementStepIn {
    pub how: Option<StepIn>,
    #[serde(default)]
    pub details: String,
}

impl ReplacementStepIn {
    pub fn new(how: StepIn, details: &str) -> Self {
        Self {
            how: Some(how),
            details: if how == StepIn::AnotherWay {
                details.to_string()
            } else {
                String::new()
            },
        }
    }

    pub fn is_settled(&self) -> bool {
        match self.how {
            None => false,
            Some(StepIn::AnotherWay) => !self.details.trim().is_empty(),
            Some(_) => true,
        }
    }
}

#[cfg(test)]
#[path = "tests/decisions_tests.rs"]
mod tests;
