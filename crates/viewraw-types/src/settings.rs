use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::events::{GestureKind, Outcome};

/// Setting key under which the click policy is stored.
pub const CLICK_METHOD: &str = "clickMethod";

/// Which mouse button opens the detail view. The other one copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClickPolicy {
    #[default]
    Left,
    Right,
}

impl ClickPolicy {
    pub const ALL: [ClickPolicy; 2] = [ClickPolicy::Left, ClickPolicy::Right];

    /// Left: Primary views, Secondary copies. Right is the exact mirror.
    pub fn outcome_for(self, gesture: GestureKind) -> Outcome {
        match (self, gesture) {
            (Self::Left, GestureKind::Primary) | (Self::Right, GestureKind::Secondary) => {
                Outcome::Present
            }
            (Self::Left, GestureKind::Secondary) | (Self::Right, GestureKind::Primary) => {
                Outcome::CopyContent
            }
        }
    }

    /// Instructional label for the message action button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "View Raw (Left Click) / Copy Raw (Right Click)",
            Self::Right => "Copy Raw (Left Click) / View Raw (Right Click)",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for ClickPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownClickPolicy(pub String);

impl fmt::Display for UnknownClickPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown click method '{}', expected Left or Right", self.0)
    }
}

impl std::error::Error for UnknownClickPolicy {}

impl FromStr for ClickPolicy {
    type Err = UnknownClickPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Left" => Ok(Self::Left),
            "Right" => Ok(Self::Right),
            other => Err(UnknownClickPolicy(other.to_owned())),
        }
    }
}

/// One labeled value of an enumerated setting.
#[derive(Debug, Clone, Serialize)]
pub struct SelectChoice {
    pub label: &'static str,
    pub value: ClickPolicy,
    pub default: bool,
}

/// Declaration of an enumerated setting, as handed to the host's
/// settings UI.
#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub key: &'static str,
    pub description: &'static str,
    pub options: [SelectChoice; 2],
}

impl SelectOption {
    pub fn click_method() -> Self {
        Self {
            key: CLICK_METHOD,
            description: "Change the button to view the raw content/data of any message.",
            options: [
                SelectChoice {
                    label: "Left Click to view the raw content.",
                    value: ClickPolicy::Left,
                    default: true,
                },
                SelectChoice {
                    label: "Right click to view the raw content.",
                    value: ClickPolicy::Right,
                    default: false,
                },
            ],
        }
    }

    pub fn default_value(&self) -> ClickPolicy {
        self.options
            .iter()
            .find(|choice| choice.default)
            .map(|choice| choice.value)
            .unwrap_or_default()
    }
}
