//! Subsystem tags attached to individual log calls.
//!
//! Tags are descriptive only: they never take part in filtering, they just
//! make a line easy to find. A call without a tag passes `None`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Core,
    Render,
    Physics,
    #[serde(rename = "AI")]
    Ai,
    Audio,
    Network,
    Input,
    #[serde(rename = "UI")]
    Ui,
    Scripting,
    Editor,
}

impl Tag {
    pub const ALL: [Tag; 10] = [
        Tag::Core,
        Tag::Render,
        Tag::Physics,
        Tag::Ai,
        Tag::Audio,
        Tag::Network,
        Tag::Input,
        Tag::Ui,
        Tag::Scripting,
        Tag::Editor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tag::Core => "Core",
            Tag::Render => "Render",
            Tag::Physics => "Physics",
            Tag::Ai => "AI",
            Tag::Audio => "Audio",
            Tag::Network => "Network",
            Tag::Input => "Input",
            Tag::Ui => "UI",
            Tag::Scripting => "Scripting",
            Tag::Editor => "Editor",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tag '{}'", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for Tag {
    type Err = UnknownTag;

    /// Case-insensitive lookup by tag name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}
