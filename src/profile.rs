//! Named verbosity presets bundling a level filter with display settings.

use crate::display::DisplaySettings;
use crate::level::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Nothing at all
    Silent,
    /// Errors and critical failures, bare lines
    Quiet,
    /// Everything but debug chatter, with timestamps
    Normal,
    /// Every level, with timestamps and threads
    Verbose,
    /// Every level, every field
    Full,
}

impl Profile {
    pub fn levels(self) -> LevelFilter {
        match self {
            Profile::Silent => LevelFilter::NONE,
            Profile::Quiet => LevelFilter::ERROR | LevelFilter::CRITICAL,
            Profile::Normal => {
                LevelFilter::INFO | LevelFilter::WARNING | LevelFilter::ERROR | LevelFilter::CRITICAL
            }
            Profile::Verbose | Profile::Full => LevelFilter::ALL,
        }
    }

    pub fn display(self) -> DisplaySettings {
        match self {
            Profile::Silent | Profile::Quiet => DisplaySettings::NONE,
            Profile::Normal => DisplaySettings::SHOW_DATE,
            Profile::Verbose => DisplaySettings::SHOW_DATE | DisplaySettings::SHOW_THREAD,
            Profile::Full => DisplaySettings::SHOW_ALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn test_normal_drops_debug_only() {
        let levels = Profile::Normal.levels();
        assert!(!levels.allows(Level::Debug));
        for level in [Level::Info, Level::Warning, Level::Error, Level::Critical] {
            assert!(levels.allows(level));
        }
    }

    #[test]
    fn test_silent_suppresses_everything() {
        for level in Level::ALL {
            assert!(!Profile::Silent.levels().allows(level));
        }
        assert_eq!(Profile::Silent.display(), DisplaySettings::NONE);
    }

    #[test]
    fn test_full_enables_everything() {
        assert_eq!(Profile::Full.levels(), LevelFilter::ALL);
        assert_eq!(Profile::Full.display(), DisplaySettings::SHOW_ALL);
    }
}
