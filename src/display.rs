//! Display settings: which metadata fields are prepended to each line.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Metadata fields rendered in front of the level label.
    ///
    /// Fields always appear in the same order regardless of which bits are
    /// set: date, thread, file info. The level label is always rendered and
    /// the tag is rendered whenever the call carries one.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct DisplaySettings: u32 {
        /// `[HH:MM:SS]` local time
        const SHOW_DATE = 1 << 0;
        /// `[thread]` name, or id for unnamed threads
        const SHOW_THREAD = 1 << 1;
        /// `[file:function@line]` of the call site
        const SHOW_FILE_INFO = 1 << 2;
        const SHOW_ALL = Self::SHOW_DATE.bits()
            | Self::SHOW_THREAD.bits()
            | Self::SHOW_FILE_INFO.bits();
    }
}

impl DisplaySettings {
    /// Only the level label (and tag) is rendered
    pub const NONE: DisplaySettings = DisplaySettings::empty();

    /// Build settings from raw bits. Unknown bits are kept but render nothing.
    pub const fn from_raw(bits: u32) -> Self {
        DisplaySettings::from_bits_retain(bits)
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings::SHOW_ALL
    }
}
