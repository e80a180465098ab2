//! Headless run settings
//!
//! Loaded from JSON; every field is optional and falls back to defaults.

use serde::{Deserialize, Serialize};

/// How a headless session is played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    /// Seed for the shooter RNG
    pub seed: u64,
    /// Level to start from (1-based)
    pub start_level: u32,
    /// Stop after clearing this many levels (0 = no limit)
    pub max_levels: u32,
    /// Stop after this many ticks in total
    pub max_ticks: u64,
    /// Let the autopilot drive the defender
    pub autopilot: bool,
    /// Log the ASCII playfield every N ticks (0 = never)
    pub debug_render_every: u64,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            seed: 1,
            start_level: 1,
            max_levels: 3,
            // About five minutes at 60 frames per second
            max_ticks: 60 * 60 * 5,
            autopilot: true,
            debug_render_every: 0,
        }
    }
}

impl RunSettings {
    /// Parse settings JSON, then sanitize out-of-range values
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Replace values the simulation cannot start from
    pub fn sanitized(mut self) -> Self {
        if self.start_level == 0 {
            log::warn!("start_level 0 is invalid, using 1");
            self.start_level = 1;
        }
        if self.max_ticks == 0 {
            let fallback = Self::default().max_ticks;
            log::warn!("max_ticks 0 is invalid, using {}", fallback);
            self.max_ticks = fallback;
        }
        self
    }

    /// Whether another level should be started after clearing `cleared`
    pub fn wants_level_after(&self, cleared: u32) -> bool {
        self.max_levels == 0 || cleared < self.max_levels
    }
}
