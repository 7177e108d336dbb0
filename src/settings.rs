//! Card settings and preferences
//!
//! Defaults, optionally overridden from the page URL query. Nothing is stored.

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Particles per burst, as a half-open band `[min, max)`
    pub fn burst_particles(&self) -> (usize, usize) {
        match self {
            QualityPreset::Low => (20, 30),
            QualityPreset::Medium => (40, 60),
            QualityPreset::High => (60, 80),
        }
    }

    /// Maximum simultaneously active fireworks
    pub fn max_fireworks(&self) -> usize {
        match self {
            QualityPreset::Low => 8,
            QualityPreset::Medium => 24,
            QualityPreset::High => 48,
        }
    }
}

/// Card settings/preferences
#[derive(Debug, Clone)]
pub struct Settings {
    /// Fireworks quality preset
    pub quality: QualityPreset,
    /// Reduced motion (slower spawning, no glow halos)
    pub reduced_motion: bool,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Ambient pop hearts on the celebration screen
    pub pop_hearts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            reduced_motion: false,
            music_volume: 0.7,
            pop_hearts: true,
        }
    }
}

impl Settings {
    /// Fireworks spawn interval in ms (doubled under reduced motion)
    pub fn firework_interval_ms(&self) -> u32 {
        let base = crate::consts::FIREWORK_INTERVAL_MS;
        if self.reduced_motion { base * 2 } else { base }
    }

    /// Whether particles get a second, larger glow pass
    pub fn glow_enabled(&self) -> bool {
        !self.reduced_motion
    }

    /// Music volume clamped to the valid range
    pub fn effective_music_volume(&self) -> f64 {
        self.music_volume.clamp(0.0, 1.0) as f64
    }

    /// Apply `key=value` overrides (as found in a URL query string)
    pub fn apply_overrides<'a>(&mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (key, value) in pairs {
            match key {
                "quality" => match QualityPreset::from_str(value) {
                    Some(preset) => self.quality = preset,
                    None => log::warn!("Ignoring unknown quality preset: {}", value),
                },
                "reduced_motion" => self.reduced_motion = matches!(value, "1" | "true" | "yes"),
                "pop_hearts" => self.pop_hearts = !matches!(value, "0" | "false" | "no"),
                "volume" => match value.parse::<f32>() {
                    Ok(v) => self.music_volume = v.clamp(0.0, 1.0),
                    Err(_) => log::warn!("Ignoring invalid volume: {}", value),
                },
                _ => {}
            }
        }
    }

    /// Defaults plus URL query overrides (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let mut settings = Self::default();

        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Ok(params) = web_sys::UrlSearchParams::new_with_str(&query) {
            let mut pairs = Vec::new();
            for key in ["quality", "reduced_motion", "pop_hearts", "volume"] {
                if let Some(value) = params.get(key) {
                    pairs.push((key, value));
                }
            }
            settings.apply_overrides(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        }

        log::info!(
            "Settings: quality={}, reduced_motion={}",
            settings.quality.as_str(),
            settings.reduced_motion
        );
        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() {
        assert_eq!(QualityPreset::from_str("HIGH"), Some(QualityPreset::High));
        assert_eq!(QualityPreset::from_str("med"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::from_str("ultra"), None);
    }

    #[test]
    fn test_overrides() {
        let mut settings = Settings::default();
        settings.apply_overrides([("quality", "low"), ("reduced_motion", "1"), ("volume", "3")]);
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(settings.reduced_motion);
        assert_eq!(settings.music_volume, 1.0);
        assert_eq!(settings.firework_interval_ms(), 1000);
        assert!(!settings.glow_enabled());
    }

    #[test]
    fn test_bad_overrides_are_ignored() {
        let mut settings = Settings::default();
        settings.apply_overrides([("quality", "ultra"), ("volume", "loud"), ("other", "x")]);
        assert_eq!(settings.quality, QualityPreset::Medium);
        assert_eq!(settings.music_volume, 0.7);
    }

    #[test]
    fn test_defaults_without_overrides() {
        let mut settings = Settings::load();
        assert_eq!(settings.quality, QualityPreset::Medium);
        assert!(settings.pop_hearts);
        settings.apply_overrides(std::iter::empty());
        assert_eq!(settings.music_volume, 0.7);
        assert_eq!(settings.firework_interval_ms(), 500);
        assert!(settings.glow_enabled());
    }
}
