use std::fmt;

/// Qualitative tier of a tone intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub const HIGH_THRESHOLD: f64 = 70.0;
    pub const MEDIUM_THRESHOLD: f64 = 40.0;

    /// Maps a percentage to its tier: `>= 70` is High, `>= 40` is Medium,
    /// anything lower is Low.
    ///
    /// Input is clamped to `0..=100` first, so negative values are Low and
    /// values above 100 are High. NaN is Low.
    pub fn classify(percentage: f64) -> Self {
        if percentage.is_nan() {
            return Intensity::Low;
        }
        let p = percentage.clamp(0.0, 100.0);
        if p >= Self::HIGH_THRESHOLD {
            Intensity::High
        } else if p >= Self::MEDIUM_THRESHOLD {
            Intensity::Medium
        } else {
            Intensity::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Intensity::High => "High",
            Intensity::Medium => "Medium",
            Intensity::Low => "Low",
        }
    }

    /// CSS modifier used by badges.
    pub fn css_class(self) -> &'static str {
        match self {
            Intensity::High => "intensity-high",
            Intensity::Medium => "intensity-medium",
            Intensity::Low => "intensity-low",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
