use serde::Serialize;

use crate::metrics::intensity::Intensity;
use crate::text::capitalize;

/// Profile shown when a campaign carries no usable tone data.
pub const DEFAULT_TONE_PROFILE: [(&str, u8); 5] = [
    ("professional", 80),
    ("authoritative", 65),
    ("friendly", 50),
    ("direct", 75),
    ("persuasive", 70),
];

/// One tone with its intensity in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToneEntry {
    pub name: String,
    pub intensity: u8,
}

impl ToneEntry {
    pub fn new(name: impl Into<String>, intensity: u8) -> Self {
        Self {
            name: name.into(),
            intensity: intensity.min(100),
        }
    }

    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    pub fn level(&self) -> Intensity {
        Intensity::classify(f64::from(self.intensity))
    }
}

/// Ordered tone name → intensity mapping.
///
/// Order follows the source blob, which is also the order the cards are
/// laid out in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ToneProfile {
    entries: Vec<ToneEntry>,
}

impl ToneProfile {
    pub fn default_profile() -> Self {
        DEFAULT_TONE_PROFILE
            .iter()
            .map(|(name, intensity)| ToneEntry::new(*name, *intensity))
            .collect()
    }

    /// Adds an entry, replacing the intensity of an existing one with the
    /// same name.
    pub fn insert(&mut self, name: impl Into<String>, intensity: u8) {
        let entry = ToneEntry::new(name, intensity);
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => existing.intensity = entry.intensity,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.intensity)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToneEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column count for the tone card grid: between 2 and 5.
    pub fn grid_columns(&self) -> usize {
        self.entries.len().clamp(2, 5)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default_profile()
    }
}

impl FromIterator<ToneEntry> for ToneProfile {
    fn from_iter<I: IntoIterator<Item = ToneEntry>>(iter: I) -> Self {
        let mut profile = ToneProfile::default();
        for entry in iter {
            profile.insert(entry.name, entry.intensity);
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_keeps_declared_order() {
        let names: Vec<_> = ToneProfile::default_profile()
            .iter()
            .map(|e| e.name.clone())
            .collect();
        assert_eq!(
            names,
            ["professional", "authoritative", "friendly", "direct", "persuasive"]
        );
    }

    #[test]
    fn insert_replaces_existing_names() {
        let mut profile = ToneProfile::default();
        profile.insert("bold", 20);
        profile.insert("calm", 30);
        profile.insert("bold", 90);
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.get("bold"), Some(90));
    }

    #[test]
    fn grid_columns_are_clamped() {
        let single: ToneProfile = [ToneEntry::new("bold", 10)].into_iter().collect();
        assert_eq!(single.grid_columns(), 2);
        assert_eq!(ToneProfile::default_profile().grid_columns(), 5);

        let many: ToneProfile = (0..8).map(|i| ToneEntry::new(format!("t{i}"), 50)).collect();
        assert_eq!(many.grid_columns(), 5);
    }

    #[test]
    fn entries_are_capped_and_classified() {
        let entry = ToneEntry::new("direct", 140);
        assert_eq!(entry.intensity, 100);
        assert_eq!(entry.display_name(), "Direct");
        assert_eq!(entry.level(), Intensity::High);
    }
}
