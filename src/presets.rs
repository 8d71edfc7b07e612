use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A named generation preset: grid size in cells per side and the default
/// toggle count for the scatter strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub size: usize,
    pub toggles: usize,
}

const PRESETS_DATA: &[Preset] = &[
    Preset {
        name: "thumbnail",
        size: 8,
        toggles: 12,
    },
    Preset {
        name: "small",
        size: 16,
        toggles: 50,
    },
    Preset {
        name: "medium",
        size: 32,
        toggles: 220,
    },
    Preset {
        name: "large",
        size: 64,
        toggles: 960,
    },
    Preset {
        name: "poster",
        size: 128,
        toggles: 4000,
    },
];

pub fn all_presets() -> &'static [Preset] {
    PRESETS_DATA
}

// Build a name -> preset map once for O(1) lookup.
static PRESET_MAP: Lazy<HashMap<&'static str, &'static Preset>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for p in PRESETS_DATA.iter() {
        m.insert(p.name, p);
    }
    m
});

pub fn get_preset(name: &str) -> Option<&'static Preset> {
    PRESET_MAP.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_presets_contains_expected_entries() {
        let all = all_presets();
        assert_eq!(all.len(), 5);
        let names: Vec<&str> = all.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["thumbnail", "small", "medium", "large", "poster"]
        );
        // Every preset leaves room for an interior.
        assert!(all.iter().all(|p| p.size > 2));
    }

    #[test]
    fn get_preset_returns_expected() {
        let p = get_preset("medium").expect("medium should exist");
        assert_eq!(p.size, 32);
        assert_eq!(p.toggles, 220);
        assert!(get_preset("unknown").is_none());
    }
}
