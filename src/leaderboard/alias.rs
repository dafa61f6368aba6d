/// Curated pseudonym pool. Process-wide read-only data; deployments can
/// swap it via config without touching ranking logic.
pub const ECO_ALIASES: [&str; 20] = [
    "EcoChampion",
    "GreenGuru",
    "EcoWarrior",
    "NatureLover",
    "EcoFriend",
    "TreeHugger",
    "GreenThumb",
    "EcoHero",
    "PlanetGuard",
    "GreenKnight",
    "EcoMaster",
    "LeafWhisper",
    "GreenSage",
    "EcoExplorer",
    "NatureWise",
    "EcoVibes",
    "GreenSpark",
    "EcoStar",
    "GreenWave",
    "EcoSpirit",
];

/// Markers of internally generated ids that must never reach the board
/// verbatim.
const INTERNAL_MARKERS: [&str; 2] = ["demo_user", "user_"];

/// Deterministic display-name generator over an injected, immutable pool.
#[derive(Debug, Clone)]
pub struct AliasGenerator {
    aliases: Vec<String>,
}

impl Default for AliasGenerator {
    fn default() -> Self {
        Self {
            aliases: ECO_ALIASES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AliasGenerator {
    /// Build a generator over a custom pool; an empty pool falls back to
    /// the built-in list.
    pub fn with_aliases(aliases: Vec<String>) -> Self {
        if aliases.is_empty() {
            Self::default()
        } else {
            Self { aliases }
        }
    }

    /// A raw id counts as a self-chosen alias when it is longer than 8
    /// characters and free of internal generated-id markers. Self-chosen
    /// aliases carry no privacy concern and pass through unchanged.
    pub fn is_readable(user_id: &str) -> bool {
        user_id.chars().count() > 8 && !INTERNAL_MARKERS.iter().any(|m| user_id.contains(m))
    }

    /// Derive the display name for an entry at `position` (0-based, final
    /// rank order). Same (id, position) always yields the same alias; past
    /// the end of the pool a numbered fallback beats silently repeating a
    /// name.
    pub fn alias_for(&self, user_id: &str, position: usize) -> String {
        if Self::is_readable(user_id) {
            return user_id.to_string();
        }
        match self.aliases.get(position) {
            Some(name) => name.clone(),
            None => format!("EcoUser{}", position + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readable_id_passes_through() {
        let gen = AliasGenerator::default();
        assert_eq!(gen.alias_for("GreenMachine", 0), "GreenMachine");
    }

    #[test]
    fn test_internal_markers_are_masked() {
        let gen = AliasGenerator::default();
        assert_eq!(gen.alias_for("demo_user_12345", 0), "EcoChampion");
        assert_eq!(gen.alias_for("user_9f8e7d6c5b", 1), "GreenGuru");
    }

    #[test]
    fn test_short_id_is_masked() {
        let gen = AliasGenerator::default();
        assert_eq!(gen.alias_for("ab12", 2), "EcoWarrior");
        // Exactly 8 chars is still below the threshold
        assert_eq!(gen.alias_for("12345678", 3), "NatureLover");
    }

    #[test]
    fn test_deterministic_for_same_inputs() {
        let gen = AliasGenerator::default();
        let first = gen.alias_for("user_abc", 7);
        let second = gen.alias_for("user_abc", 7);
        assert_eq!(first, second);
        assert_eq!(first, "EcoHero");
    }

    #[test]
    fn test_position_past_the_pool_gets_numbered_fallback() {
        let gen = AliasGenerator::default();
        assert_eq!(gen.alias_for("user_x", 20), "EcoUser21");
        assert_eq!(gen.alias_for("user_y", 35), "EcoUser36");
    }

    #[test]
    fn test_custom_pool_is_used() {
        let gen = AliasGenerator::with_aliases(vec!["SolarFox".to_string()]);
        assert_eq!(gen.alias_for("user_a", 0), "SolarFox");
        assert_eq!(gen.alias_for("user_b", 1), "EcoUser2");
    }

    #[test]
    fn test_empty_custom_pool_falls_back_to_builtin() {
        let gen = AliasGenerator::with_aliases(Vec::new());
        assert_eq!(gen.alias_for("user_a", 0), "EcoChampion");
    }

    #[test]
    fn test_empty_id_is_not_readable() {
        assert!(!AliasGenerator::is_readable(""));
        assert!(AliasGenerator::is_readable("RiverOtter42"));
    }
}
