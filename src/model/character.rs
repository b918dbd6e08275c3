use std::fmt;

/// One printable character: canonical id plus localized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub id: String,
    /// Localized name, or the id when no translation exists
    pub display_name: String,
    /// Localized ability text, empty when no translation exists
    pub ability_text: String,
}

impl CharacterRecord {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        ability_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            ability_text: ability_text.into(),
        }
    }

    /// A record with no overlay entry: the name is the id and there is no ability.
    pub fn untranslated(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
            ability_text: String::new(),
        }
    }
}

impl fmt::Display for CharacterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.display_name == self.id {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} ({})", self.display_name, self.id)
        }
    }
}

/// Sort references to the deck alphabetically by display name.
///
/// The sort is stable, so characters sharing a name keep their deck order.
/// The deck itself is left untouched.
pub fn sorted_by_name(deck: &[CharacterRecord]) -> Vec<&CharacterRecord> {
    let mut sorted: Vec<&CharacterRecord> = deck.iter().collect();
    sorted.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    sorted
}
