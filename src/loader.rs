//! Character data loading
//!
//! Joins the canonical character list (`characters.json`) with a language
//! overlay (`<language>.json`). Characters keep the order of the canonical
//! list; missing translations fall back to the id and an empty ability.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::DataError;
use crate::model::CharacterRecord;

/// Canonical list file name
pub const CHARACTERS_FILE: &str = "characters.json";

#[derive(Debug, Deserialize)]
struct CharacterEntry {
    id: String,
}

#[derive(Debug, Default, Deserialize)]
struct Translation {
    name: Option<String>,
    ability: Option<String>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| DataError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Path of the overlay file for a language
pub fn overlay_path(data_dir: &Path, language: &str) -> PathBuf {
    data_dir.join(format!("{}.json", language))
}

/// Load the deck for `language` from `data_dir`
pub fn load_deck(data_dir: &Path, language: &str) -> Result<Vec<CharacterRecord>, DataError> {
    let characters_path = data_dir.join(CHARACTERS_FILE);
    let entries: Vec<CharacterEntry> = read_json(&characters_path)?;
    let overlay: HashMap<String, Translation> = read_json(&overlay_path(data_dir, language))?;

    if entries.is_empty() {
        return Err(DataError::NoCharacters {
            path: characters_path,
        });
    }

    let deck = merge(entries, overlay)?;

    log::info!(
        "Loaded {} characters for language '{}'",
        deck.len(),
        language
    );
    Ok(deck)
}

fn merge(
    entries: Vec<CharacterEntry>,
    overlay: HashMap<String, Translation>,
) -> Result<Vec<CharacterRecord>, DataError> {
    let mut deck = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        if entry.id.trim().is_empty() {
            return Err(DataError::EmptyId { index });
        }

        let record = match overlay.get(&entry.id) {
            Some(translation) => CharacterRecord::new(
                entry.id.clone(),
                translation.name.clone().unwrap_or_else(|| entry.id.clone()),
                translation.ability.clone().unwrap_or_default(),
            ),
            None => {
                log::debug!("No translation for '{}'", entry.id);
                CharacterRecord::untranslated(entry.id)
            }
        };
        deck.push(record);
    }

    for record in &deck {
        log::debug!("Character {}", record);
    }

    for id in overlay.keys() {
        if !deck.iter().any(|c: &CharacterRecord| &c.id == id) {
            log::debug!("Overlay entry '{}' has no matching character", id);
        }
    }

    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_data(dir: &TempDir, characters: &str, overlay: &str) {
        fs::write(dir.path().join(CHARACTERS_FILE), characters).unwrap();
        fs::write(dir.path().join("de.json"), overlay).unwrap();
    }

    #[test]
    fn test_left_join_with_fallbacks() {
        let dir = TempDir::new().unwrap();
        write_data(
            &dir,
            r#"[{"id": "sprinter"}, {"id": "ghost"}, {"id": "juggler"}]"#,
            r#"{
                "sprinter": {"name": "Sprinterin", "ability": "Zieht doppelt."},
                "juggler": {"name": "Jongleur"},
                "unused": {"name": "Nobody"}
            }"#,
        );

        let deck = load_deck(dir.path(), "de").unwrap();
        assert_eq!(
            deck,
            vec![
                CharacterRecord::new("sprinter", "Sprinterin", "Zieht doppelt."),
                CharacterRecord::untranslated("ghost"),
                CharacterRecord::new("juggler", "Jongleur", ""),
            ]
        );
    }

    #[test]
    fn test_missing_overlay_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CHARACTERS_FILE), r#"[{"id": "a"}]"#).unwrap();

        let err = load_deck(dir.path(), "xx").unwrap_err();
        assert!(matches!(err, DataError::MissingFile { ref path, .. } if path.ends_with("xx.json")));
    }

    #[test]
    fn test_missing_id_field_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_data(&dir, r#"[{"name": "no id"}]"#, "{}");

        let err = load_deck(dir.path(), "de").unwrap_err();
        assert!(matches!(err, DataError::InvalidJson { .. }));
    }

    #[test]
    fn test_empty_id_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_data(&dir, r#"[{"id": "a"}, {"id": "  "}]"#, "{}");

        let err = load_deck(dir.path(), "de").unwrap_err();
        assert!(matches!(err, DataError::EmptyId { index: 1 }));
    }

    #[test]
    fn test_empty_list_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_data(&dir, "[]", "{}");

        let err = load_deck(dir.path(), "de").unwrap_err();
        assert!(matches!(err, DataError::NoCharacters { .. }));
    }
}
