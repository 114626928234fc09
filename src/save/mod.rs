//! Progression persistence — the external-store adapter.
//!
//! The analysis path never touches this module: callers load a record once
//! before analyzing and write it back only after an explicit tier advance
//! or regress. Files are versioned pretty-printed JSON, written to a temp
//! file first and renamed for atomicity.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::progression::ProgressionRecord;

pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no saved progression for player '{0}'")]
    NotFound(String),
    #[error("save io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("save serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionSaveFile {
    pub version: u32,
    pub player_id: String,
    pub save_timestamp: u64,
    pub progression: ProgressionRecord,
}

/// Summary of a stored record, for display without holding the whole file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveInfo {
    pub player_id: String,
    pub save_timestamp: u64,
    pub tracks_tracked: usize,
}

fn player_path(dir: &Path, player_id: &str) -> PathBuf {
    dir.join(format!("progress_{}.json", player_id))
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Persist a player's progression record.
pub fn store_progression(
    dir: &Path,
    player_id: &str,
    record: &ProgressionRecord,
) -> Result<(), SaveError> {
    fs::create_dir_all(dir)?;

    let file = ProgressionSaveFile {
        version: SAVE_VERSION,
        player_id: player_id.to_string(),
        save_timestamp: current_timestamp(),
        progression: record.clone(),
    };
    let json = serde_json::to_string_pretty(&file)?;

    let path = player_path(dir, player_id);
    // Write to a temp file first, then rename for atomicity.
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json)?;
    fs::rename(&tmp_path, &path)?;

    Ok(())
}

/// Load a player's progression record.
pub fn load_progression(dir: &Path, player_id: &str) -> Result<ProgressionRecord, SaveError> {
    Ok(read_file(dir, player_id)?.progression)
}

/// Peek at a stored record without deserializing callers into it.
pub fn peek_progression(dir: &Path, player_id: &str) -> Option<SaveInfo> {
    read_file(dir, player_id).ok().map(|file| SaveInfo {
        player_id: file.player_id,
        save_timestamp: file.save_timestamp,
        tracks_tracked: file.progression.completed.len(),
    })
}

fn read_file(dir: &Path, player_id: &str) -> Result<ProgressionSaveFile, SaveError> {
    let path = player_path(dir, player_id);
    if !path.exists() {
        return Err(SaveError::NotFound(player_id.to_string()));
    }
    let json = fs::read_to_string(&path)?;
    let file: ProgressionSaveFile = serde_json::from_str(&json)?;

    // Version check — future versions can add migration here.
    if file.version != SAVE_VERSION {
        warn!(
            "[Save] Progression for '{}' has version {} but current version is {}. Loading anyway.",
            player_id, file.version, SAVE_VERSION
        );
    }

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn temp_save_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("stashwise_save_test_{}_{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_store_then_load_round_trips() {
        let dir = temp_save_dir("roundtrip");
        let tree = data::default_tree();
        let mut record = ProgressionRecord::new(&tree);
        record.advance(&tree, "gunsmith", 1);
        record.advance(&tree, "companion", 2);

        store_progression(&dir, "raider_7", &record).unwrap();
        let loaded = load_progression(&dir, "raider_7").unwrap();
        assert_eq!(loaded, record);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_player_is_not_found() {
        let dir = temp_save_dir("missing");
        match load_progression(&dir, "ghost") {
            Err(SaveError::NotFound(id)) => assert_eq!(id, "ghost"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_peek_reports_without_loading() {
        let dir = temp_save_dir("peek");
        let tree = data::default_tree();
        let record = ProgressionRecord::new(&tree);
        store_progression(&dir, "raider_9", &record).unwrap();

        let info = peek_progression(&dir, "raider_9").unwrap();
        assert_eq!(info.player_id, "raider_9");
        assert_eq!(info.tracks_tracked, tree.tracks.len());
        assert!(peek_progression(&dir, "nobody").is_none());

        fs::remove_dir_all(&dir).unwrap();
    }
}
