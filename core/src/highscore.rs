use crate::config::{ContentProvider, FileContentProvider};
use crate::log;
use serde::{Deserialize, Serialize};

/// Persistence seam for the best score. A score of 0 stands for "no record
/// yet"; implementations return it when nothing has been stored.
pub trait HighScoreStore {
    fn get(&self) -> Result<u32, String>;
    fn set(&mut self, value: u32) -> Result<(), String>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

pub struct FileHighScoreStore {
    provider: FileContentProvider,
}

impl FileHighScoreStore {
    pub fn new(file_path: String) -> Self {
        Self {
            provider: FileContentProvider::new(file_path),
        }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn get(&self) -> Result<u32, String> {
        match self.provider.get_content()? {
            Some(content) => serde_yaml_ng::from_str::<HighScoreRecord>(&content)
                .map(|record| record.high_score)
                .map_err(|e| format!("Failed to parse high score data: {e}")),
            None => Ok(0),
        }
    }

    fn set(&mut self, value: u32) -> Result<(), String> {
        let content = serde_yaml_ng::to_string(&HighScoreRecord { high_score: value })
            .map_err(|e| format!("Failed to serialize high score: {e}"))?;
        self.provider.set_content(&content)
    }
}

#[derive(Debug, Default)]
pub struct MemoryHighScoreStore {
    value: u32,
}

impl HighScoreStore for MemoryHighScoreStore {
    fn get(&self) -> Result<u32, String> {
        Ok(self.value)
    }

    fn set(&mut self, value: u32) -> Result<(), String> {
        self.value = value;
        Ok(())
    }
}

/// Tracks the best score across runs of a session. Storage failures are
/// logged and play continues with the in-memory value.
pub struct HighScoreBoard<TStore> {
    store: TStore,
    best: u32,
}

impl<TStore: HighScoreStore> HighScoreBoard<TStore> {
    pub fn load(store: TStore) -> Self {
        let best = store.get().unwrap_or_else(|e| {
            log!("Failed to load high score: {e}");
            0
        });
        Self { store, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Records a finished run. Returns whether `score` strictly beat the
    /// previous best; merely equalling it is not enough.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(e) = self.store.set(score) {
            log!("Failed to persist high score: {e}");
        }
        true
    }
}
