use crate::{entries::ConversionEntry, storage::Storage};
use chrono::{DateTime, Local, TimeZone};
use log::{debug, error, info, warn};
use portalcoords::{
    coords::{Destination, RawCoordinate},
    dimensions::Direction,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const MAX_HISTORY_ENTRIES: usize = 10;

const TIMESTAMP_FORMAT: &str = "%H:%M";

/// Copied conversions, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<ConversionEntry>,
}

impl History {
    pub fn entries(&self) -> &[ConversionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ConversionEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversionEntry> {
        self.entries.iter()
    }

    fn push_front(&mut self, entry: ConversionEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
    }

    /// Next free identifier at or after `millis`
    fn next_id(&self, millis: i64) -> i64 {
        match self.entries.first() {
            Some(newest) if newest.id >= millis => newest.id + 1,
            _ => millis,
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a ConversionEntry;
    type IntoIter = std::slice::Iter<'a, ConversionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Returns the inputs and direction that produced `entry`
pub fn load_entry(entry: &ConversionEntry) -> (RawCoordinate, Direction) {
    (entry.from.clone(), entry.direction())
}

fn parse_history(data: &str) -> History {
    if data.trim().is_empty() {
        return History::default();
    }

    match serde_json::from_str::<History>(data) {
        Ok(mut history) => {
            history.entries.truncate(MAX_HISTORY_ENTRIES);
            history
        }
        Err(e) => {
            warn!("Discarding unreadable history: {e}");
            History::default()
        }
    }
}

fn read_history<S: Storage>(storage: &S) -> History {
    let history = match storage.load() {
        Ok(Some(data)) => parse_history(&data),
        Ok(None) => History::default(),
        Err(e) => {
            warn!("Failed to load history: {e}");
            History::default()
        }
    };

    debug!("Loaded {} history entries", history.len());
    history
}

/// The history together with the storage slot it is mirrored to
pub struct HistoryStore<S: Storage> {
    storage: S,
    history: History,
}

impl<S: Storage> HistoryStore<S> {
    /// Reads the stored history. Missing or corrupt data gives an empty one.
    pub fn load(storage: S) -> Self {
        let history = read_history(&storage);
        Self { storage, history }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Re-reads the history from storage, dropping the in-memory copy
    pub fn reload(&mut self) -> &History {
        self.history = read_history(&self.storage);
        &self.history
    }

    pub fn commit(
        &mut self,
        from: &RawCoordinate,
        to: &Destination,
        direction: Direction,
    ) -> &History {
        self.commit_at(from, to, direction, &Local::now())
    }

    /// Records a conversion made at `now`
    pub fn commit_at<Tz: TimeZone>(
        &mut self,
        from: &RawCoordinate,
        to: &Destination,
        direction: Direction,
        now: &DateTime<Tz>,
    ) -> &History
    where
        Tz::Offset: Display,
    {
        let entry = ConversionEntry::new(
            self.history.next_id(now.timestamp_millis()),
            from.clone(),
            to.clone(),
            direction,
            now.format(TIMESTAMP_FORMAT).to_string(),
        );

        debug!("Recording {} ({}) -> {}", entry.from, entry.dimension, entry.to);

        self.history.push_front(entry);
        self.persist();
        &self.history
    }

    pub fn clear(&mut self) -> &History {
        self.history = History::default();

        match self.storage.clear() {
            Ok(()) => info!("History cleared"),
            Err(e) => error!("Failed to clear stored history: {e}"),
        }

        &self.history
    }

    fn persist(&mut self) {
        let data = match serde_json::to_string(&self.history) {
            Ok(v) => v,
            Err(e) => {
                error!("Failed to serialize history: {e}");
                return;
            }
        };

        if let Err(e) = self.storage.save(&data) {
            error!("Failed to save history: {e}");
        }
    }
}
