use crate::{
    entries::ConversionEntry,
    history::{load_entry, History, HistoryStore},
    storage::Storage,
};
use chrono::{DateTime, Local, TimeZone};
use portalcoords::{
    coords::{convert_coordinate, Axis, Destination, RawCoordinate},
    dimensions::Direction,
};
use std::fmt::Display;

/// Editing state of one calculator window
pub struct Session<S: Storage> {
    inputs: RawCoordinate,
    direction: Direction,
    store: HistoryStore<S>,
}

impl<S: Storage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self {
            inputs: RawCoordinate::default(),
            direction: Direction::default(),
            store: HistoryStore::load(storage),
        }
    }

    pub fn inputs(&self) -> &RawCoordinate {
        &self.inputs
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn history(&self) -> &History {
        self.store.history()
    }

    pub fn store(&self) -> &HistoryStore<S> {
        &self.store
    }

    pub fn set_axis(&mut self, axis: Axis, value: impl Into<String>) {
        self.inputs.set(axis, value);
    }

    pub fn set_inputs(&mut self, inputs: RawCoordinate) {
        self.inputs = inputs;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn toggle_direction(&mut self) -> Direction {
        self.direction = self.direction.toggled();
        self.direction
    }

    /// The converted coordinates for the current inputs
    pub fn displayed(&self) -> Destination {
        convert_coordinate(&self.inputs, self.direction)
    }

    /// Returns the clipboard text for the current result and records it in the history
    pub fn copy(&mut self) -> String {
        self.copy_at(&Local::now())
    }

    pub fn copy_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        let displayed = self.displayed();
        self.store.commit_at(&self.inputs, &displayed, self.direction, now);
        displayed.copy_text()
    }

    pub fn clear_history(&mut self) -> &History {
        self.store.clear()
    }

    /// Makes the entry at `index` the active input. Returns the recomputed result.
    pub fn restore(&mut self, index: usize) -> Option<Destination> {
        let entry = self.store.history().get(index)?.clone();
        Some(self.restore_entry(&entry))
    }

    pub fn restore_entry(&mut self, entry: &ConversionEntry) -> Destination {
        let (inputs, direction) = load_entry(entry);
        self.inputs = inputs;
        self.direction = direction;
        self.displayed()
    }
}
