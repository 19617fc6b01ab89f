use log::{info, Level, LevelFilter, Log, Metadata, Record};
use portalcoords::{
    coords::{self, Axis},
    dimensions::Direction,
};
use portalhistory::{Session, Storage, StorageError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub const HISTORY_STORAGE_KEY: &str = "antigravity-history";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);

    #[wasm_bindgen(catch, js_namespace = localStorage, js_name = getItem)]
    fn local_storage_get(key: &str) -> Result<Option<String>, JsValue>;

    #[wasm_bindgen(catch, js_namespace = localStorage, js_name = setItem)]
    fn local_storage_set(key: &str, value: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = localStorage, js_name = removeItem)]
    fn local_storage_remove(key: &str) -> Result<(), JsValue>;
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            console_log(&format!("[WASM] {} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

#[wasm_bindgen]
pub fn initialize() {
    console_error_panic_hook::set_once();

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }

    info!("Loaded");
}

/// Converts a single axis value. `is_nether` means the value is a Nether coordinate.
#[wasm_bindgen]
pub fn convert(value: &str, is_nether: bool) -> f64 {
    coords::convert(value, direction_for(is_nether))
}

fn direction_for(is_nether: bool) -> Direction {
    if is_nether {
        Direction::NetherToOverworld
    } else {
        Direction::OverworldToNether
    }
}

fn parse_axis_name(axis: &str) -> Result<Axis, JsError> {
    match axis {
        "x" | "X" => Ok(Axis::X),
        "y" | "Y" => Ok(Axis::Y),
        "z" | "Z" => Ok(Axis::Z),
        _ => Err(JsError::new(&format!("Unknown axis '{axis}'. Allowed: x | y | z"))),
    }
}

/// The browser's `localStorage`, one key
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn backend_error(e: JsValue) -> StorageError {
    StorageError::Backend(format!("{e:?}"))
}

impl Storage for LocalStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        local_storage_get(&self.key).map_err(backend_error)
    }

    fn save(&mut self, data: &str) -> Result<(), StorageError> {
        local_storage_set(&self.key, data).map_err(backend_error)
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        local_storage_remove(&self.key).map_err(backend_error)
    }
}

#[derive(Serialize)]
struct JSLoaded<'a> {
    inputs: &'a coords::RawCoordinate,
    is_nether: bool,
    displayed: coords::Destination,
}

/// Calculator state for one page
#[wasm_bindgen]
pub struct Calculator {
    session: Session<LocalStorage>,
}

#[wasm_bindgen]
impl Calculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Calculator {
        Calculator {
            session: Session::new(LocalStorage::new(HISTORY_STORAGE_KEY)),
        }
    }

    #[wasm_bindgen(js_name = setAxis)]
    pub fn set_axis(&mut self, axis: &str, value: &str) -> Result<(), JsError> {
        self.session.set_axis(parse_axis_name(axis)?, value);
        Ok(())
    }

    #[wasm_bindgen(js_name = isNether)]
    pub fn is_nether(&self) -> bool {
        self.session.direction() == Direction::NetherToOverworld
    }

    #[wasm_bindgen(js_name = setNether)]
    pub fn set_nether(&mut self, is_nether: bool) {
        self.session.set_direction(direction_for(is_nether));
    }

    /// Flips the direction and returns the new `isNether` value
    pub fn toggle(&mut self) -> bool {
        self.session.toggle_direction() == Direction::NetherToOverworld
    }

    pub fn inputs(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(self.session.inputs())?)
    }

    pub fn displayed(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.session.displayed())?)
    }

    /// Records the current conversion and returns the text to put on the clipboard
    pub fn copy(&mut self) -> String {
        self.session.copy()
    }

    pub fn history(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(self.session.history())?)
    }

    /// Restores the history entry at `index` as the active input
    pub fn load(&mut self, index: usize) -> Result<JsValue, JsError> {
        let displayed = self
            .session
            .restore(index)
            .ok_or_else(|| JsError::new(&format!("No history entry at {index}")))?;

        let loaded = JSLoaded {
            inputs: self.session.inputs(),
            is_nether: self.is_nether(),
            displayed,
        };
        Ok(serde_wasm_bindgen::to_value(&loaded)?)
    }

    pub fn clear(&mut self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(self.session.clear_history())?)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
