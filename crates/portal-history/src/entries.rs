use portalcoords::{
    coords::{Destination, RawCoordinate},
    dimensions::Direction,
};
use serde::{Deserialize, Serialize};

/// One copied conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionEntry {
    /// Creation time in milliseconds since the Unix epoch
    pub id: i64,
    pub from: RawCoordinate,
    pub to: Destination,
    /// Human-readable direction label, e.g. `Overworld → Nether`
    pub dimension: String,
    /// Local time of day the entry was created (`HH:MM`)
    pub timestamp: String,
}

impl ConversionEntry {
    pub fn new(
        id: i64,
        from: RawCoordinate,
        to: Destination,
        direction: Direction,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id,
            from,
            to,
            dimension: direction.label().to_string(),
            timestamp: timestamp.into(),
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::from_label(&self.dimension)
    }
}
