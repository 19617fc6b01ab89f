/// Horizontal distance covered by one Nether block, in Overworld blocks.
pub const COORDINATE_SCALE: f64 = 8.0;

pub const OVERWORLD_TO_NETHER_LABEL: &str = "Overworld → Nether";
pub const NETHER_TO_OVERWORLD_LABEL: &str = "Nether → Overworld";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Overworld,
    Nether,
}

impl Dimension {
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Overworld => "Overworld",
            Dimension::Nether => "Nether",
        }
    }
}

/// Which way a conversion runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    OverworldToNether,
    NetherToOverworld,
}

impl Direction {
    /// Direction whose input coordinates live in `dimension`
    pub fn from_source(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Overworld => Direction::OverworldToNether,
            Dimension::Nether => Direction::NetherToOverworld,
        }
    }

    pub fn source(&self) -> Dimension {
        match self {
            Direction::OverworldToNether => Dimension::Overworld,
            Direction::NetherToOverworld => Dimension::Nether,
        }
    }

    pub fn target(&self) -> Dimension {
        match self {
            Direction::OverworldToNether => Dimension::Nether,
            Direction::NetherToOverworld => Dimension::Overworld,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Direction::OverworldToNether => Direction::NetherToOverworld,
            Direction::NetherToOverworld => Direction::OverworldToNether,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::OverworldToNether => OVERWORLD_TO_NETHER_LABEL,
            Direction::NetherToOverworld => NETHER_TO_OVERWORLD_LABEL,
        }
    }

    /// Recovers a direction from a stored label.
    /// Anything other than the Nether → Overworld label reads as Overworld → Nether.
    pub fn from_label(label: &str) -> Self {
        if label == NETHER_TO_OVERWORLD_LABEL {
            Direction::NetherToOverworld
        } else {
            Direction::OverworldToNether
        }
    }
}
