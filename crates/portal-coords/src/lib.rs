pub mod coords;
pub mod dimensions;
