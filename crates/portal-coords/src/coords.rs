use crate::dimensions::{Direction, COORDINATE_SCALE};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Coordinates exactly as the user typed them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCoordinate {
    #[serde(deserialize_with = "lenient_string")]
    pub x: String,
    #[serde(deserialize_with = "lenient_string")]
    pub y: String,
    #[serde(deserialize_with = "lenient_string")]
    pub z: String,
}

impl RawCoordinate {
    pub fn new(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    pub fn get(&self, axis: Axis) -> &str {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    pub fn set(&mut self, axis: Axis, value: impl Into<String>) {
        let slot = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        };
        *slot = value.into();
    }
}

impl fmt::Display for RawCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

/// Result of converting a [`RawCoordinate`].
/// `y` is carried over verbatim, or `"0"` when left blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(serialize_with = "compact_number", deserialize_with = "lenient_number")]
    pub x: f64,
    #[serde(deserialize_with = "lenient_string")]
    pub y: String,
    #[serde(serialize_with = "compact_number", deserialize_with = "lenient_number")]
    pub z: f64,
}

impl Destination {
    /// Text placed on the clipboard
    pub fn copy_text(&self) -> String {
        format!("X: {}, Y: {}, Z: {}", self.x, self.y, self.z)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

/// Reads one axis the way a browser number field coerces it.
/// Blank, unparseable and non-finite input all read as 0.
pub fn parse_axis(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };

    let parsed = match radix {
        Some(radix) => parse_radix_digits(&trimmed[2..], radix),
        None => trimmed.parse::<f64>().ok(),
    };

    match parsed {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.0,
    }
}

/// Folds digits into an f64 so literals wider than 64 bits still read as a value
fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Converts one horizontal axis value.
/// Results that overflow to infinity read as 0, like unusable input does.
pub fn convert(value: &str, direction: Direction) -> f64 {
    let num = parse_axis(value);
    let result = match direction {
        Direction::OverworldToNether => (num / COORDINATE_SCALE).floor(),
        Direction::NetherToOverworld => num * COORDINATE_SCALE,
    };

    // -0 prints as "-0"
    if result == 0.0 || !result.is_finite() {
        0.0
    } else {
        result
    }
}

pub fn convert_coordinate(input: &RawCoordinate, direction: Direction) -> Destination {
    Destination {
        x: convert(&input.x, direction),
        y: if input.y.is_empty() {
            "0".to_string()
        } else {
            input.y.clone()
        },
        z: convert(&input.z, direction),
    }
}

fn compact_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Browsers store non-finite numbers as `null`
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// Stored axis values may be strings or plain numbers
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(v) => v.to_string(),
        Raw::Float(v) => v.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_axis_follows_number_field_coercion() {
        assert_eq!(parse_axis(""), 0.0);
        assert_eq!(parse_axis("   "), 0.0);
        assert_eq!(parse_axis("abc"), 0.0);
        assert_eq!(parse_axis("12abc"), 0.0);
        assert_eq!(parse_axis(" 42 "), 42.0);
        assert_eq!(parse_axis("-7.5"), -7.5);
        assert_eq!(parse_axis("1e3"), 1000.0);
        assert_eq!(parse_axis("0x10"), 16.0);
        assert_eq!(parse_axis("NaN"), 0.0);
        assert_eq!(parse_axis("inf"), 0.0);
    }

    #[test]
    fn wide_hex_literals_keep_their_value() {
        assert_eq!(parse_axis("0x10000000000000000"), 18446744073709551616.0);
        assert_eq!(parse_axis("0b101"), 5.0);
        assert_eq!(parse_axis("0x"), 0.0);
        assert_eq!(parse_axis("0xZZ"), 0.0);
    }

    #[test]
    fn overflowing_results_read_as_zero() {
        assert_eq!(convert("1e308", Direction::NetherToOverworld), 0.0);
        assert_eq!(convert("-1e308", Direction::NetherToOverworld), 0.0);
        assert_eq!(convert("1e308", Direction::OverworldToNether), 1.25e307);
    }

    #[test]
    fn destination_reads_null_axes_as_zero() {
        let destination: Destination =
            serde_json::from_str(r#"{"x":null,"y":"64","z":-12}"#).unwrap();
        assert_eq!(destination.x, 0.0);
        assert_eq!(destination.z, -12.0);
    }

    #[test]
    fn negative_zero_is_normalized() {
        let result = convert("-0", Direction::OverworldToNether);
        assert!(result.is_sign_positive());
        assert_eq!(result.to_string(), "0");
    }

    #[test]
    fn destination_serializes_whole_numbers_without_fraction() {
        let destination = Destination {
            x: 12.0,
            y: "64".to_string(),
            z: 2.4,
        };
        let json = serde_json::to_string(&destination).unwrap();
        assert_eq!(json, r#"{"x":12,"y":"64","z":2.4}"#);
    }

    #[test]
    fn raw_coordinate_accepts_numbers() {
        let raw: RawCoordinate = serde_json::from_str(r#"{"x":100,"y":"64","z":-3.5}"#).unwrap();
        assert_eq!(raw, RawCoordinate::new("100", "64", "-3.5"));
    }
}
