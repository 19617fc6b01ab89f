use portalcoords::{
    coords::{convert, convert_coordinate, Destination, RawCoordinate},
    dimensions::Direction,
};
use pretty_assertions::assert_eq;

#[test]
fn overworld_to_nether_floors_the_division() {
    for v in [-1000.0, -17.0, -8.0, -1.0, 0.0, 1.0, 7.0, 8.0, 100.0, 12345.0] {
        let result = convert(&v.to_string(), Direction::OverworldToNether);
        assert_eq!(result, (v / 8.0_f64).floor(), "input {v}");
    }
}

#[test]
fn nether_to_overworld_multiplies() {
    for v in [-250.0, -1.5, 0.0, 0.3, 12.0, 1024.0] {
        let result = convert(&v.to_string(), Direction::NetherToOverworld);
        assert_eq!(result, v * 8.0, "input {v}");
    }
}

#[test]
fn round_trip_is_lossy() {
    let nether = convert("100", Direction::OverworldToNether);
    assert_eq!(nether, 12.0);
    assert_eq!(
        convert(&nether.to_string(), Direction::NetherToOverworld),
        96.0
    );
}

#[test]
fn blank_and_garbage_input_convert_to_zero() {
    for input in ["", " ", "abc", "--5", "1,000"] {
        assert_eq!(convert(input, Direction::OverworldToNether), 0.0);
        assert_eq!(convert(input, Direction::NetherToOverworld), 0.0);
    }
}

#[test]
fn negative_coordinates_floor_towards_negative_infinity() {
    assert_eq!(convert("-1", Direction::OverworldToNether), -1.0);
    assert_eq!(convert("-9", Direction::OverworldToNether), -2.0);
}

#[test]
fn overworld_scenario() {
    let input = RawCoordinate::new("100", "64", "100");
    let output = convert_coordinate(&input, Direction::OverworldToNether);

    assert_eq!(
        output,
        Destination {
            x: 12.0,
            y: "64".to_string(),
            z: 12.0,
        }
    );
    assert_eq!(output.to_string(), "12, 64, 12");
    assert_eq!(output.copy_text(), "X: 12, Y: 64, Z: 12");
}

#[test]
fn nether_scenario() {
    let input = RawCoordinate::new("12", "64", "12");
    let output = convert_coordinate(&input, Direction::NetherToOverworld);
    assert_eq!(output.to_string(), "96, 64, 96");
}

#[test]
fn y_is_passed_through_or_zero() {
    let blank = convert_coordinate(&RawCoordinate::new("8", "", "8"), Direction::OverworldToNether);
    assert_eq!(blank.y, "0");

    let raw = convert_coordinate(&RawCoordinate::new("8", "70.5", "8"), Direction::NetherToOverworld);
    assert_eq!(raw.y, "70.5");
}

#[test]
fn fractional_nether_input_stays_fractional() {
    let output = convert_coordinate(&RawCoordinate::new("1.5", "0", "-0.25"), Direction::NetherToOverworld);
    assert_eq!(output.x, 12.0);
    assert_eq!(output.z, -2.0);

    let output = convert_coordinate(&RawCoordinate::new("0.3", "0", "0"), Direction::NetherToOverworld);
    assert_eq!(output.x.to_string(), "2.4");
}
