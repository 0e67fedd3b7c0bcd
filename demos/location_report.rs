//! Demonstration of coordinate text, distance and location reports
//!
//! Run with `RUST_LOG=geocoords=trace` to see parser and formatter logs.

use geocoords::{
    degree_display, format_coordinate, parse_coordinate, Coordinate, DisplayConfig, EarthModel,
    GeodesyConfig, LocationReport, Syntax, ALTITUDE_UNKNOWN,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Geographic Coordinates - Location Report Demo ===\n");

    demonstrate_text_conversion();
    demonstrate_distance();
    demonstrate_reports();
}

fn demonstrate_text_conversion() {
    println!("1. Coordinate Text:");
    for value in [61.51, -0.5, 179.999_999_999, -180.0] {
        let deg_min = format_coordinate(value, Syntax::DegMin);
        let deg_min_sec = format_coordinate(value, Syntax::DegMinSec);
        match (deg_min, deg_min_sec) {
            (Ok(a), Ok(b)) => println!("   {:>16} -> {:<14} {}", value, a, b),
            (Err(e), _) | (_, Err(e)) => println!("   {:>16} -> error: {}", value, e),
        }
    }

    for text in ["61:30.6", "61:30:36.0", "-180:0:0", "90:60.0", "12.5"] {
        match parse_coordinate(text) {
            Ok(degrees) => println!("   {:>16} -> {:.8}", text, degrees),
            Err(e) => println!("   {:>16} -> {}", text, e),
        }
    }

    if let Ok(display) = degree_display(61.51) {
        println!("   Display: {}", display);
    }
    println!();
}

fn demonstrate_distance() {
    println!("2. Distance and Azimuth:");
    let london = Coordinate::from_text("51:30:26.6", "-1:52:20.0", 35.0);
    let paris = Coordinate::from_text("48:51:23.8", "2:21:07.9", ALTITUDE_UNKNOWN);

    match (london, paris) {
        (Ok(london), Ok(paris)) => {
            println!("   Sphere:    {:.1} km", london.distance(&paris) / 1000.0);
            println!("   Azimuth:   {:.2}°", london.azimuth_to(&paris));

            let model = EarthModel::wgs84();
            if let Some(geodesic) = model.inverse(&london, &paris) {
                println!("   Ellipsoid: {:.1} km", geodesic.distance_m / 1000.0);
                println!("   Bearing:   {:.2}°", geodesic.initial_bearing_deg);
            }
        }
        (Err(e), _) | (_, Err(e)) => println!("   error: {}", e),
    }
    println!();
}

fn demonstrate_reports() {
    println!("3. Location Reports:");
    let config = GeodesyConfig::from_json_str(r#"{"display": {"syntax": "deg_min"}}"#)
        .unwrap_or_default();

    let Ok(position) = Coordinate::new(60.1699, 24.9384, 12.0) else {
        return;
    };

    for display in [config.display, DisplayConfig::default()] {
        match LocationReport::from_coordinate(&position, &display) {
            Ok(report) => {
                let report = report.with_provider("gps");
                let [lat, lon] = report.as_pair();
                println!("   {:?}: {} {}", display.syntax, lat, lon);
                match report.to_json() {
                    Ok(json) => println!("   JSON: {}", json),
                    Err(e) => println!("   JSON error: {}", e),
                }
            }
            Err(e) => println!("   error: {}", e),
        }
    }
}
