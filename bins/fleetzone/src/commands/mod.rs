//! Command implementations

pub mod fleet;
pub mod identify;
pub mod locate;

use chrono::{Local, NaiveDate};
use fleetzone_core::Error;
use fleetzone_geo::{Coordinate, GridLayout};

use crate::Layout;

/// Parse a `"lat,lng"` argument.
pub fn parse_position(s: &str) -> Result<Coordinate, String> {
    let Some((lat, lng)) = s.split_once(',') else {
        return Err(format!("expected \"lat,lng\", got {s:?}"));
    };

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("invalid latitude {:?}: {e}", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|e| format!("invalid longitude {:?}: {e}", lng.trim()))?;

    Coordinate::try_new(lat, lng).map_err(|e| e.to_string())
}

/// Parse a `YYYY-MM-DD` date, defaulting to today's local date.
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate, Error> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
            Error::invalid_input(format!("Invalid date {s:?}: {e}"))
                .with_suggestion("Use the YYYY-MM-DD format, e.g. 2026-10-16")
        }),
        None => Ok(Local::now().date_naive()),
    }
}

/// Grid layout for a ground with `sub_zone_count` cells.
pub fn grid_layout(layout: Layout, sub_zone_count: u32) -> GridLayout {
    match layout {
        Layout::Square => GridLayout::square(sub_zone_count),
        Layout::Balanced => GridLayout::balanced(sub_zone_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        let coord = parse_position("10.775, 106.7").unwrap();
        assert_eq!(coord, Coordinate::new(10.775, 106.7));

        let southern = parse_position("-33.86,151.21").unwrap();
        assert_eq!(southern.latitude, -33.86);
    }

    #[test]
    fn test_parse_position_rejects() {
        assert!(parse_position("10.775").is_err());
        assert!(parse_position("abc,106.7").is_err());
        assert!(parse_position("95.0,106.7").is_err());
        assert!(parse_position("NaN,106.7").is_err());
    }

    #[test]
    fn test_resolve_date() {
        let date = resolve_date(Some("2026-10-16")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());

        let err = resolve_date(Some("16/10/2026")).unwrap_err();
        assert_eq!(err.code, fleetzone_core::ErrorCode::InvalidInput);
        assert!(resolve_date(None).is_ok());
    }

    #[test]
    fn test_grid_layout() {
        assert_eq!(grid_layout(Layout::Square, 20), GridLayout::Square { size: 4 });
        assert_eq!(
            grid_layout(Layout::Balanced, 60),
            GridLayout::Exact { lat_cells: 6, lng_cells: 10 }
        );
    }
}
