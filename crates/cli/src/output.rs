//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output. Status lines go to
//! stderr so `--json` output on stdout can be piped.

use fleetzone_geo::{CoastalRegion, DistanceReading, Ec30Zone};
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        eprintln!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }

    /// Print an aligned `label: value` line
    pub fn field(label: &str, value: impl std::fmt::Display) {
        println!("  {:<14} {}", format!("{label}:").dimmed(), value);
    }
}

/// Format an area for display, e.g. `22,500 km²`
pub fn format_area_km2(area: f64) -> String {
    let whole = area.round().max(0.0) as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped} km²")
}

/// One-line summary of a coastal region
pub fn format_region(region: &CoastalRegion) -> String {
    format!("{} ({})", region.code, region.name)
}

/// One-line summary of an EC30 zone
pub fn format_zone(zone: &Ec30Zone) -> String {
    if zone.is_outside() {
        format!("{} ({})", zone.ec30_code, zone.ground_name)
    } else {
        format!("{} ({})", zone.ec30_code, zone.region_short_name)
    }
}

/// Format a distance reading; unavailable readings render as `N/A`
pub fn format_distance(reading: DistanceReading) -> String {
    reading.to_string()
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetzone_geo::{calculate_ec30_zone, classify_coastal_region, Coordinate};

    #[test]
    fn test_format_area() {
        assert_eq!(format_area_km2(900.0), "900 km²");
        assert_eq!(format_area_km2(22_500.0), "22,500 km²");
        assert_eq!(format_area_km2(54_000.0), "54,000 km²");
        assert_eq!(format_area_km2(0.0), "0 km²");
    }

    #[test]
    fn test_format_region() {
        let region = classify_coastal_region(&Coordinate::new(9.5, 104.8));
        assert_eq!(format_region(&region), "A (Cà Mau – Kiên Giang)");
    }

    #[test]
    fn test_format_zone() {
        let zone = calculate_ec30_zone(&Coordinate::new(10.25, 106.5));
        assert_eq!(format_zone(&zone), "D13 (Đông Nam Bộ)");

        let outside = calculate_ec30_zone(&Coordinate::new(0.0, 0.0));
        assert_eq!(format_zone(&outside), "XX00 (Outside Ngư Trường)");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(DistanceReading::Km(6.128)), "6.1 km");
        assert_eq!(format_distance(DistanceReading::Unavailable), "N/A");
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "vessel", "vessels"), "1 vessel");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "vessel", "vessels"), "5 vessels");
    }
}
