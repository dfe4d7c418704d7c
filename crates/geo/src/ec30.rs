//! EC30 fishing-ground zone calculation.
//!
//! Each of the four fishing grounds (ngư trường) is a bounding box divided
//! into a grid of sub-zones of nominally 900 km² each. A coordinate is
//! matched against the grounds in fixed order (first match wins), then
//! bucketed into a sub-zone by its relative position inside the box.
//!
//! The default numbering uses a square grid of `floor(sqrt(n))` cells per
//! axis. For grounds whose sub-zone count is not a perfect square (20 and
//! 15) this leaves some zone numbers unreachable; the numbering is kept
//! as-is because stored catch records already carry these codes. See
//! [`FishingGround::reachable_zone_numbers`] and [`GridLayout::Exact`].

use crate::{BoundingBox, Coordinate, GeoError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Nominal area of one sub-zone.
pub const AREA_PER_SUB_ZONE_KM2: f64 = 900.0;

/// Code returned for points outside every fishing ground.
pub const OUTSIDE_EC30_CODE: &str = "XX00";

const OUTSIDE_GROUND_NAME: &str = "Outside Ngư Trường";
const GROUND_NAME_PREFIX: &str = "Ngư Trường ";

/// A named maritime fishing ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishingGround {
    /// Display name, e.g. "Ngư Trường Đông Nam Bộ"
    pub name: &'static str,
    /// Geographic extent (inclusive)
    pub bounds: BoundingBox,
    /// Number of sub-zones the ground is divided into
    pub sub_zone_count: u32,
    /// Letter prefixed to the zone number in EC30 codes
    pub code_prefix: char,
}

/// Reference grounds in match order.
pub static FISHING_GROUNDS: [FishingGround; 4] = [
    FishingGround {
        name: "Ngư Trường Vịnh Bắc Bộ",
        bounds: BoundingBox::new(17.0, 21.5, 105.5, 109.0),
        sub_zone_count: 20,
        code_prefix: 'B',
    },
    FishingGround {
        name: "Ngư Trường Miền Trung",
        bounds: BoundingBox::new(12.0, 17.0, 108.0, 112.0),
        sub_zone_count: 15,
        code_prefix: 'M',
    },
    FishingGround {
        name: "Ngư Trường Đông Nam Bộ",
        bounds: BoundingBox::new(8.5, 12.0, 105.0, 108.0),
        sub_zone_count: 25,
        code_prefix: 'D',
    },
    FishingGround {
        name: "Ngư Trường Tây Nam Bộ",
        bounds: BoundingBox::new(6.0, 10.5, 101.0, 105.0),
        sub_zone_count: 60,
        code_prefix: 'T',
    },
];

impl FishingGround {
    /// Name without the "Ngư Trường" prefix, e.g. "Đông Nam Bộ".
    pub fn short_name(&self) -> &'static str {
        self.name.strip_prefix(GROUND_NAME_PREFIX).unwrap_or(self.name)
    }

    pub fn area_per_sub_zone_km2(&self) -> f64 {
        AREA_PER_SUB_ZONE_KM2
    }

    pub fn total_area_km2(&self) -> f64 {
        f64::from(self.sub_zone_count) * AREA_PER_SUB_ZONE_KM2
    }

    /// Cells per axis of the default square grid.
    pub fn grid_size(&self) -> u32 {
        GridLayout::square(self.sub_zone_count).lat_cells()
    }

    /// Checks the preconditions the zone arithmetic relies on.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| GeoError::InvalidGround {
            name: self.name.to_string(),
            reason: reason.to_string(),
        };

        if !self.bounds.has_positive_extent() {
            return Err(invalid("bounding box must have positive extent on both axes"));
        }
        if !(1..=99).contains(&self.sub_zone_count) {
            return Err(invalid("sub-zone count must be between 1 and 99"));
        }
        if !self.code_prefix.is_ascii_uppercase() {
            return Err(invalid("code prefix must be an ASCII uppercase letter"));
        }
        Ok(())
    }

    /// Zone numbers the square grid can actually produce.
    ///
    /// Equal to `1..=sub_zone_count` only when the count is a perfect square.
    pub fn reachable_zone_numbers(&self) -> BTreeSet<u32> {
        GridLayout::square(self.sub_zone_count).reachable_zone_numbers(self.sub_zone_count)
    }

    /// Sub-zone number of `coord`, or `None` when it lies outside the ground.
    pub fn zone_number(&self, coord: &Coordinate, layout: GridLayout) -> Option<u32> {
        if !self.bounds.contains(coord) {
            return None;
        }
        let (lat_ratio, lng_ratio) = self.bounds.ratios(coord);
        Some(layout.zone_number(lat_ratio, lng_ratio, self.sub_zone_count))
    }
}

/// How a ground's box is cut into numbered cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayout {
    /// `size × size` cells, numbered row-major from the south-west corner;
    /// the result is clamped to `[1, sub_zone_count]`.
    Square { size: u32 },
    /// Independent per-axis cell counts. Every number in
    /// `1..=lat_cells * lng_cells` is reachable.
    Exact { lat_cells: u32, lng_cells: u32 },
}

impl GridLayout {
    /// Square layout with `floor(sqrt(sub_zone_count))` cells per axis.
    pub fn square(sub_zone_count: u32) -> Self {
        let size = f64::from(sub_zone_count).sqrt().floor() as u32;
        GridLayout::Square { size: size.max(1) }
    }

    pub fn exact(lat_cells: u32, lng_cells: u32) -> Self {
        GridLayout::Exact {
            lat_cells: lat_cells.max(1),
            lng_cells: lng_cells.max(1),
        }
    }

    /// Exact layout whose axes multiply to `sub_zone_count`, as close to
    /// square as the count allows (20 → 4×5, 15 → 3×5, 60 → 6×10).
    pub fn balanced(sub_zone_count: u32) -> Self {
        let n = sub_zone_count.max(1);
        let root = f64::from(n).sqrt().floor() as u32;
        let lat_cells = (1..=root).rev().find(|d| n % d == 0).unwrap_or(1);
        GridLayout::exact(lat_cells, n / lat_cells)
    }

    pub fn lat_cells(&self) -> u32 {
        match *self {
            GridLayout::Square { size } => size,
            GridLayout::Exact { lat_cells, .. } => lat_cells,
        }
    }

    pub fn lng_cells(&self) -> u32 {
        match *self {
            GridLayout::Square { size } => size,
            GridLayout::Exact { lng_cells, .. } => lng_cells,
        }
    }

    /// Every number this layout can produce for a ground of `sub_zone_count`.
    pub fn reachable_zone_numbers(&self, sub_zone_count: u32) -> BTreeSet<u32> {
        let (lat_cells, lng_cells) = (self.lat_cells(), self.lng_cells());
        // Index `cells` is reached on the max edge of the (inclusive) box.
        (0..=lat_cells)
            .flat_map(|lat| (0..=lng_cells).map(move |lng| (lat, lng)))
            .map(|(lat, lng)| self.number_cell(i64::from(lat), i64::from(lng), sub_zone_count))
            .collect()
    }

    /// Number the cell containing the point at the given ratios.
    pub fn zone_number(&self, lat_ratio: f64, lng_ratio: f64, sub_zone_count: u32) -> u32 {
        let lat = (lat_ratio * f64::from(self.lat_cells())).floor() as i64;
        let lng = (lng_ratio * f64::from(self.lng_cells())).floor() as i64;
        self.number_cell(lat, lng, sub_zone_count)
    }

    fn number_cell(&self, lat: i64, lng: i64, sub_zone_count: u32) -> u32 {
        match *self {
            GridLayout::Square { size } => {
                let raw = lat * i64::from(size) + lng + 1;
                raw.clamp(1, i64::from(sub_zone_count.max(1))) as u32
            }
            GridLayout::Exact { lat_cells, lng_cells } => {
                let lat = lat.clamp(0, i64::from(lat_cells) - 1);
                let lng = lng.clamp(0, i64::from(lng_cells) - 1);
                (lat * i64::from(lng_cells) + lng + 1) as u32
            }
        }
    }
}

/// EC30 classification of a coordinate.
///
/// Serialises with camelCase keys so callers can store it as JSON alongside
/// a catch record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ec30Zone {
    pub zone_label: String,
    pub ec30_code: String,
    pub region_short_name: String,
    pub coordinates: Coordinate,
    pub ground_name: String,
    pub total_area_km2: f64,
    /// 0 for the outside sentinel
    pub zone_number: u32,
}

impl Ec30Zone {
    /// The sentinel for coordinates outside every fishing ground.
    pub fn outside(coord: Coordinate) -> Self {
        Self {
            zone_label: OUTSIDE_GROUND_NAME.to_string(),
            ec30_code: OUTSIDE_EC30_CODE.to_string(),
            region_short_name: "Outside".to_string(),
            coordinates: coord,
            ground_name: OUTSIDE_GROUND_NAME.to_string(),
            total_area_km2: 0.0,
            zone_number: 0,
        }
    }

    #[inline]
    pub fn is_outside(&self) -> bool {
        self.ec30_code == OUTSIDE_EC30_CODE
    }
}

/// Calculates the EC30 zone for a coordinate.
///
/// Total over any input: points outside every ground (including NaN
/// coordinates) return the `"XX00"` sentinel.
///
/// # Example
/// ```
/// use fleetzone_geo::{calculate_ec30_zone, Coordinate};
///
/// let zone = calculate_ec30_zone(&Coordinate::new(10.25, 106.5));
/// assert_eq!(zone.ec30_code, "D13");
/// assert_eq!(zone.region_short_name, "Đông Nam Bộ");
/// assert_eq!(zone.zone_label, "Ngư Trường Đông Nam Bộ - EC30 D13");
/// assert_eq!(zone.total_area_km2, 22_500.0);
/// ```
pub fn calculate_ec30_zone(coord: &Coordinate) -> Ec30Zone {
    calculate_zone_with_layout(coord, |ground| GridLayout::square(ground.sub_zone_count))
}

/// Calculates the EC30 zone using a caller-chosen grid layout per ground.
///
/// ```
/// use fleetzone_geo::{calculate_zone_with_layout, Coordinate, GridLayout};
///
/// // Top-right corner of Vịnh Bắc Bộ, 4×5 exact grid
/// let zone = calculate_zone_with_layout(&Coordinate::new(21.5, 109.0), |g| {
///     GridLayout::balanced(g.sub_zone_count)
/// });
/// assert_eq!(zone.ec30_code, "B20");
/// ```
pub fn calculate_zone_with_layout<F>(coord: &Coordinate, layout: F) -> Ec30Zone
where
    F: Fn(&FishingGround) -> GridLayout,
{
    let Some(ground) = FISHING_GROUNDS.iter().find(|g| g.bounds.contains(coord)) else {
        tracing::debug!(%coord, "coordinate outside all fishing grounds");
        return Ec30Zone::outside(*coord);
    };

    let (lat_ratio, lng_ratio) = ground.bounds.ratios(coord);
    let zone_number = layout(ground).zone_number(lat_ratio, lng_ratio, ground.sub_zone_count);
    let ec30_code = format!("{}{:02}", ground.code_prefix, zone_number);

    tracing::trace!(%coord, ground = ground.name, code = %ec30_code, "calculated EC30 zone");

    Ec30Zone {
        zone_label: format!("{} - EC30 {}", ground.name, ec30_code),
        ec30_code,
        region_short_name: ground.short_name().to_string(),
        coordinates: *coord,
        ground_name: ground.name.to_string(),
        total_area_km2: ground.total_area_km2(),
        zone_number,
    }
}
