//! Coastal region classification.
//!
//! Maps a coordinate onto one of the four administrative coastal regions
//! (codes A–D) using fixed bounding boxes. Boxes are tested in priority
//! order A, B, C, D and the first box containing the point wins; a point
//! outside every box is classified as [`CoastalRegionCode::X`].

use crate::{BoundingBox, Coordinate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Administrative coastal region code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoastalRegionCode {
    A,
    B,
    C,
    D,
    /// Outside all known regions. A valid classification, not an error.
    X,
}

impl CoastalRegionCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::X => "X",
        }
    }
}

impl fmt::Display for CoastalRegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoastalRegionCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "X" => Ok(Self::X),
            other => Err(format!("Unknown coastal region code: {other}")),
        }
    }
}

/// Result of coastal classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoastalRegion {
    pub code: CoastalRegionCode,
    pub name: &'static str,
    pub description: &'static str,
}

impl CoastalRegion {
    /// The sentinel returned for points outside every region.
    pub const fn outside() -> Self {
        Self {
            code: CoastalRegionCode::X,
            name: "Outside Traditional Coastal Regions",
            description: "Vị trí nằm ngoài các vùng biển ven bờ đã xác định",
        }
    }

    #[inline]
    pub fn is_outside(&self) -> bool {
        self.code == CoastalRegionCode::X
    }
}

/// A region together with the box that defines it.
#[derive(Debug, Clone, Copy)]
pub struct RegionDefinition {
    pub region: CoastalRegion,
    pub bounds: BoundingBox,
}

/// Reference regions in priority order. Earlier entries win on overlap.
pub static COASTAL_REGIONS: [RegionDefinition; 4] = [
    RegionDefinition {
        region: CoastalRegion {
            code: CoastalRegionCode::A,
            name: "Cà Mau – Kiên Giang",
            description: "Vùng biển Tây Nam Bộ và vịnh Thái Lan",
        },
        bounds: BoundingBox::new(8.3, 10.5, 103.8, 105.5),
    },
    RegionDefinition {
        region: CoastalRegion {
            code: CoastalRegionCode::B,
            name: "Bà Rịa – Vũng Tàu – Bình Thuận",
            description: "Vùng biển Đông Nam Bộ",
        },
        bounds: BoundingBox::new(10.0, 11.6, 106.0, 109.0),
    },
    RegionDefinition {
        region: CoastalRegion {
            code: CoastalRegionCode::C,
            name: "Khánh Hòa – Ninh Thuận – Phú Yên",
            description: "Vùng biển Nam Trung Bộ",
        },
        bounds: BoundingBox::new(11.7, 15.0, 108.5, 110.0),
    },
    RegionDefinition {
        region: CoastalRegion {
            code: CoastalRegionCode::D,
            name: "Bắc Trung Bộ – Vịnh Bắc Bộ",
            description: "Vùng biển Bắc Trung Bộ và vịnh Bắc Bộ",
        },
        bounds: BoundingBox::new(15.5, 21.5, 105.5, 108.9),
    },
];

/// Classifies a coordinate into a coastal region.
///
/// Total over any input: coordinates outside every box, including NaN
/// coordinates, yield [`CoastalRegion::outside`]. Range is not validated.
///
/// # Example
/// ```
/// use fleetzone_geo::{classify_coastal_region, CoastalRegionCode, Coordinate};
///
/// let region = classify_coastal_region(&Coordinate::new(9.5, 104.8));
/// assert_eq!(region.code, CoastalRegionCode::A);
/// assert_eq!(region.name, "Cà Mau – Kiên Giang");
///
/// assert!(classify_coastal_region(&Coordinate::new(0.0, 0.0)).is_outside());
/// ```
pub fn classify_coastal_region(coord: &Coordinate) -> CoastalRegion {
    let region = COASTAL_REGIONS
        .iter()
        .find(|def| def.bounds.contains(coord))
        .map_or_else(CoastalRegion::outside, |def| def.region);

    tracing::trace!(%coord, code = %region.code, "classified coastal region");
    region
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ca_mau_kien_giang() {
        let region = classify_coastal_region(&Coordinate::new(9.5, 104.8));
        assert_eq!(region.code, CoastalRegionCode::A);
        assert_eq!(region.name, "Cà Mau – Kiên Giang");
    }

    #[test]
    fn test_each_region_center() {
        for def in &COASTAL_REGIONS {
            let region = classify_coastal_region(&def.bounds.center());
            assert_eq!(region.code, def.region.code);
        }
    }

    #[test]
    fn test_outside_returns_sentinel() {
        let region = classify_coastal_region(&Coordinate::new(0.0, 0.0));
        assert_eq!(region.code, CoastalRegionCode::X);
        assert_eq!(region.name, "Outside Traditional Coastal Regions");
        assert!(region.is_outside());
    }

    #[test]
    fn test_nan_falls_through_to_outside() {
        assert!(classify_coastal_region(&Coordinate::new(f64::NAN, 104.8)).is_outside());
        assert!(classify_coastal_region(&Coordinate::new(9.5, f64::NAN)).is_outside());
    }

    #[test]
    fn test_edges_are_inclusive() {
        let region = classify_coastal_region(&Coordinate::new(8.3, 103.8));
        assert_eq!(region.code, CoastalRegionCode::A);
        let region = classify_coastal_region(&Coordinate::new(21.5, 108.9));
        assert_eq!(region.code, CoastalRegionCode::D);
    }

    #[test]
    fn test_reference_boxes_do_not_overlap() {
        for (i, a) in COASTAL_REGIONS.iter().enumerate() {
            for b in &COASTAL_REGIONS[i + 1..] {
                assert!(
                    !a.bounds.intersects(&b.bounds),
                    "{} overlaps {}",
                    a.region.code,
                    b.region.code
                );
            }
        }
    }

    #[test]
    fn test_code_parse_and_display() {
        assert_eq!("b".parse::<CoastalRegionCode>().unwrap(), CoastalRegionCode::B);
        assert_eq!(CoastalRegionCode::X.to_string(), "X");
        assert!("Z".parse::<CoastalRegionCode>().is_err());
    }
}
