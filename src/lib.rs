//! Decoder and lookup for the FAA aircraft registry database.
//!
//! The FAA publishes its registry as a set of fixed-width text files. This
//! crate reads the aircraft reference file (`ACFTREF.txt`) and the
//! registration master file (`MASTER.txt`) into memory and answers lookups
//! by ICAO address:
//!
//! ```no_run
//! let db = planedb::PlaneDb::open()?;
//! let plane = db.lookup("A1B2C3");
//! print!("{}", db.render_to_string(plane));
//! # Ok::<(), planedb::OpenError>(())
//! ```

mod db;
pub mod faa;
pub mod fields;
mod index;

pub use db::*;
pub use index::{Index, Keyed};

/// An aircraft type from the reference file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// Manufacturer, model and series code.
    pub id: u64,
    pub manufacturer: String,
    pub model: String,
    /// Raw type digit as found in the file, see [TypeInfo::category].
    pub category_code: u64,
    pub seats: u32,
}

impl TypeInfo {
    pub fn category(&self) -> AircraftCategory {
        AircraftCategory::from_code(self.category_code)
    }
}

impl Keyed for TypeInfo {
    type Key = u64;

    fn key(&self) -> u64 {
        self.id
    }
}

/// A registered aircraft from the master file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneInfo {
    /// ICAO address.
    pub id: u32,
    pub n_number: String,
    /// Reference into the type database. May not resolve.
    pub model: u64,
    pub registrant: String,
}

impl Keyed for PlaneInfo {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftCategory {
    None,
    Glider,
    Balloon,
    BlimpDirigible,
    FixedWingSingleEngine,
    FixedWingMultiEngine,
    Rotorcraft,
    WeightShiftControl,
    PoweredParachute,
    Gyroplane,
    /// Any code outside of `0..=9`.
    Unknown,
}

impl AircraftCategory {
    pub fn from_code(code: u64) -> Self {
        match code {
            0 => Self::None,
            1 => Self::Glider,
            2 => Self::Balloon,
            3 => Self::BlimpDirigible,
            4 => Self::FixedWingSingleEngine,
            5 => Self::FixedWingMultiEngine,
            6 => Self::Rotorcraft,
            7 => Self::WeightShiftControl,
            8 => Self::PoweredParachute,
            9 => Self::Gyroplane,
            _ => Self::Unknown,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Glider => "Glider",
            Self::Balloon => "Balloon",
            Self::BlimpDirigible => "Blimp/Dirigible",
            Self::FixedWingSingleEngine => "Fixed wing single engine",
            Self::FixedWingMultiEngine => "Fixed wing multi engine",
            Self::Rotorcraft => "Rotorcraft",
            Self::WeightShiftControl => "Weight-shift-control",
            Self::PoweredParachute => "Powered Parachute",
            Self::Gyroplane => "Gyroplane",
            Self::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_codes_map_to_descriptions() {
        let descriptions: Vec<&str> = (0..10)
            .map(|code| AircraftCategory::from_code(code).description())
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "None",
                "Glider",
                "Balloon",
                "Blimp/Dirigible",
                "Fixed wing single engine",
                "Fixed wing multi engine",
                "Rotorcraft",
                "Weight-shift-control",
                "Powered Parachute",
                "Gyroplane",
            ]
        );
    }

    #[test]
    fn out_of_range_category_is_unknown() {
        assert_eq!(AircraftCategory::from_code(10), AircraftCategory::Unknown);
        assert_eq!(AircraftCategory::from_code(u64::MAX).description(), "Unknown");
    }
}
