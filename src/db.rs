use crate::faa::{self, LoadError, PLANES_FILE_NAME, TYPES_FILE_NAME};
use crate::fields::parse_hex;
use crate::{Index, PlaneInfo, TypeInfo};
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenError {
    #[error("could not load aircraft types")]
    Types(#[source] LoadError),
    #[error("could not load registrations")]
    Planes(#[source] LoadError),
}

/// Aircraft types and registrations, loaded once and queried by ICAO address.
///
/// A [PlaneDb] is either fully loaded or not constructed at all. Hosts that
/// want to carry on without the registry can fall back to
/// [PlaneDb::default], an empty database on which every lookup misses.
#[derive(Debug, Default)]
pub struct PlaneDb {
    types: Index<TypeInfo>,
    planes: Index<PlaneInfo>,
}

impl PlaneDb {
    /// Loads `ACFTREF.txt` and `MASTER.txt` from the working directory.
    pub fn open() -> Result<Self, OpenError> {
        Self::open_in(".")
    }

    /// Loads `ACFTREF.txt` and `MASTER.txt` from `dir`.
    pub fn open_in(dir: impl AsRef<Path>) -> Result<Self, OpenError> {
        let dir = dir.as_ref();
        let types = faa::read_types_file(dir.join(TYPES_FILE_NAME)).map_err(OpenError::Types)?;
        let planes =
            faa::read_planes_file(dir.join(PLANES_FILE_NAME)).map_err(OpenError::Planes)?;
        Ok(Self::from_records(types, planes))
    }

    pub fn from_readers<T: BufRead, P: BufRead>(types: T, planes: P) -> Result<Self, OpenError> {
        let types = faa::read_types(types).map_err(OpenError::Types)?;
        let planes = faa::read_planes(planes).map_err(OpenError::Planes)?;
        Ok(Self::from_records(types, planes))
    }

    pub fn from_records(types: Vec<TypeInfo>, planes: Vec<PlaneInfo>) -> Self {
        debug!(
            "Plane database ready: {} types, {} registrations",
            types.len(),
            planes.len()
        );

        Self {
            types: Index::new(types),
            planes: Index::new(planes),
        }
    }

    /// Finds the registration for a hex ICAO address like `"A1B2C3"`.
    ///
    /// Anything after the leading hex digits is ignored.
    pub fn lookup(&self, icao: &str) -> Option<&PlaneInfo> {
        self.planes.get(parse_hex(icao.as_bytes(), 0))
    }

    pub fn type_info(&self, model: u64) -> Option<&TypeInfo> {
        self.types.get(model)
    }

    pub fn types(&self) -> &Index<TypeInfo> {
        &self.types
    }

    pub fn planes(&self) -> &Index<PlaneInfo> {
        &self.planes
    }

    /// Writes a human readable description of `plane` and its type.
    pub fn render<W: Write>(&self, out: &mut W, plane: Option<&PlaneInfo>) -> io::Result<()> {
        let Some(plane) = plane else {
            return writeln!(out, "Plane not found");
        };

        writeln!(out, "  ## Registration")?;
        writeln!(out, "    N-Number       : {}", plane.n_number)?;
        writeln!(out, "    Registrant     : {}", plane.registrant)?;
        if plane.model != 0 {
            writeln!(out, "    Model          : {}", plane.model)?;
        }

        match self.type_info(plane.model) {
            Some(info) => render_type(out, info),
            None => writeln!(out, "No model info"),
        }
    }

    pub fn render_to_string(&self, plane: Option<&PlaneInfo>) -> String {
        let mut out = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.render(&mut out, plane);
        String::from_utf8_lossy(&out).into_owned()
    }

    pub fn close(self) {
        debug!("Closing plane database");
    }
}

fn render_type<W: Write>(out: &mut W, info: &TypeInfo) -> io::Result<()> {
    writeln!(out, "  ## Type")?;
    writeln!(out, "    Manufacturer   : {}", info.manufacturer)?;
    writeln!(out, "    Model name     : {}", info.model)?;
    writeln!(
        out,
        "    Type           : {} - {}",
        info.category_code,
        info.category().description()
    )?;
    writeln!(out, "    Seats          : {}", info.seats)
}
