//! Decoder for the FAA releasable aircraft database.
//!
//! The [read_types_file] and [read_planes_file] functions read the
//! `ACFTREF.txt` and `MASTER.txt` files. Lines that are too short to hold a
//! record are skipped, everything else is decoded on a best-effort basis.

pub(crate) mod consts;
mod decode;
#[cfg(test)]
pub(crate) mod fixtures;

pub use consts::{PLANES_FILE_NAME, TYPES_FILE_NAME};
pub use decode::*;
