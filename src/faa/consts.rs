use std::ops::Range;

pub const TYPES_FILE_NAME: &str = "ACFTREF.txt";
pub const PLANES_FILE_NAME: &str = "MASTER.txt";

/// Longest chunk handed to the decoder per read, newline included.
pub const MAX_LINE_LENGTH: usize = 1023;

// ACFTREF.txt
pub const TYPE_MIN_LINE_LENGTH: usize = 68;
pub const TYPE_ID_OFFSET: usize = 0;
pub const TYPE_MANUFACTURER: Range<usize> = 8..38;
pub const TYPE_MODEL: Range<usize> = 39..59;
pub const TYPE_CATEGORY_OFFSET: usize = 60;
pub const TYPE_SEATS_OFFSET: usize = 72;

// MASTER.txt
pub const PLANE_MIN_LINE_LENGTH: usize = 610;
pub const PLANE_N_NUMBER: Range<usize> = 0..5;
pub const PLANE_MODEL_OFFSET: usize = 37;
pub const PLANE_REGISTRANT: Range<usize> = 58..107;
pub const PLANE_ID_OFFSET: usize = 601;
