use super::consts::*;

/// Builds an `ACFTREF.txt` line in the layout the FAA publishes.
pub fn type_line(id: &str, manufacturer: &str, model: &str, category: &str, seats: &str) -> String {
    format!(
        "{id:<7},{manufacturer:<30},{model:<20},{category},4 ,1,1,01,{seats:<3},CLASS 1,0118,\r\n"
    )
}

/// Builds a `MASTER.txt` line with the given fields and blanks elsewhere.
pub fn plane_line(n_number: &str, model: &str, registrant: &str, icao: &str) -> String {
    let mut line = vec![b' '; PLANE_MIN_LINE_LENGTH + 8];
    put(&mut line, PLANE_N_NUMBER.start, n_number);
    put(&mut line, PLANE_MODEL_OFFSET, model);
    put(&mut line, PLANE_REGISTRANT.start, registrant);
    put(&mut line, PLANE_ID_OFFSET, icao);
    line.extend_from_slice(b"\r\n");
    String::from_utf8(line).unwrap()
}

fn put(line: &mut [u8], offset: usize, value: &str) {
    line[offset..offset + value.len()].copy_from_slice(value.as_bytes());
}

pub fn cessna_172() -> String {
    type_line("1200119", "CESSNA", "172", "4", "4")
}

pub fn john_doe() -> String {
    plane_line("12345", "1200119", "JOHN DOE", "A1B2C3")
}
