//! QWERTY keyboard geometry for typo weighting.
//!
//! Maps the 26 lowercase letters to (row, column) coordinates and measures
//! the physical distance between keys. Reserved for distance-weighted
//! substitution costs; the default ranking formula does not consult it.

/// Distance assigned when either character has no keyboard position.
const UNKNOWN_KEY_DISTANCE: f64 = 10.0;

const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Get the (row, column) coordinate of a letter on a QWERTY layout.
///
/// Returns `None` for characters that are not ASCII letters.
pub fn key_position(c: char) -> Option<(i32, i32)> {
    let c = c.to_ascii_lowercase();

    for (row, keys) in KEY_ROWS.iter().enumerate() {
        if let Some(column) = keys.find(c) {
            return Some((row as i32, column as i32));
        }
    }

    None
}

/// Euclidean distance between two keys on a QWERTY layout.
///
/// Characters without a keyboard position yield a large sentinel distance.
pub fn key_distance(a: char, b: char) -> f64 {
    match (key_position(a), key_position(b)) {
        (Some((row_a, col_a)), Some((row_b, col_b))) => {
            let dx = (row_a - row_b) as f64;
            let dy = (col_a - col_b) as f64;
            (dx * dx + dy * dy).sqrt()
        }
        _ => UNKNOWN_KEY_DISTANCE,
    }
}
