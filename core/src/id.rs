//! Schedule entry id generation.
//!
//! Wire format is `cpsat-<12 random hex chars>`.

use rand::Rng;

const HEX_CHARS: &[u8] = b"0123456789abcdef";

/// Generates a fresh `cpsat-<12 hex chars>` id.
///
/// Not guaranteed unique in the information-theoretic sense, but collisions
/// across one response's handful of entries are astronomically unlikely
/// (48 bits of entropy per id).
pub fn generate_entry_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..12)
        .map(|_| HEX_CHARS[rng.gen_range(0..HEX_CHARS.len())] as char)
        .collect();
    format!("cpsat-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_have_the_expected_shape() {
        let id = generate_entry_id();
        assert!(id.starts_with("cpsat-"));
        assert_eq!(id.len(), "cpsat-".len() + 12);
        assert!(id["cpsat-".len()..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn ids_are_not_all_identical() {
        let a = generate_entry_id();
        let b = generate_entry_id();
        assert_ne!(a, b, "two freshly generated ids collided, vanishingly unlikely");
    }
}
