//! Record identifiers.

/// Random identifier in the `8-4-4-4-12` hex layout.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_has_uuid_layout() {
        let id = generate_id();
        let groups: Vec<usize> = id.split('-').map(str::len).collect();
        assert_eq!(groups, vec![8, 4, 4, 4, 12]);
        assert!(id.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
    }

    #[test]
    fn ids_differ() {
        assert_ne!(generate_id(), generate_id());
    }
}
