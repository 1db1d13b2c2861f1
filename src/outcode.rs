use std::collections::HashSet;

use crate::record::{Field, PostcodeRecord};

pub const HEADER_POSTCODE: &str = "Postcode 3";

#[derive(Debug, Default)]
pub struct SeenOutcodes {
    outcodes: HashSet<String>,
}

impl SeenOutcodes {
    pub fn new() -> Self {
        SeenOutcodes {
            outcodes: HashSet::new(),
        }
    }

    pub fn contains(&self, outcode: &str) -> bool {
        self.outcodes.contains(outcode)
    }

    pub fn len(&self) -> usize {
        self.outcodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcodes.is_empty()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Extraction {
    Header,
    Duplicate(String),
    Accepted(String),
}

pub fn outcode_of(postcode: &str) -> String {
    let head = postcode.split(' ').next().unwrap_or_default();
    head.chars()
        .filter(|c| !matches!(c, '.' | ' ' | '\n' | '\r' | '\t'))
        .collect()
}

// First row carrying an outcode wins; matching is case sensitive.
pub fn extract(record: &PostcodeRecord, seen: &mut SeenOutcodes) -> Extraction {
    let postcode = record.get(Field::Postcode3);
    if postcode == HEADER_POSTCODE {
        return Extraction::Header;
    }

    let outcode = outcode_of(postcode);
    if seen.contains(&outcode) {
        return Extraction::Duplicate(outcode);
    }
    seen.outcodes.insert(outcode.clone());
    Extraction::Accepted(outcode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::sample_fields;

    fn record(postcode: &str) -> PostcodeRecord {
        PostcodeRecord::from_fields(sample_fields(postcode)).unwrap()
    }

    #[test]
    fn outcode_is_text_before_first_space() {
        assert_eq!(outcode_of("NW1 4NP"), "NW1");
        assert_eq!(outcode_of("SW1A 1AA"), "SW1A");
    }

    #[test]
    fn outcode_drops_periods_and_whitespace() {
        assert_eq!(outcode_of("N.1 2AB"), "N1");
        assert_eq!(outcode_of("WC1\t\r\n"), "WC1");
        assert_eq!(outcode_of("EC1A"), "EC1A");
        assert_eq!(outcode_of(""), "");
    }

    #[test]
    fn second_sighting_is_a_duplicate() {
        let mut seen = SeenOutcodes::new();

        assert_eq!(
            extract(&record("NW1 4NP"), &mut seen),
            Extraction::Accepted("NW1".to_string())
        );
        assert_eq!(
            extract(&record("NW1 4NP"), &mut seen),
            Extraction::Duplicate("NW1".to_string())
        );
        assert_eq!(
            extract(&record("NW1 9ZZ"), &mut seen),
            Extraction::Duplicate("NW1".to_string())
        );
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let mut seen = SeenOutcodes::new();

        extract(&record("NW1 4NP"), &mut seen);
        assert_eq!(
            extract(&record("nw1 4NP"), &mut seen),
            Extraction::Accepted("nw1".to_string())
        );
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn header_row_is_never_recorded() {
        let mut seen = SeenOutcodes::new();

        assert_eq!(extract(&record("Postcode 3"), &mut seen), Extraction::Header);
        assert_eq!(extract(&record("Postcode 3"), &mut seen), Extraction::Header);
        assert!(seen.is_empty());
        assert_eq!(
            extract(&record("Postcode 1AA"), &mut seen),
            Extraction::Accepted("Postcode".to_string())
        );
    }
}
