//! Course Catalog Module
//! Building and room lookups over an immutable set of course records.

use crate::data::record::CourseRecord;
use std::collections::BTreeSet;
use std::fmt;

/// A room identity: the first token of a Location plus the building name after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomKey {
    pub room: String,
    pub building: String,
}

impl RoomKey {
    pub fn new(room: impl Into<String>, building: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            building: building.into(),
        }
    }

    /// Split `"<room> <building...>"`; `None` when there is no room token.
    pub fn from_location(location: &str) -> Option<Self> {
        let mut tokens = location.split_whitespace();
        let room = tokens.next()?;
        Some(Self::new(room, tokens.collect::<Vec<_>>().join(" ")))
    }

    /// Case-insensitive `^<room>\s+<building>$`, with room and building taken literally.
    pub fn matches(&self, location: &str) -> bool {
        let location = location.to_lowercase();
        let Some(rest) = location.strip_prefix(&self.room.to_lowercase()) else {
            return false;
        };
        let building = rest.trim_start();
        building.len() < rest.len() && building == self.building.to_lowercase()
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.room, self.building)
    }
}

/// Read-only course table shared by every timetable request.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    records: Vec<CourseRecord>,
}

impl CourseCatalog {
    pub fn new(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn room_keys(&self) -> impl Iterator<Item = RoomKey> + '_ {
        self.records
            .iter()
            .filter_map(|r| r.location.as_deref())
            .filter_map(RoomKey::from_location)
    }

    /// Distinct, sorted building names.
    pub fn buildings(&self) -> Vec<String> {
        self.room_keys()
            .map(|key| key.building)
            .filter(|b| !b.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct, sorted room numbers within `building` (case-insensitive).
    pub fn rooms_in(&self, building: &str) -> Vec<String> {
        let building = building.to_lowercase();
        self.room_keys()
            .filter(|key| key.building.to_lowercase() == building)
            .map(|key| key.room)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Records held in `key`, in catalog order. Empty when the room has no classes.
    pub fn records_for_room(&self, key: &RoomKey) -> Vec<&CourseRecord> {
        self.records
            .iter()
            .filter(|r| r.location.as_deref().is_some_and(|loc| key.matches(loc)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(location: &str, class: &str) -> CourseRecord {
        CourseRecord {
            location: Some(location.into()),
            class: Some(class.into()),
            ..Default::default()
        }
    }

    fn catalog() -> CourseCatalog {
        CourseCatalog::new(vec![
            at("101 Loomis Laboratory", "PHYS 211"),
            at("1404 Siebel Center", "CS 225"),
            at("141 Loomis Laboratory", "PHYS 212"),
            at("101  loomis laboratory", "PHYS 213"),
            at("1010 Loomis Laboratory", "PHYS 214"),
            at("ARR", "IND STUDY"),
        ])
    }

    #[test]
    fn test_room_key_from_location() {
        assert_eq!(
            RoomKey::from_location("101  Loomis   Laboratory"),
            Some(RoomKey::new("101", "Loomis Laboratory"))
        );
        assert_eq!(RoomKey::from_location("ARR"), Some(RoomKey::new("ARR", "")));
        assert_eq!(RoomKey::from_location("   "), None);
    }

    #[test]
    fn test_buildings_are_distinct_and_sorted() {
        assert_eq!(
            catalog().buildings(),
            vec![
                "Loomis Laboratory".to_string(),
                "Siebel Center".to_string(),
                "loomis laboratory".to_string(),
            ]
        );
    }

    #[test]
    fn test_rooms_in_building_ignore_case() {
        assert_eq!(
            catalog().rooms_in("LOOMIS LABORATORY"),
            vec!["101".to_string(), "1010".to_string(), "141".to_string()]
        );
        assert!(catalog().rooms_in("Altgeld Hall").is_empty());
    }

    #[test]
    fn test_records_for_room_matches_whole_location() {
        let catalog = catalog();
        let classes: Vec<_> = catalog
            .records_for_room(&RoomKey::new("101", "Loomis Laboratory"))
            .into_iter()
            .filter_map(|r| r.class.as_deref())
            .collect();
        assert_eq!(classes, vec!["PHYS 211", "PHYS 213"]);
    }

    #[test]
    fn test_records_for_unknown_room_is_empty() {
        let catalog = catalog();
        assert!(catalog
            .records_for_room(&RoomKey::new("999", "Loomis Laboratory"))
            .is_empty());
        assert!(!RoomKey::new("101", "Loomis").matches("101 Loomis Laboratory"));
        assert!(!RoomKey::new("101", "Loomis Laboratory").matches("101Loomis Laboratory"));
    }
}
