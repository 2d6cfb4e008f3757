//! Dining Table Model

use serde::{Deserialize, Serialize};

use crate::types::PartySize;

/// Dining table snapshot returned by the availability query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    /// Area of the venue (e.g. "Window", "Bar"); the service may omit it
    #[serde(default)]
    pub location: Option<String>,
}

impl Table {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        capacity: u32,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            location: Some(location.into()),
        }
    }

    /// Whether a party of the given size fits at this table
    pub fn seats(&self, party_size: PartySize) -> bool {
        self.capacity >= u32::from(party_size.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seats_party() {
        let table = Table::new("t1", "Table 1", 4, "Center");
        assert!(table.seats(PartySize::new(4).unwrap()));
        assert!(!table.seats(PartySize::new(5).unwrap()));
    }

    #[test]
    fn test_missing_location_decodes_as_none() {
        let table: Table =
            serde_json::from_str(r#"{"id":"7","name":"Table 7","capacity":4}"#).unwrap();
        assert_eq!(table.location, None);

        let table: Table = serde_json::from_str(
            r#"{"id":"7","name":"Table 7","capacity":4,"location":null}"#,
        )
        .unwrap();
        assert_eq!(table.location, None);
    }
}
