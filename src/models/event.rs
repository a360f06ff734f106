// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Event model and its location variants.
//!
//! The location is persisted as a JSON text column and decoded into
//! [`Location`] on load. Unknown `type` discriminators are rejected.

use crate::jsonapi::{
    LinkBuilder, Links, Relationship, RelationshipData, Resource, ResourceIdentifier,
};
use crate::models::User;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Event times on the wire: RFC 3339 with a `Z` suffix, whole seconds.
fn format_event_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Where an event takes place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS), ts(export))]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Location {
    Online {
        platform: String,
        link: String,
    },
    Physical {
        zip_code: String,
        address: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        building: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    },
}

impl Location {
    /// Encode for the `location_json` column.
    pub fn save(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode the `location_json` column.
    pub fn load(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Event row as stored in the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventRow {
    pub id: i64,
    pub title: String,
    pub time_begin: DateTime<Utc>,
    pub time_end: DateTime<Utc>,
    pub location_json: String,
    pub event_type: String,
    pub organizer_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EventRow {
    /// Decode the stored location, yielding a fully typed event.
    pub fn load_location(self) -> serde_json::Result<Event> {
        let location = Location::load(&self.location_json)?;
        Ok(Event {
            id: self.id,
            title: self.title,
            time_begin: self.time_begin,
            time_end: self.time_end,
            location,
            event_type: self.event_type,
            organizer_id: self.organizer_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Event with its location decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub time_begin: DateTime<Utc>,
    pub time_end: DateTime<Utc>,
    pub location: Location,
    pub event_type: String,
    /// Owning user
    pub organizer_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn is_organized_by(&self, user: &User) -> bool {
        self.organizer_id == user.id
    }
}

/// Fields required to insert an event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub time_begin: DateTime<Utc>,
    pub time_end: DateTime<Utc>,
    pub location: Location,
    pub event_type: String,
    pub organizer_id: i64,
}

/// Client-supplied event attributes.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EventRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub time_begin: Option<DateTime<Utc>>,
    pub time_end: Option<DateTime<Utc>>,
    pub location: Option<Location>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

/// Event attributes as rendered in API responses.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS), ts(export))]
pub struct EventAttributes {
    pub title: String,
    /// RFC 3339, UTC
    pub time_begin: String,
    /// RFC 3339, UTC
    pub time_end: String,
    pub location: Location,
    #[serde(rename = "type")]
    pub event_type: String,
}

impl Resource for Event {
    const TYPE: &'static str = "event";

    fn id(&self) -> i64 {
        self.id
    }

    fn attributes(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(EventAttributes {
            title: self.title.clone(),
            time_begin: format_event_time(self.time_begin),
            time_end: format_event_time(self.time_end),
            location: self.location.clone(),
            event_type: self.event_type.clone(),
        })
    }

    fn relationships(&self, links: LinkBuilder<'_>) -> BTreeMap<String, Relationship> {
        BTreeMap::from([(
            "organizer".to_string(),
            Relationship {
                data: Some(RelationshipData::One(ResourceIdentifier::new(
                    User::TYPE,
                    self.organizer_id,
                ))),
                links: Some(Links::from([(
                    "related".to_string(),
                    links.resource(User::TYPE, self.organizer_id),
                )])),
            },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn online() -> Location {
        Location::Online {
            platform: "Zoom".to_string(),
            link: "https://zoom.us/j/123".to_string(),
        }
    }

    fn physical() -> Location {
        Location::Physical {
            zip_code: "119077".to_string(),
            address: "21 Lower Kent Ridge Rd".to_string(),
            building: Some("University Hall".to_string()),
            unit: None,
        }
    }

    #[test]
    fn test_location_round_trip() {
        for location in [online(), physical()] {
            let json = location.save().unwrap();
            assert_eq!(Location::load(&json).unwrap(), location);
        }
    }

    #[test]
    fn test_location_discriminator() {
        let json = online().save().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "online");

        let json = physical().save().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "physical");
        assert_eq!(value["zip_code"], "119077");
        assert!(value.get("unit").is_none());
    }

    #[test]
    fn test_location_rejects_unknown_type() {
        assert!(Location::load(r#"{"type":"hybrid","platform":"Zoom"}"#).is_err());
        assert!(Location::load(r#"{"platform":"Zoom","link":"x"}"#).is_err());
    }

    #[test]
    fn test_physical_location_optional_fields() {
        let location =
            Location::load(r#"{"type":"physical","zip_code":"1","address":"Main St"}"#).unwrap();
        assert_eq!(
            location,
            Location::Physical {
                zip_code: "1".to_string(),
                address: "Main St".to_string(),
                building: None,
                unit: None,
            }
        );
    }

    #[test]
    fn test_event_row_load_location() {
        let begin = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let row = EventRow {
            id: 4,
            title: "Orientation".to_string(),
            time_begin: begin,
            time_end: begin + chrono::Duration::hours(2),
            location_json: physical().save().unwrap(),
            event_type: "social".to_string(),
            organizer_id: 1,
            created_at: begin,
            updated_at: begin,
        };

        let event = row.load_location().unwrap();
        assert_eq!(event.location, physical());

        let attrs = event.attributes().unwrap();
        assert_eq!(attrs["time_begin"], "2026-03-01T09:00:00Z");
        assert_eq!(attrs["location"]["type"], "physical");
    }

    #[test]
    fn test_event_organizer_relationship() {
        let begin = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let event = Event {
            id: 9,
            title: "Hackathon".to_string(),
            time_begin: begin,
            time_end: begin,
            location: online(),
            event_type: "workshop".to_string(),
            organizer_id: 12,
            created_at: begin,
            updated_at: begin,
        };

        let object = event
            .to_resource_object(LinkBuilder::new("https://api.example.org"))
            .unwrap();
        let value = serde_json::to_value(&object).unwrap();

        assert_eq!(value["links"]["self"], "https://api.example.org/api/event/9");
        assert_eq!(value["relationships"]["organizer"]["data"]["id"], "12");
        assert_eq!(
            value["relationships"]["organizer"]["links"]["related"],
            "https://api.example.org/api/user/12"
        );
    }
}
