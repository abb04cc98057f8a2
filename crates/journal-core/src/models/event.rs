// ABOUTME: Cooking event entity: one occasion a recipe was made, with rating and notes
// ABOUTME: Defines Event, its timestamp type, the populated detail view, and the calendar breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, SubsecRound, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::recipe::Recipe;

/// Moment a recipe was cooked
///
/// Accepts an RFC 3339 string, a bare `YYYY-MM-DD` date (midnight UTC), or a
/// number of milliseconds since the Unix epoch. Always renders as an ISO-8601
/// UTC string with millisecond precision, e.g. `2024-03-15T00:00:00.000Z`.
/// Sub-millisecond precision is dropped on construction so a stored and
/// re-read date compares equal to the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventDate(DateTime<Utc>);

impl EventDate {
    /// Wrap a UTC timestamp, truncated to millisecond precision
    #[must_use]
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at.trunc_subsecs(3))
    }

    /// Current time
    #[must_use]
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    /// Build from milliseconds since the Unix epoch
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    /// Day/month/year of this timestamp in UTC
    #[must_use]
    pub fn calendar(&self) -> CalendarDate {
        CalendarDate::from_datetime(self.0)
    }

    /// Canonical storage and wire representation
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl From<DateTime<Utc>> for EventDate {
    fn from(at: DateTime<Utc>) -> Self {
        Self::new(at)
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

/// Error produced when a timestamp string cannot be understood
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDateParseError(String);

impl fmt::Display for EventDateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid dateOfEvent '{}'", self.0)
    }
}

impl std::error::Error for EventDateParseError {}

impl FromStr for EventDate {
    type Err = EventDateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(at) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::new(at.with_timezone(&Utc)));
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self::new(naive.and_utc()))
            .ok_or_else(|| EventDateParseError(s.to_owned()))
    }
}

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EventDateVisitor)
    }
}

struct EventDateVisitor;

impl de::Visitor<'_> for EventDateVisitor {
    type Value = EventDate;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO-8601 timestamp string or milliseconds since the Unix epoch")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        EventDate::from_millis(v)
            .ok_or_else(|| E::custom(format!("timestamp {v} is out of range")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let millis =
            i64::try_from(v).map_err(|_| E::custom(format!("timestamp {v} is out of range")))?;
        self.visit_i64(millis)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() {
            return Err(E::custom("timestamp must be a finite number"));
        }
        self.visit_i64(v.trunc() as i64)
    }
}

/// Calendar breakdown of an event date, computed at read time and never stored
///
/// `month` is 1-indexed: January is 1, December is 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    /// Day of the month, 1-31
    pub day: u32,
    /// Month of the year, 1-12
    pub month: u32,
    /// Calendar year
    pub year: i32,
}

impl CalendarDate {
    /// Extract the UTC calendar components of a timestamp
    #[must_use]
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self {
            day: at.day(),
            month: at.month(),
            year: at.year(),
        }
    }
}

/// A record of one occasion a recipe was made
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event identifier
    pub id: Uuid,
    /// Recipe this event refers to; may dangle once the recipe is deleted
    pub recipe_id: Uuid,
    /// When the recipe was cooked
    pub date_of_event: EventDate,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Rating given to this attempt
    pub rating: f64,
}

impl Event {
    /// Build a new event from a create payload, generating its identifier
    #[must_use]
    pub fn from_request(request: CreateEventRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe_id: request.recipe_id,
            date_of_event: request.date_of_event,
            notes: request.notes,
            rating: request.rating,
        }
    }
}

/// Single-event read model: the referenced recipe populated in place of its id,
/// plus the calendar breakdown of `dateOfEvent`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    /// Unique event identifier
    pub id: Uuid,
    /// The full referenced recipe, or `null` when it no longer exists
    pub recipe_id: Option<Recipe>,
    /// When the recipe was cooked
    pub date_of_event: EventDate,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Rating given to this attempt
    pub rating: f64,
    /// Derived day/month/year
    #[serde(flatten)]
    pub calendar: CalendarDate,
}

impl EventDetail {
    /// Merge an event with its (possibly missing) recipe
    #[must_use]
    pub fn populate(event: Event, recipe: Option<Recipe>) -> Self {
        Self {
            id: event.id,
            recipe_id: recipe,
            calendar: event.date_of_event.calendar(),
            date_of_event: event.date_of_event,
            notes: event.notes,
            rating: event.rating,
        }
    }
}

/// Request to log a cooking event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateEventRequest {
    /// Recipe being cooked; existence is not checked
    pub recipe_id: Uuid,
    /// When it was cooked
    pub date_of_event: EventDate,
    /// Optional notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Rating for this attempt
    pub rating: f64,
}

/// Partial update of an event; `None` leaves the stored value untouched
///
/// `notes` is the one nullable field: an explicit `"notes": null` arrives as
/// `Some(None)` and clears the stored notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateEventRequest {
    /// New recipe reference
    pub recipe_id: Option<Uuid>,
    /// New event date
    pub date_of_event: Option<EventDate>,
    /// New notes, or `Some(None)` to clear them
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
    /// New rating
    pub rating: Option<f64>,
}

// Only called when the key is present, so a `null` value becomes `Some(None)`
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_calendar_uses_one_indexed_month() {
        let date: EventDate = "2024-03-15T00:00:00Z".parse().unwrap();

        assert_eq!(
            date.calendar(),
            CalendarDate {
                day: 15,
                month: 3,
                year: 2024
            }
        );
    }

    #[test]
    fn test_calendar_january_and_december_bounds() {
        let january = EventDate::new(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        let december = EventDate::new(Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap());

        assert_eq!(january.calendar().month, 1);
        assert_eq!(december.calendar().month, 12);
        assert_eq!(december.calendar().day, 31);
    }

    #[test]
    fn test_calendar_is_computed_in_utc() {
        // 23:30 on the 14th in UTC-05:00 is already the 15th in UTC
        let date: EventDate = "2024-03-14T23:30:00-05:00".parse().unwrap();
        assert_eq!(date.calendar().day, 15);
    }

    #[test]
    fn test_event_date_accepts_epoch_millis() {
        let date: EventDate = serde_json::from_value(json!(1_710_460_800_000_i64)).unwrap();
        assert_eq!(date.to_iso_string(), "2024-03-15T00:00:00.000Z");
    }

    #[test]
    fn test_event_date_accepts_plain_date() {
        let date: EventDate = serde_json::from_value(json!("2024-03-15")).unwrap();
        assert_eq!(date.to_iso_string(), "2024-03-15T00:00:00.000Z");
    }

    #[test]
    fn test_event_date_truncates_to_millis() {
        let date: EventDate = "2024-03-15T10:20:30.123456789Z".parse().unwrap();
        assert_eq!(date.to_iso_string(), "2024-03-15T10:20:30.123Z");
        assert_eq!(date, date.to_iso_string().parse().unwrap());
    }

    #[test]
    fn test_event_date_rejects_garbage() {
        assert!(serde_json::from_value::<EventDate>(json!("next tuesday")).is_err());
        assert!(serde_json::from_value::<EventDate>(json!(true)).is_err());
    }

    #[test]
    fn test_event_serialization_shape() {
        let event = Event {
            id: Uuid::new_v4(),
            recipe_id: Uuid::new_v4(),
            date_of_event: "2024-03-15T12:30:00Z".parse().unwrap(),
            notes: None,
            rating: 4.0,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["recipeId"], event.recipe_id.to_string());
        assert_eq!(value["dateOfEvent"], "2024-03-15T12:30:00.000Z");
        assert_eq!(value["rating"], 4.0);
        assert!(value.get("notes").is_none());
    }

    #[test]
    fn test_populate_with_missing_recipe_serializes_null() {
        let event = Event {
            id: Uuid::new_v4(),
            recipe_id: Uuid::new_v4(),
            date_of_event: "2024-03-15T00:00:00Z".parse().unwrap(),
            notes: Some("It went well".into()),
            rating: 4.0,
        };

        let detail = EventDetail::populate(event, None);
        let value = serde_json::to_value(&detail).unwrap();

        assert!(value["recipeId"].is_null());
        assert_eq!(value["day"], 15);
        assert_eq!(value["month"], 3);
        assert_eq!(value["year"], 2024);
        assert_eq!(value["notes"], "It went well");
    }

    #[test]
    fn test_create_request_requires_date_and_rating() {
        let recipe_id = Uuid::new_v4();

        let missing_date = serde_json::from_value::<CreateEventRequest>(json!({
            "recipeId": recipe_id,
            "rating": 4
        }));
        assert!(missing_date.is_err());

        let missing_rating = serde_json::from_value::<CreateEventRequest>(json!({
            "recipeId": recipe_id,
            "dateOfEvent": "2024-03-15T00:00:00Z"
        }));
        assert!(missing_rating.is_err());
    }

    #[test]
    fn test_update_request_tells_null_notes_from_absent_notes() {
        let absent: UpdateEventRequest = serde_json::from_value(json!({ "rating": 2 })).unwrap();
        assert_eq!(absent.notes, None);

        let cleared: UpdateEventRequest =
            serde_json::from_value(json!({ "notes": null })).unwrap();
        assert_eq!(cleared.notes, Some(None));

        let set: UpdateEventRequest =
            serde_json::from_value(json!({ "notes": "less sugar" })).unwrap();
        assert_eq!(set.notes, Some(Some("less sugar".to_owned())));
    }

    #[test]
    fn test_create_request_rejects_malformed_recipe_id() {
        let result = serde_json::from_value::<CreateEventRequest>(json!({
            "recipeId": "not-an-id",
            "dateOfEvent": "2024-03-15T00:00:00Z",
            "rating": 4
        }));
        assert!(result.is_err());
    }
}
