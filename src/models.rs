//! Persisted Models
//!
//! Entities stored by the widgets. Field names follow the JSON already in
//! users' localStorage.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::collection::Entity;

/// Widget tabs hosted by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Calendar,
    Todo,
    Calculator,
    #[serde(rename = "postit")]
    PostIt,
    Pomodoro,
    Audio,
}

impl Tab {
    /// Display order of the tab rail
    pub const ALL: [Tab; 6] = [
        Tab::Calendar,
        Tab::Todo,
        Tab::Calculator,
        Tab::PostIt,
        Tab::Pomodoro,
        Tab::Audio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Calendar => "calendar",
            Tab::Todo => "todo",
            Tab::Calculator => "calculator",
            Tab::PostIt => "postit",
            Tab::Pomodoro => "pomodoro",
            Tab::Audio => "audio",
        }
    }

    /// Parse a stored tab name. Accepts the raw name and its JSON-quoted form.
    pub fn parse(s: &str) -> Option<Self> {
        let name = s.trim().trim_matches('"');
        Tab::ALL.into_iter().find(|tab| tab.as_str() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Calendar => "Calendar",
            Tab::Todo => "To-do",
            Tab::Calculator => "Calculator",
            Tab::PostIt => "Notes",
            Tab::Pomodoro => "Pomodoro",
            Tab::Audio => "Music",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Calendar => "📅",
            Tab::Todo => "☑",
            Tab::Calculator => "🧮",
            Tab::PostIt => "🗒",
            Tab::Pomodoro => "⏱",
            Tab::Audio => "🎵",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            Tab::Calendar => "The calendar lets you add and manage events. Click a date to add an event.",
            Tab::Todo => "The to-do list keeps your tasks organised. Add tasks, tag them with an emoji and drag to reorder.",
            Tab::Calculator => "The calculator does basic arithmetic. Use the keypad or your keyboard.",
            Tab::PostIt => "Sticky notes are for quick jottings. Add a note and type straight into it.",
            Tab::Pomodoro => "The pomodoro timer paces work and breaks. Start, pause and reset as you need.",
            Tab::Audio => "The audio player plays local audio files. Load songs, reorder the playlist and control playback.",
        }
    }
}

/// Calendar event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    #[serde(with = "js_date")]
    pub date: NaiveDate,
    pub title: String,
}

/// To-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub emoji: Option<String>,
}

impl Todo {
    /// New open todo; `None` when the text is blank
    pub fn new(id: i64, text: &str, emoji: Option<&str>) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
            emoji: emoji.map(str::to_string),
        })
    }
}

/// Sticky note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostItNote {
    pub id: i64,
    pub content: String,
    /// CSS `hsl(...)` background
    pub color: String,
    /// CSS hex colour readable on `color`
    pub text_color: String,
}

/// Playlist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub name: String,
    pub artist: String,
    /// Object URL; only valid for the session that created it
    pub url: String,
}

impl Entity for Event {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Todo {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for PostItNote {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Calendar dates as JS `Date` JSON: the UTC instant of local midnight.
/// Plain `YYYY-MM-DD` is accepted on read.
mod js_date {
    use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let midnight = date.and_time(NaiveTime::MIN);
        let instant = Local
            .from_local_datetime(&midnight)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&midnight));
        serializer.serialize_str(&instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw)))
    }

    fn parse(raw: &str) -> Option<NaiveDate> {
        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(instant.with_timezone(&Local).date_naive());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_names_match_storage() {
        assert_eq!(serde_json::to_string(&Tab::PostIt).unwrap(), "\"postit\"");
        assert_eq!(Tab::parse("audio"), Some(Tab::Audio));
        assert_eq!(Tab::parse("\"todo\""), Some(Tab::Todo));
        assert_eq!(Tab::parse("settings"), None);
    }

    #[test]
    fn test_todo_requires_text() {
        assert!(Todo::new(1, "   ", None).is_none());
        let todo = Todo::new(1, "  buy milk ", Some("🚀")).unwrap();
        assert_eq!(todo.text, "buy milk");
        assert_eq!(todo.emoji.as_deref(), Some("🚀"));
        assert!(!todo.completed);
    }

    #[test]
    fn test_todo_reads_empty_emoji_as_none() {
        let json = r#"[{"id":1,"text":"a","completed":false,"emoji":""},{"id":2,"text":"b","completed":true}]"#;
        let todos: Vec<Todo> = serde_json::from_str(json).unwrap();
        assert_eq!(todos[0].emoji, None);
        assert_eq!(todos[1].emoji, None);
        assert!(todos[1].completed);
    }

    #[test]
    fn test_post_it_uses_camel_case() {
        let note = PostItNote {
            id: 7,
            content: "hi".to_string(),
            color: "hsl(10, 80%, 75%)".to_string(),
            text_color: "#000000".to_string(),
        };
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"textColor\":\"#000000\""));
    }

    #[test]
    fn test_event_date_survives_reload() {
        let event = Event {
            id: 1,
            date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            title: "Dentist".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("Z\""));
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_event_date_accepts_plain_dates() {
        let json = r#"{"id":1,"date":"2024-02-29","title":"Leap"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(serde_json::from_str::<Event>(r#"{"id":1,"date":"soon","title":"x"}"#).is_err());
    }
}
