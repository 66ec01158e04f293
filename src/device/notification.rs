use serde::{Deserialize, Serialize};

const ICON_TYPE: &str = "info";
const SOUND_CATEGORY_NOTIFICATIONS: &str = "notifications";

/// Notification priority understood by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Info,
    Warning,
    Critical,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Warning
    }
}

/// One screen of a notification: an optional icon plus text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub text: String,
}

impl Frame {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            icon: None,
            text: text.into(),
        }
    }

    pub fn with_icon(icon: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            text: text.into(),
        }
    }
}

/// Sound cue played alongside a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sound {
    pub category: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<u32>,
}

impl Sound {
    /// A sound from the device's `notifications` category.
    pub fn notification(id: impl Into<String>) -> Self {
        Self {
            category: SOUND_CATEGORY_NOTIFICATIONS.to_string(),
            id: id.into(),
            repeat: None,
        }
    }

    /// Play the sound `repeat` times; 0 loops until the notification
    /// is dismissed.
    pub fn with_repeat(mut self, repeat: u32) -> Self {
        self.repeat = Some(repeat);
        self
    }
}

/// A full message for a device's display: ordered frames, cycle count,
/// and an optional sound cue.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub priority: Priority,
    pub frames: Vec<Frame>,
    pub cycles: u32,
    pub sound: Option<Sound>,
}

impl Notification {
    /// A warning-priority notification shown for one cycle, no sound.
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            priority: Priority::Warning,
            frames,
            cycles: 1,
            sound: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_cycles(mut self, cycles: u32) -> Self {
        self.cycles = cycles;
        self
    }

    pub fn with_sound(mut self, sound: Sound) -> Self {
        self.sound = Some(sound);
        self
    }

    pub(crate) fn payload(&self) -> NotificationPayload<'_> {
        NotificationPayload {
            priority: self.priority,
            icon_type: ICON_TYPE,
            model: DisplayModel {
                frames: &self.frames,
                cycles: self.cycles,
                sound: self.sound.as_ref(),
            },
        }
    }
}

/// Wire shape POSTed to `/api/v2/device/notifications`.
#[derive(Debug, Serialize)]
pub(crate) struct NotificationPayload<'a> {
    priority: Priority,
    icon_type: &'static str,
    model: DisplayModel<'a>,
}

#[derive(Debug, Serialize)]
struct DisplayModel<'a> {
    frames: &'a [Frame],
    cycles: u32,
    #[serde(serialize_with = "sound_or_empty")]
    sound: Option<&'a Sound>,
}

/// The device expects `sound` to always be present, `{}` meaning none.
fn sound_or_empty<S>(value: &Option<&Sound>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(sound) => sound.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn payload_matches_device_wire_shape() {
        let notification = Notification::new(vec![Frame::with_icon("a2867", "WORKS!")])
            .with_sound(Sound::notification("positive1"));
        assert_eq!(
            serde_json::to_value(notification.payload()).unwrap(),
            json!({
                "priority": "warning",
                "icon_type": "info",
                "model": {
                    "frames": [{"icon": "a2867", "text": "WORKS!"}],
                    "cycles": 1,
                    "sound": {"category": "notifications", "id": "positive1"}
                }
            })
        );
    }

    #[test]
    fn absent_sound_serializes_as_empty_object() {
        let notification = Notification::new(vec![Frame::new("hello")]);
        let value = serde_json::to_value(notification.payload()).unwrap();
        assert_eq!(value["model"]["sound"], json!({}));
    }

    #[test]
    fn frame_without_icon_omits_the_key() {
        let value = serde_json::to_value(Frame::new("plain")).unwrap();
        assert_eq!(value, json!({"text": "plain"}));
    }

    #[test]
    fn sound_repeat_is_serialized_when_set() {
        let value = serde_json::to_value(Sound::notification("alarm1").with_repeat(0)).unwrap();
        assert_eq!(
            value,
            json!({"category": "notifications", "id": "alarm1", "repeat": 0})
        );
    }

    #[test]
    fn priorities_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Priority::Info).unwrap(), json!("info"));
        assert_eq!(
            serde_json::to_value(Priority::Warning).unwrap(),
            json!("warning")
        );
        assert_eq!(
            serde_json::to_value(Priority::Critical).unwrap(),
            json!("critical")
        );
    }

    #[test]
    fn cycles_and_priority_overrides_reach_the_payload() {
        let notification = Notification::new(vec![Frame::new("hi")])
            .with_priority(Priority::Critical)
            .with_cycles(3);
        let value = serde_json::to_value(notification.payload()).unwrap();
        assert_eq!(value["priority"], "critical");
        assert_eq!(value["model"]["cycles"], 3);
    }
}
