// Notification Domain Model (toast-style title + description)

use serde::{Deserialize, Serialize};

/// What triggered a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    QueueJoined,
    ReachedFront,
    PatientCalled,
    ConsultationCompleted,
    QueueLeft,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub emitted_at: i64, // epoch ms
}

impl Notification {
    fn new(
        kind: NotificationKind,
        title: &str,
        description: impl Into<String>,
        emitted_at: i64,
    ) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.into(),
            emitted_at,
        }
    }

    pub fn queue_joined(queue_number: u32, emitted_at: i64) -> Self {
        Self::new(
            NotificationKind::QueueJoined,
            "Queue Booking Confirmed",
            format!("You are now in the queue. Your number is {}.", queue_number),
            emitted_at,
        )
    }

    pub fn reached_front(emitted_at: i64) -> Self {
        Self::new(
            NotificationKind::ReachedFront,
            "You're Next!",
            "The doctor is ready to see you now. Please proceed to the consultation room.",
            emitted_at,
        )
    }

    pub fn patient_called(name: &str, queue_number: u32, emitted_at: i64) -> Self {
        Self::new(
            NotificationKind::PatientCalled,
            "Patient Called",
            format!("{} (Queue #{}) has been called.", name, queue_number),
            emitted_at,
        )
    }

    pub fn consultation_completed(name: &str, emitted_at: i64) -> Self {
        Self::new(
            NotificationKind::ConsultationCompleted,
            "Consultation Completed",
            format!("{}'s consultation has been marked as completed.", name),
            emitted_at,
        )
    }

    pub fn queue_left(emitted_at: i64) -> Self {
        Self::new(
            NotificationKind::QueueLeft,
            "Left Queue",
            "You have successfully left the queue.",
            emitted_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_details() {
        let n = Notification::queue_joined(42, 1000);
        assert_eq!(n.title, "Queue Booking Confirmed");
        assert!(n.description.contains("42"));
        assert_eq!(n.emitted_at, 1000);

        let n = Notification::patient_called("Mike Davis", 3, 2000);
        assert_eq!(n.description, "Mike Davis (Queue #3) has been called.");

        let n = Notification::consultation_completed("Mike Davis", 3000);
        assert_eq!(
            n.description,
            "Mike Davis's consultation has been marked as completed."
        );
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_value(Notification::reached_front(5)).unwrap();
        assert_eq!(json["kind"], "reached_front");
        assert_eq!(json["title"], "You're Next!");
    }
}
