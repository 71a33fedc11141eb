// Root event enumeration for enrollment and re-exports of versioned payloads.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new version and a new variant.
// - Do not change the meaning of historical events.

pub mod v1 {
    pub mod student_dropped;
    pub mod student_registered;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum EnrollmentEvent {
    StudentRegisteredV1(v1::student_registered::StudentRegisteredV1),
    StudentDroppedV1(v1::student_dropped::StudentDroppedV1),
}

impl EnrollmentEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            EnrollmentEvent::StudentRegisteredV1(_) => "StudentRegistered",
            EnrollmentEvent::StudentDroppedV1(_) => "StudentDropped",
        }
    }

    pub fn event_version(&self) -> i32 {
        match self {
            EnrollmentEvent::StudentRegisteredV1(_) | EnrollmentEvent::StudentDroppedV1(_) => 1,
        }
    }

    /// One stream per (course, student) pair.
    pub fn stream_id(&self) -> String {
        let (course_code, student_id) = match self {
            EnrollmentEvent::StudentRegisteredV1(e) => (&e.course_code, &e.student_id),
            EnrollmentEvent::StudentDroppedV1(e) => (&e.course_code, &e.student_id),
        };
        format!("enrollment:{course_code}:{student_id}")
    }

    pub fn occurred_at(&self) -> i64 {
        match self {
            EnrollmentEvent::StudentRegisteredV1(e) => e.occurred_at,
            EnrollmentEvent::StudentDroppedV1(e) => e.occurred_at,
        }
    }
}

#[cfg(test)]
mod enrollment_event_tests {
    use super::*;
    use crate::core::enrollment::event::v1::{
        student_dropped::StudentDroppedV1, student_registered::StudentRegisteredV1,
    };
    use rstest::rstest;

    #[rstest]
    fn it_should_describe_the_registered_event() {
        let event = EnrollmentEvent::StudentRegisteredV1(StudentRegisteredV1 {
            student_id: "1".into(),
            course_code: "CS101".into(),
            occurred_at: 1_700_000_000_000,
        });
        assert_eq!(event.event_type(), "StudentRegistered");
        assert_eq!(event.event_version(), 1);
        assert_eq!(event.stream_id(), "enrollment:CS101:1");
        assert_eq!(event.occurred_at(), 1_700_000_000_000);
    }

    #[rstest]
    fn it_should_tag_the_serialized_event_with_its_variant() {
        let event = EnrollmentEvent::StudentDroppedV1(StudentDroppedV1 {
            student_id: "2".into(),
            course_code: "CS102".into(),
            occurred_at: 1_700_000_360_000,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "StudentDroppedV1");
        assert_eq!(json["course_code"], "CS102");
        let back: EnrollmentEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
