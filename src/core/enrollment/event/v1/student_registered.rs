// Event payload: StudentRegisteredV1.
//
// Purpose
// - Record the business fact that a student took a seat in a course.
//
// Inputs and outputs
// - Inputs: values from the command validated by the register decider.
// - Outputs: fed into evolve to add the pair to the ledger, and into the journal.
//
// Timestamps
// - occurred_at is epoch milliseconds.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct StudentRegisteredV1 {
    pub student_id: String,
    pub course_code: String,
    pub occurred_at: i64,
}

#[cfg(test)]
mod student_registered_event_tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::fs;

    #[fixture]
    fn registered_event() -> StudentRegisteredV1 {
        StudentRegisteredV1 {
            student_id: "1".to_string(),
            course_code: "CS101".to_string(),
            occurred_at: 1_700_000_000_000,
        }
    }

    #[fixture]
    fn golden_registered_event_json() -> serde_json::Value {
        let s = fs::read_to_string("tests/fixtures/events/student_registered_v1.json").unwrap();
        serde_json::from_str(&s).unwrap()
    }

    #[rstest]
    fn it_serializes_registered_event_stable(
        registered_event: StudentRegisteredV1,
        golden_registered_event_json: serde_json::Value,
    ) {
        let json = serde_json::to_value(&registered_event).unwrap();
        assert_eq!(json, golden_registered_event_json);
    }
}
