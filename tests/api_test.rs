// Tests for backend API envelopes and the error taxonomy

use vitalmesh::api::chatbot::{ChatReply, ChatbotStatus, RefreshResult};
use vitalmesh::api::patients::{IntakeNote, PatientList, PatientRecord};
use vitalmesh::api::voice::AgentControlReply;
use vitalmesh::api::ApiError;

#[test]
fn patient_list_unwraps_the_envelope() {
    let list: PatientList =
        serde_json::from_str(r#"{"patients":[{"id":1,"patient_info":{"name":"A"}}]}"#).unwrap();

    assert_eq!(list.patients.len(), 1);
    assert_eq!(list.patients[0].id, "1");
    assert_eq!(list.patients[0].name(), Some("A"));
}

#[test]
fn patient_summary_tolerates_missing_info() {
    let list: PatientList =
        serde_json::from_str(r#"{"patients":[{"id":"p_0042"}]}"#).unwrap();

    assert_eq!(list.patients[0].id, "p_0042");
    assert_eq!(list.patients[0].name(), None);
}

#[test]
fn patient_record_tolerates_nested_sections() {
    let record: PatientRecord = serde_json::from_str(
        r#"{
            "patient_info": {"name": "Ana Flores", "age": 41},
            "chief_complaint": "chest tightness",
            "symptoms": ["fever", ["chills", "sweats"]],
            "assessment": {"differential": ["angina", {"ruled_out": "pneumonia"}]},
            "recommendations": ["ecg", "troponin panel"],
            "urgency_level": "high"
        }"#,
    )
    .unwrap();

    assert_eq!(record.chief_complaint.as_deref(), Some("chest tightness"));
    assert_eq!(record.urgency_level.as_deref(), Some("high"));
    let symptoms = record.symptoms.unwrap();
    assert!(symptoms[1].is_array());
}

#[test]
fn intake_note_parses_with_nested_symptoms() {
    let note: IntakeNote = serde_json::from_str(
        r#"{"patient_name":"B. Okafor","chief_complaint":"migraine","symptoms":["aura",["photophobia"]]}"#,
    )
    .unwrap();

    assert_eq!(note.patient_name.as_deref(), Some("B. Okafor"));
    assert!(note.symptoms.unwrap()[1].is_array());
}

#[test]
fn agent_reply_with_null_or_missing_status() {
    let reply: AgentControlReply = serde_json::from_str(r#"{"status":null}"#).unwrap();
    assert_eq!(reply.status_str(), "");

    let reply: AgentControlReply = serde_json::from_str("{}").unwrap();
    assert_eq!(reply.status_str(), "");

    let reply: AgentControlReply = serde_json::from_str(r#"{"status":"starting"}"#).unwrap();
    assert_eq!(reply.status_str(), "starting");
}

#[test]
fn chat_reply_success_and_failure_shapes() {
    let reply: ChatReply =
        serde_json::from_str(r#"{"success":true,"response":"Patient 3 is stable."}"#).unwrap();
    assert!(reply.success);
    assert_eq!(reply.response.as_deref(), Some("Patient 3 is stable."));

    let reply: ChatReply = serde_json::from_str(
        r#"{"success":false,"response":"","error":"Chatbot initialization failed"}"#,
    )
    .unwrap();
    assert!(!reply.success);
    assert_eq!(reply.error.as_deref(), Some("Chatbot initialization failed"));
}

#[test]
fn chatbot_status_optional_fields() {
    let status: ChatbotStatus =
        serde_json::from_str(r#"{"status":"available","patient_count":7,"model":"claude-sonnet"}"#)
            .unwrap();
    assert_eq!(status.patient_count, Some(7));
    assert_eq!(status.model.as_deref(), Some("claude-sonnet"));

    let status: ChatbotStatus = serde_json::from_str(r#"{"status":"unavailable"}"#).unwrap();
    assert_eq!(status.status, "unavailable");
    assert_eq!(status.patient_count, None);
}

#[test]
fn refresh_result_carries_the_message() {
    let result: RefreshResult = serde_json::from_str(
        r#"{"status":"success","message":"Data refreshed! Now tracking 7 patients."}"#,
    )
    .unwrap();
    assert_eq!(result.message, "Data refreshed! Now tracking 7 patients.");
}

#[test]
fn server_error_renders_the_backend_message() {
    let err = ApiError::Server {
        status: 404,
        message: "Patient not found".to_string(),
    };

    assert_eq!(err.to_string(), "Server error (404): Patient not found");
    assert!(!err.is_connectivity());
}
