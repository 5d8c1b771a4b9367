// Tests for view projections and the route table

use chrono::{Local, TimeZone};
use serde_json::json;

use vitalmesh::agent::AgentIndicator;
use vitalmesh::api::chatbot::ChatReply;
use vitalmesh::api::patients::{IntakeNote, PatientRecord};
use vitalmesh::router::Route;
use vitalmesh::views::chat::{reply_content, transcript_line, Speaker};
use vitalmesh::views::patient::{patient_detail, patient_report, render_value};
use vitalmesh::views::voice::{indicator_glyph, status_line};

#[test]
fn nested_symptoms_preserve_depth() {
    let rendered = render_value(&json!(["fever", ["chills", "sweats"]]), 0);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "- fever");
    assert_eq!(lines[1], "-");
    assert_eq!(lines[2], "  - chills");
    assert_eq!(lines[3], "  - sweats");
}

#[test]
fn mappings_render_as_keyed_lines() {
    let rendered = render_value(&json!({"bp": "120/80", "labs": {"wbc": 11}}), 0);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "bp: 120/80");
    assert_eq!(lines[1], "labs:");
    assert_eq!(lines[2], "  wbc: 11");
}

#[test]
fn patient_detail_renders_nested_record() {
    let record: PatientRecord = serde_json::from_value(json!({
        "patient_info": {"name": "Ana Flores"},
        "chief_complaint": "chest tightness",
        "symptoms": ["fever", ["chills", "sweats"]],
        "urgency_level": "high"
    }))
    .unwrap();

    let page = patient_detail("p_0001", &record);

    assert!(page.contains("Patient p_0001"));
    assert!(page.contains("Name: Ana Flores"));
    assert!(page.contains("Urgency: high"));
    assert!(page.contains("    - chills"));
    // Sections absent from the record fall back to N/A
    assert!(page.contains("Assessment\n  N/A"));
}

#[test]
fn patient_detail_defaults_for_sparse_record() {
    let record: PatientRecord = serde_json::from_value(json!({})).unwrap();
    let page = patient_detail("p_0002", &record);

    assert!(page.contains("Name: Unknown"));
    assert!(page.contains("Chief Complaint: N/A"));
}

#[test]
fn patient_report_summarizes_the_note() {
    let note: IntakeNote = serde_json::from_value(json!({
        "patient_name": "B. Okafor",
        "chief_complaint": "migraine",
        "symptoms": ["aura"]
    }))
    .unwrap();

    let page = patient_report(&note);
    assert!(page.contains("Visit Summary"));
    assert!(page.contains("Patient: B. Okafor"));
    assert!(page.contains("  - aura"));
}

#[test]
fn route_table_round_trips() {
    let routes = [
        Route::Landing,
        Route::PatientStart,
        Route::PatientVoice,
        Route::PatientReport,
        Route::ClinicalLogin,
        Route::ClinicalDashboard,
        Route::ClinicalChatbot,
        Route::ClinicalPatient {
            patient_id: "42".to_string(),
        },
    ];

    for route in routes {
        assert_eq!(Route::parse(&route.path()), Some(route.clone()), "{route:?}");
    }
}

#[test]
fn route_patient_id_capture() {
    assert_eq!(
        Route::parse("/clinical/patient/42"),
        Some(Route::ClinicalPatient {
            patient_id: "42".to_string()
        })
    );
    assert_eq!(Route::parse("/clinical/patient/"), None);
    assert_eq!(Route::parse("/clinical/patient/42/labs"), None);
    assert_eq!(Route::parse("/nope"), None);
}

#[test]
fn transcript_line_formatting() {
    let at = Local.with_ymd_and_hms(2025, 3, 1, 9, 5, 0).unwrap();
    assert_eq!(transcript_line(Speaker::User, at, "hi"), "[09:05 you] hi");
    assert_eq!(transcript_line(Speaker::Bot, at, "hello"), "[09:05 bot] hello");
}

#[test]
fn reply_content_branches_on_success() {
    let ok: ChatReply =
        serde_json::from_value(json!({"success": true, "response": "All stable."})).unwrap();
    assert_eq!(reply_content(&ok), "All stable.");

    let failed: ChatReply =
        serde_json::from_value(json!({"success": false, "error": "boom"})).unwrap();
    assert_eq!(reply_content(&failed), "Error: boom");

    let bare: ChatReply = serde_json::from_value(json!({"success": false})).unwrap();
    assert_eq!(reply_content(&bare), "Error: Unknown error occurred");
}

#[test]
fn voice_indicator_glyphs() {
    let active = AgentIndicator {
        message: "Speaking with AI agent...".to_string(),
        active: true,
        busy: false,
    };
    assert_eq!(indicator_glyph(&active), "[*]");
    assert_eq!(status_line(&active), "[*] Speaking with AI agent...");

    let busy = AgentIndicator {
        message: "Starting agent...".to_string(),
        active: false,
        busy: true,
    };
    assert_eq!(indicator_glyph(&busy), "[~]");

    let idle = AgentIndicator {
        message: "Agent stopped".to_string(),
        active: false,
        busy: false,
    };
    assert_eq!(indicator_glyph(&idle), "[ ]");
}
