//! Patient record rendering

use serde_json::Value;

use crate::api::patients::{IntakeNote, PatientRecord};

/// Render a heterogeneous record value as indented lines
///
/// EHR exports nest arbitrarily: a symptom entry may itself be a list
/// or a mapping. Scalars render inline, sequences as bullet lists,
/// mappings as `key:` lines, one indent level per nesting level.
pub fn render_value(value: &Value, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    match value {
        Value::Null => format!("{pad}N/A"),
        Value::String(s) => format!("{pad}{s}"),
        Value::Number(n) => format!("{pad}{n}"),
        Value::Bool(b) => format!("{pad}{b}"),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Array(_) | Value::Object(_) => {
                    format!("{pad}-\n{}", render_value(item, indent + 1))
                }
                _ => format!("{pad}- {}", render_inline(item)),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Object(map) => map
            .iter()
            .map(|(key, val)| match val {
                Value::Array(_) | Value::Object(_) => {
                    format!("{pad}{key}:\n{}", render_value(val, indent + 1))
                }
                _ => format!("{pad}{key}: {}", render_inline(val)),
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_inline(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "N/A".to_string(),
        other => other.to_string(),
    }
}

fn section(title: &str, value: Option<&Value>) -> String {
    match value {
        Some(value) => format!("\n{title}\n{}\n", render_value(value, 1)),
        None => format!("\n{title}\n  N/A\n"),
    }
}

/// Full patient record page
pub fn patient_detail(patient_id: &str, record: &PatientRecord) -> String {
    let name = record
        .patient_info
        .as_ref()
        .and_then(|info| info.name.as_deref())
        .unwrap_or("Unknown");

    let mut out = String::new();
    out.push_str(&format!("Patient {patient_id}\n"));
    out.push_str(&format!("Name: {name}\n"));
    out.push_str(&format!(
        "Chief Complaint: {}\n",
        record.chief_complaint.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "Urgency: {}\n",
        record.urgency_level.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&section("Symptoms", record.symptoms.as_ref()));
    out.push_str(&section("Assessment", record.assessment.as_ref()));
    out.push_str(&section("Recommendations", record.recommendations.as_ref()));
    out
}

/// Post-visit summary from the latest intake note
pub fn patient_report(note: &IntakeNote) -> String {
    let mut out = String::new();
    out.push_str("Visit Summary\n");
    out.push_str(&format!(
        "Patient: {}\n",
        note.patient_name.as_deref().unwrap_or("Unknown")
    ));
    out.push_str(&format!(
        "Chief Complaint: {}\n",
        note.chief_complaint.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&section("Symptoms", note.symptoms.as_ref()));
    out
}
