//! Patient record and intake note endpoints

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;

/// Demographics block of a record
///
/// Only `name` is contractual; EHR exports attach arbitrary extra keys.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Value,
}

/// Summary entry from the patient list
#[derive(Debug, Clone, Deserialize)]
pub struct PatientSummary {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(default)]
    pub patient_info: Option<PatientInfo>,
}

impl PatientSummary {
    /// Display name, if the record carries one
    pub fn name(&self) -> Option<&str> {
        self.patient_info.as_ref().and_then(|info| info.name.as_deref())
    }
}

/// List envelope returned by the backend; callers get the inner sequence
#[derive(Debug, Deserialize)]
pub struct PatientList {
    pub patients: Vec<PatientSummary>,
}

/// Full patient record
///
/// The nested sections come from YAML-authored EHR output and nest
/// arbitrarily (a symptom may itself be a list), so they stay as raw
/// values and the view renders them recursively.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientRecord {
    #[serde(default)]
    pub patient_info: Option<PatientInfo>,
    #[serde(default)]
    pub chief_complaint: Option<String>,
    #[serde(default)]
    pub symptoms: Option<Value>,
    #[serde(default)]
    pub assessment: Option<Value>,
    #[serde(default)]
    pub recommendations: Option<Value>,
    #[serde(default)]
    pub urgency_level: Option<String>,
}

/// Latest intake note from the voice agent
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeNote {
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub chief_complaint: Option<String>,
    #[serde(default)]
    pub symptoms: Option<Value>,
}

/// Patient ids arrive as strings or bare numbers depending on the export
fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "invalid patient id: {other}"
        ))),
    }
}

impl ApiClient {
    /// Fetch one patient record
    pub async fn patient(&self, patient_id: &str) -> Result<PatientRecord, ApiError> {
        self.get(&format!("/patient/{patient_id}")).await
    }

    /// Fetch all patient summaries, unwrapping the list envelope
    pub async fn patients(&self) -> Result<Vec<PatientSummary>, ApiError> {
        let list: PatientList = self.get("/patients").await?;
        Ok(list.patients)
    }

    /// Fetch the most recent intake note
    pub async fn latest_note(&self) -> Result<IntakeNote, ApiError> {
        self.get("/latest_note").await
    }
}
