//! Client route table

/// Navigable views, keyed by URL path
///
/// Static table; the only parameter is the patient id segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    PatientStart,
    PatientVoice,
    PatientReport,
    ClinicalLogin,
    ClinicalDashboard,
    ClinicalChatbot,
    ClinicalPatient { patient_id: String },
}

impl Route {
    /// Resolve a path against the table
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "" => Some(Route::Landing),
            "/patient" => Some(Route::PatientStart),
            "/patient/voice" => Some(Route::PatientVoice),
            "/patient/report" => Some(Route::PatientReport),
            "/clinical/login" => Some(Route::ClinicalLogin),
            "/clinical/dashboard" => Some(Route::ClinicalDashboard),
            "/clinical/chatbot" => Some(Route::ClinicalChatbot),
            _ => path
                .strip_prefix("/clinical/patient/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Route::ClinicalPatient {
                    patient_id: id.to_string(),
                }),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::PatientStart => "/patient".to_string(),
            Route::PatientVoice => "/patient/voice".to_string(),
            Route::PatientReport => "/patient/report".to_string(),
            Route::ClinicalLogin => "/clinical/login".to_string(),
            Route::ClinicalDashboard => "/clinical/dashboard".to_string(),
            Route::ClinicalChatbot => "/clinical/chatbot".to_string(),
            Route::ClinicalPatient { patient_id } => format!("/clinical/patient/{patient_id}"),
        }
    }
}
