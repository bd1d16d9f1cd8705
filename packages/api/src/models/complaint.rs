//! The structured complaint sent to the generation endpoint.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ComplaintType {
    Theft,
    Harassment,
    Cybercrime,
    #[serde(rename = "Domestic Violence")]
    DomesticViolence,
}

impl ComplaintType {
    pub const ALL: [ComplaintType; 4] = [
        ComplaintType::Theft,
        ComplaintType::Harassment,
        ComplaintType::Cybercrime,
        ComplaintType::DomesticViolence,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ComplaintType::Theft => "Theft",
            ComplaintType::Harassment => "Harassment",
            ComplaintType::Cybercrime => "Cybercrime",
            ComplaintType::DomesticViolence => "Domestic Violence",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// Complaint details entered on the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintForm {
    #[serde(rename = "type")]
    pub complaint_type: Option<ComplaintType>,
    /// `datetime-local` value, e.g. `2024-03-07T14:30`.
    pub date_time: String,
    pub location: String,
    pub description: String,
    pub name: String,
    pub contact: String,
}

impl ComplaintForm {
    /// Every field is required.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.complaint_type.is_none() {
            return Err(ApiError::Validation("Complaint type is required".to_string()));
        }
        let fields = [
            ("Date and time", &self.date_time),
            ("Location", &self.location),
            ("Description", &self.description),
            ("Name", &self.name),
            ("Contact", &self.contact),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(ApiError::Validation(format!("{label} is required")));
            }
        }
        Ok(())
    }
}
