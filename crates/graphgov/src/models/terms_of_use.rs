//! Terms of use agreements and their acceptances.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Entity;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsOfUseContainer {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement_acceptances: Option<Vec<AgreementAcceptance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreements: Option<Vec<Agreement>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A terms of use document users accept before accessing resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agreement {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptances: Option<Vec<AgreementAcceptance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<AgreementFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<AgreementFileLocalization>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_per_device_acceptance_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_viewing_before_acceptance_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_expiration: Option<TermsExpiration>,
    /// ISO 8601 duration after which users must accept again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_reaccept_required_frequency: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsExpiration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTime<Utc>>,
}

/// Base64 content of an agreement PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementFileData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// The default-language agreement document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementFile {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_data: Option<AgreementFileData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_major_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizations: Option<Vec<AgreementFileLocalization>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// An agreement document in one language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementFileLocalization {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_data: Option<AgreementFileData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_major_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<AgreementFileVersion>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementFileVersion {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_data: Option<AgreementFileData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_major_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A user's acceptance, or decline, of an agreement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementAcceptance {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement_file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(rename = "deviceOSType", skip_serializing_if = "Option::is_none")]
    pub device_os_type: Option<String>,
    #[serde(rename = "deviceOSVersion", skip_serializing_if = "Option::is_none")]
    pub device_os_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_date_time: Option<DateTime<Utc>>,
    /// `accepted` or `declined`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

graph_entity! {
    Agreement => "#microsoft.graph.agreement", "agreement%2Did";
    AgreementFile => "#microsoft.graph.agreementFile", "agreementFile%2Did";
    AgreementFileLocalization => "#microsoft.graph.agreementFileLocalization", "agreementFileLocalization%2Did";
    AgreementFileVersion => "#microsoft.graph.agreementFileVersion", "agreementFileVersion%2Did";
    AgreementAcceptance => "#microsoft.graph.agreementAcceptance", "agreementAcceptance%2Did";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_acceptance_device_properties() {
        let acceptance: AgreementAcceptance = serde_json::from_value(json!({
            "id": "94410bbf-3d3e-4683-8149-f034e55c39dd_d4bb1fd6-6d8c-4c7a-9ba2-1f4d7a0ce5cb",
            "agreementId": "94410bbf-3d3e-4683-8149-f034e55c39dd",
            "deviceOSType": "Windows",
            "deviceOSVersion": "10.0.19045",
            "state": "accepted"
        }))
        .unwrap();
        assert_eq!(acceptance.device_os_type.as_deref(), Some("Windows"));
        assert!(acceptance.additional_data.is_empty());

        let value = serde_json::to_value(&acceptance).unwrap();
        assert_eq!(value["deviceOSVersion"], "10.0.19045");
    }
}
