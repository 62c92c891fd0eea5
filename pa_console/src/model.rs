//! Payloads exchanged with the Preservation Assistant server.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::endpoints::form_body;

/// Type tag the server uses for manifest-file preservables.
pub const MANIFEST_FILE_TYPE_ID: &str = "MF";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryAuthStatus {
    #[serde(rename = "registryUID", default)]
    pub registry_uid: Option<String>,
    #[serde(default)]
    pub read_authenticated: bool,
    pub write_authenticated: bool,
}

/// Credentials typed into the set-registry-credentials form.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistryCredentials {
    pub reg_uid: String,
    pub reg_principal: String,
    pub reg_cred: String,
}

impl RegistryCredentials {
    pub fn form_body(&self) -> String {
        form_body([
            ("regUID", self.reg_uid.as_str()),
            ("regPrincipal", self.reg_principal.as_str()),
            ("regCred", self.reg_cred.as_str()),
        ])
    }
}

impl fmt::Debug for RegistryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryCredentials")
            .field("reg_uid", &self.reg_uid)
            .field("reg_principal", &self.reg_principal)
            .field("reg_cred", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManifestFile {
    pub name: String,
    pub display_name: String,
    pub item_file_name: String,
    pub file_type: String,
}

/// The subject of one preservation job item.
///
/// Anything not tagged `"MF"` is treated as a RepInfo group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPreservable")]
pub enum Preservable {
    ManifestFile(ManifestFile),
    RepInfoGroup { ril_name: String },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPreservable {
    #[serde(rename = "preservableTypeID", default)]
    preservable_type_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    item_file_name: Option<String>,
    #[serde(rename = "type", default)]
    file_type: Option<String>,
    #[serde(default)]
    ril_name: Option<String>,
}

impl From<RawPreservable> for Preservable {
    fn from(raw: RawPreservable) -> Self {
        if raw.preservable_type_id.as_deref() == Some(MANIFEST_FILE_TYPE_ID) {
            Self::ManifestFile(ManifestFile {
                name: raw.name.unwrap_or_default(),
                display_name: raw.display_name.unwrap_or_default(),
                item_file_name: raw.item_file_name.unwrap_or_default(),
                file_type: raw.file_type.unwrap_or_default(),
            })
        } else {
            Self::RepInfoGroup {
                ril_name: raw.ril_name.unwrap_or_default(),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Cpid {
    #[serde(default)]
    pub uid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum RegistryObjectType {
    Manifest,
    Other(String),
}

impl Default for RegistryObjectType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<Option<String>> for RegistryObjectType {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) if value == "MANIFEST" => Self::Manifest,
            Some(value) => Self::Other(value),
            None => Self::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreservedObject {
    pub cpid: Cpid,
    #[serde(default)]
    pub registry_object_type: RegistryObjectType,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailRow {
    pub preservable: Preservable,
    #[serde(default)]
    pub succeeded: bool,
    #[serde(default)]
    pub thrown: Option<Value>,
    #[serde(default)]
    pub preserved_object: Option<PreservedObject>,
}

/// Job-detail listing as served for one dataset's preservation run. The
/// envelope also names the dataset and registry; the dialog already knows
/// both, so only the rows and the completed count are kept.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct JobDetails {
    #[serde(default)]
    pub data: Vec<JobDetailRow>,
    #[serde(default)]
    pub completed: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberItem {
    #[serde(default)]
    pub item_file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RilMemberItemGroup {
    pub key: String,
    #[serde(default)]
    pub value: Vec<MemberItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_auth_status_as_served() {
        let status: RegistryAuthStatus = serde_json::from_value(json!({
            "registryUID": "REG1",
            "readAuthenticated": true,
            "writeAuthenticated": false
        }))
        .unwrap();
        assert_eq!(status.registry_uid.as_deref(), Some("REG1"));
        assert!(status.read_authenticated);
        assert!(!status.write_authenticated);

        let minimal: RegistryAuthStatus =
            serde_json::from_value(json!({ "writeAuthenticated": true })).unwrap();
        assert!(minimal.write_authenticated);
        assert_eq!(minimal.registry_uid, None);
    }

    #[test]
    fn manifest_file_preservable() {
        let preservable: Preservable = serde_json::from_value(json!({
            "preservableTypeID": "MF",
            "name": "Form A",
            "displayName": "Sensor readings",
            "itemFileName": "readings.csv",
            "type": "Data"
        }))
        .unwrap();
        assert_eq!(
            preservable,
            Preservable::ManifestFile(ManifestFile {
                name: "Form A".to_string(),
                display_name: "Sensor readings".to_string(),
                item_file_name: "readings.csv".to_string(),
                file_type: "Data".to_string(),
            })
        );
    }

    #[test]
    fn unknown_tags_fall_back_to_rep_info_group() {
        for tag in [json!("RIL"), json!("mf"), json!(null)] {
            let preservable: Preservable = serde_json::from_value(json!({
                "preservableTypeID": tag,
                "rilName": "Core RIL"
            }))
            .unwrap();
            assert_eq!(
                preservable,
                Preservable::RepInfoGroup {
                    ril_name: "Core RIL".to_string()
                }
            );
        }
    }

    #[test]
    fn job_details_envelope() {
        let details: JobDetails = serde_json::from_value(json!({
            "datasetName": "climate",
            "registryUID": "REG1",
            "completed": 1,
            "data": [
                {
                    "preservable": { "preservableTypeID": "RIL", "rilName": "Core" },
                    "succeeded": true,
                    "thrown": null,
                    "preservedObject": {
                        "cpid": { "uid": "cpid-9" },
                        "registryObjectType": "MANIFEST",
                        "location": "http://registry/cpid-9"
                    }
                },
                {
                    "preservable": { "preservableTypeID": "RIL", "rilName": "Other" },
                    "succeeded": false,
                    "thrown": { "message": "boom" },
                    "preservedObject": null
                }
            ]
        }))
        .unwrap();

        assert_eq!(details.completed, Some(1));
        assert_eq!(details.data.len(), 2);
        let preserved = details.data[0].preserved_object.as_ref().unwrap();
        assert_eq!(preserved.cpid.uid, "cpid-9");
        assert_eq!(preserved.registry_object_type, RegistryObjectType::Manifest);
        assert!(details.data[1].thrown.is_some());
        assert!(details.data[1].preserved_object.is_none());
    }

    #[test]
    fn registry_object_type_tolerates_null() {
        let preserved: PreservedObject = serde_json::from_value(json!({
            "cpid": { "uid": "c" },
            "registryObjectType": null
        }))
        .unwrap();
        assert_eq!(preserved.registry_object_type, RegistryObjectType::default());
        assert_eq!(preserved.location, None);
    }

    #[test]
    fn ril_member_groups() {
        let groups: Option<Vec<RilMemberItemGroup>> = serde_json::from_value(json!([
            { "key": "A", "value": [{ "itemFileName": "f1.txt" }, { "itemFileName": "f2.txt" }] }
        ]))
        .unwrap();
        let groups = groups.unwrap();
        assert_eq!(groups[0].key, "A");
        assert_eq!(groups[0].value[1].item_file_name, "f2.txt");

        let none: Option<Vec<RilMemberItemGroup>> = serde_json::from_str("null").unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn credentials_form_body_and_redacted_debug() {
        let credentials = RegistryCredentials {
            reg_uid: "REG1".to_string(),
            reg_principal: "curator".to_string(),
            reg_cred: "s3cr&t".to_string(),
        };
        assert_eq!(
            credentials.form_body(),
            "regUID=REG1&regPrincipal=curator&regCred=s3cr%26t"
        );
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("s3cr"));
        assert!(debug.contains("curator"));
    }
}
