//! HTML fragments written into the console pages.
//!
//! Markup is built with `maud`, so server-supplied text is escaped wherever
//! it is interpolated.

use maud::{html, Markup};

use crate::error::ConsoleError;
use crate::model::{
    JobDetailRow, Preservable, PreservedObject, RegistryAuthStatus, RegistryObjectType,
    RilMemberItemGroup,
};

pub const AUTH_CHECKING: &str = "Checking authentication...";
pub const AUTH_SUCCESSFUL: &str = "Authentication successful";
pub const AUTH_CHECK_FAILED: &str = "Error checking authentication";
pub const RIL_GROUP_TYPE: &str = "RIL Group";
pub const PRESERVED_OBJECT_PENDING: &str = "Please wait..";
pub const RIL_MEMBERS_EMPTY: &str = "This group currently contains no items";
pub const RIL_MEMBERS_FAILED: &str = "Error retrieving the other group items";
/// Class of the inline link that opens the credentials dialog.
pub const ADD_CREDS_CLASS: &str = "add-creds";

fn preload_img(preload_image: &str) -> Markup {
    html! { img src=(preload_image); }
}

/// What the registry status region shows for one registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatusView {
    Checking,
    Authenticated,
    CredentialsRequired { registry: String },
    Failed,
}

impl AuthStatusView {
    pub fn from_response(
        registry: &str,
        response: Result<RegistryAuthStatus, ConsoleError>,
    ) -> Self {
        match response {
            Ok(status) if status.write_authenticated => Self::Authenticated,
            Ok(_) => Self::CredentialsRequired {
                registry: registry.to_string(),
            },
            Err(_) => Self::Failed,
        }
    }

    pub fn html(&self) -> String {
        let markup = match self {
            Self::Checking => html! { (AUTH_CHECKING) },
            Self::Authenticated => html! { (AUTH_SUCCESSFUL) },
            Self::CredentialsRequired { registry } => html! {
                "Authentication required " br; "- "
                a href="#" class=(ADD_CREDS_CLASS) data-registry=(registry) { "add now" }
            },
            Self::Failed => html! { (AUTH_CHECK_FAILED) },
        };
        markup.into_string()
    }
}

pub fn preservable_label(preservable: &Preservable) -> Markup {
    match preservable {
        Preservable::ManifestFile(file) => html! {
            (file.name) " (" (file.display_name) "): " (file.item_file_name)
        },
        Preservable::RepInfoGroup { ril_name } => html! { "RepInfo Group: " (ril_name) },
    }
}

pub fn preservable_type_label(preservable: &Preservable) -> Markup {
    match preservable {
        Preservable::ManifestFile(file) => html! { (file.file_type) },
        Preservable::RepInfoGroup { .. } => html! { (RIL_GROUP_TYPE) },
    }
}

/// Progress of one job item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Error,
    Complete,
    InProgress,
    Unknown,
}

impl JobStatus {
    /// A thrown error wins; otherwise only the two consistent
    /// `succeeded`/`preservedObject` pairings are recognised.
    pub fn of(row: &JobDetailRow) -> Self {
        if row.thrown.is_some() {
            return Self::Error;
        }
        match (row.succeeded, row.preserved_object.is_some()) {
            (true, true) => Self::Complete,
            (false, false) => Self::InProgress,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "Error during preservation",
            Self::Complete => "Complete",
            Self::InProgress => "In progress",
            Self::Unknown => "Unknown",
        }
    }

    pub fn html(self, preload_image: &str) -> Markup {
        html! {
            (self.label())
            @if self == Self::InProgress {
                " " (preload_img(preload_image))
            }
        }
    }
}

pub fn preserved_object_summary(preserved: Option<&PreservedObject>) -> Markup {
    let Some(preserved) = preserved else {
        return html! { (PRESERVED_OBJECT_PENDING) };
    };
    html! {
        "CPID: " (preserved.cpid.uid)
        @if preserved.registry_object_type == RegistryObjectType::Manifest {
            @let location = preserved.location.as_deref().unwrap_or_default();
            br;
            "URL: " a href=(location) { (location) }
        }
    }
}

/// The four cells of a job-details table row.
pub fn job_detail_cells(row: &JobDetailRow, preload_image: &str) -> [Markup; 4] {
    [
        preservable_label(&row.preservable),
        preservable_type_label(&row.preservable),
        JobStatus::of(row).html(preload_image),
        preserved_object_summary(row.preserved_object.as_ref()),
    ]
}

pub fn ril_reloading(preload_image: &str) -> String {
    html! { li { "Reloading... " (preload_img(preload_image)) } }.into_string()
}

pub fn ril_member_items(groups: Option<&[RilMemberItemGroup]>) -> String {
    let groups = match groups {
        Some(groups) if !groups.is_empty() => groups,
        _ => return html! { li { (RIL_MEMBERS_EMPTY) } }.into_string(),
    };

    html! {
        @for group in groups {
            li {
                strong { (group.key) }
                ul {
                    @for item in &group.value {
                        li { (item.item_file_name) }
                    }
                }
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cpid, ManifestFile, MemberItem};
    use serde_json::json;

    const PRELOAD: &str = "/pa/images/preload.gif";

    fn row(thrown: bool, succeeded: bool, preserved: bool) -> JobDetailRow {
        JobDetailRow {
            preservable: Preservable::RepInfoGroup {
                ril_name: "Core".to_string(),
            },
            succeeded,
            thrown: thrown.then(|| json!({ "message": "boom" })),
            preserved_object: preserved.then(|| PreservedObject {
                cpid: Cpid {
                    uid: "cpid-1".to_string(),
                },
                registry_object_type: RegistryObjectType::Other("RIL".to_string()),
                location: None,
            }),
        }
    }

    #[test]
    fn thrown_always_wins() {
        for succeeded in [true, false] {
            for preserved in [true, false] {
                assert_eq!(JobStatus::of(&row(true, succeeded, preserved)), JobStatus::Error);
            }
        }
    }

    #[test]
    fn consistent_pairings() {
        assert_eq!(JobStatus::of(&row(false, true, true)), JobStatus::Complete);
        assert_eq!(JobStatus::of(&row(false, false, false)), JobStatus::InProgress);
    }

    #[test]
    fn inconsistent_pairings_are_unknown() {
        assert_eq!(JobStatus::of(&row(false, true, false)), JobStatus::Unknown);
        assert_eq!(JobStatus::of(&row(false, false, true)), JobStatus::Unknown);
    }

    #[test]
    fn in_progress_carries_loading_indicator() {
        assert_eq!(
            JobStatus::InProgress.html(PRELOAD).into_string(),
            "In progress <img src=\"/pa/images/preload.gif\">"
        );
        assert_eq!(JobStatus::Complete.html(PRELOAD).into_string(), "Complete");
    }

    #[test]
    fn manifest_file_labels() {
        let preservable = Preservable::ManifestFile(ManifestFile {
            name: "Form A".to_string(),
            display_name: "Readings".to_string(),
            item_file_name: "r.csv".to_string(),
            file_type: "Data".to_string(),
        });
        assert_eq!(
            preservable_label(&preservable).into_string(),
            "Form A (Readings): r.csv"
        );
        assert_eq!(preservable_type_label(&preservable).into_string(), "Data");
    }

    #[test]
    fn rep_info_group_labels() {
        let preservable = Preservable::RepInfoGroup {
            ril_name: "Core".to_string(),
        };
        assert_eq!(preservable_label(&preservable).into_string(), "RepInfo Group: Core");
        assert_eq!(preservable_type_label(&preservable).into_string(), "RIL Group");
    }

    #[test]
    fn manifest_summary_links_location() {
        let preserved = PreservedObject {
            cpid: Cpid {
                uid: "cpid-7".to_string(),
            },
            registry_object_type: RegistryObjectType::Manifest,
            location: Some("http://registry.example/cpid-7".to_string()),
        };
        assert_eq!(
            preserved_object_summary(Some(&preserved)).into_string(),
            "CPID: cpid-7<br>URL: <a href=\"http://registry.example/cpid-7\">\
             http://registry.example/cpid-7</a>"
        );
    }

    #[test]
    fn other_summaries_only_show_cpid() {
        let preserved = PreservedObject {
            cpid: Cpid {
                uid: "cpid-8".to_string(),
            },
            registry_object_type: RegistryObjectType::Other("REPINFOLABEL".to_string()),
            location: Some("http://registry.example/cpid-8".to_string()),
        };
        assert_eq!(preserved_object_summary(Some(&preserved)).into_string(), "CPID: cpid-8");
        assert_eq!(preserved_object_summary(None).into_string(), "Please wait..");
    }

    #[test]
    fn auth_views() {
        let ok = |write| {
            Ok(RegistryAuthStatus {
                registry_uid: Some("REG1".to_string()),
                read_authenticated: true,
                write_authenticated: write,
            })
        };
        let authenticated = AuthStatusView::from_response("REG1", ok(true));
        assert_eq!(authenticated.html(), "Authentication successful");
        assert!(!authenticated.html().contains(ADD_CREDS_CLASS));

        let required = AuthStatusView::from_response("REG1", ok(false));
        assert_eq!(
            required,
            AuthStatusView::CredentialsRequired {
                registry: "REG1".to_string()
            }
        );
        assert_eq!(
            required.html(),
            "Authentication required <br>- \
             <a href=\"#\" class=\"add-creds\" data-registry=\"REG1\">add now</a>"
        );

        let failed =
            AuthStatusView::from_response("REG1", Err(ConsoleError::Network("offline".into())));
        assert_eq!(failed.html(), "Error checking authentication");
    }

    #[test]
    fn member_items_nested_list() {
        let groups = vec![RilMemberItemGroup {
            key: "A".to_string(),
            value: vec![MemberItem {
                item_file_name: "f1.txt".to_string(),
            }],
        }];
        assert_eq!(
            ril_member_items(Some(groups.as_slice())),
            "<li><strong>A</strong><ul><li>f1.txt</li></ul></li>"
        );
        let empty = "<li>This group currently contains no items</li>";
        assert_eq!(ril_member_items(Some(&[][..])), empty);
        assert_eq!(ril_member_items(None), empty);
        assert_eq!(
            ril_reloading(PRELOAD),
            "<li>Reloading... <img src=\"/pa/images/preload.gif\"></li>"
        );
    }

    #[test]
    fn server_text_is_escaped() {
        let preservable = Preservable::RepInfoGroup {
            ril_name: "<script>".to_string(),
        };
        assert_eq!(
            preservable_label(&preservable).into_string(),
            "RepInfo Group: &lt;script&gt;"
        );

        let required = AuthStatusView::CredentialsRequired {
            registry: "a\"b&c".to_string(),
        };
        assert!(required.html().contains("data-registry=\"a&quot;b&amp;c\""));

        let groups = vec![RilMemberItemGroup {
            key: "<k>".to_string(),
            value: vec![MemberItem {
                item_file_name: "x & y.txt".to_string(),
            }],
        }];
        assert_eq!(
            ril_member_items(Some(groups.as_slice())),
            "<li><strong>&lt;k&gt;</strong><ul><li>x &amp; y.txt</li></ul></li>"
        );
    }
}
