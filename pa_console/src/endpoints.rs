use urlencoding::encode;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Request URLs for the console, all relative to the page-supplied base path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Endpoints {
    base_path: String,
}

impl Endpoints {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn check_access(&self, registry_uid: &str) -> String {
        self.join(&format!("registries/{}/checkaccess", encode(registry_uid)))
    }

    pub fn job_details(&self, dataset_name: &str) -> String {
        self.join(&format!(
            "preservation/jobdetails?datasetName={}",
            encode(dataset_name)
        ))
    }

    pub fn ril_member_items(&self, dataset_name: &str, ril_cpid: &str) -> String {
        self.join(&format!(
            "datasets/{}/items/groups/rilmemberitems?rilCPID={}",
            encode(dataset_name),
            encode(ril_cpid)
        ))
    }

    pub fn edit_active(&self) -> String {
        self.join("/admin/users/editactive")
    }

    pub fn preload_image(&self) -> String {
        self.join("/images/preload.gif")
    }

    fn join(&self, path: &str) -> String {
        if self.base_path.is_empty() {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Encodes `pairs` as an `application/x-www-form-urlencoded` body.
pub fn form_body<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
