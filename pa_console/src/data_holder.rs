//! Edit-item page: switching a data holder between an uploaded file and a URL.

/// Radio values the edit-item form posts for `dataHolderType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataHolderType {
    Bytestream,
    Uri,
}

impl DataHolderType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "BYTESTREAM" => Some(Self::Bytestream),
            "URI" => Some(Self::Uri),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bytestream => "BYTESTREAM",
            Self::Uri => "URI",
        }
    }

    /// Dynamic fields follow the file control: usable only while uploading.
    pub fn view(self) -> DataHolderView {
        let uploading = self == Self::Bytestream;
        DataHolderView {
            file_block_hidden: !uploading,
            file_disabled: !uploading,
            url_hidden: uploading,
            url_disabled: uploading,
            dynamic_fields_disabled: !uploading,
        }
    }
}

/// Visibility and enablement of the edit-item inputs for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataHolderView {
    pub file_block_hidden: bool,
    pub file_disabled: bool,
    pub url_hidden: bool,
    pub url_disabled: bool,
    pub dynamic_fields_disabled: bool,
}

/// Current mode of the radio pair. Starts from whatever the page rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataHolderToggle {
    current: Option<DataHolderType>,
}

impl DataHolderToggle {
    pub fn new(initial: Option<DataHolderType>) -> Self {
        Self { current: initial }
    }

    /// Returns the view to apply, or `None` when `value` is not a known mode
    /// or is the mode already shown.
    pub fn select(&mut self, value: &str) -> Option<DataHolderView> {
        let mode = DataHolderType::parse(value)?;
        if self.current.replace(mode) == Some(mode) {
            return None;
        }
        Some(mode.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_hides_file_controls() {
        let view = DataHolderType::Uri.view();
        assert!(view.file_block_hidden);
        assert!(view.file_disabled);
        assert!(view.dynamic_fields_disabled);
        assert!(!view.url_hidden);
        assert!(!view.url_disabled);
    }

    #[test]
    fn modes_are_exact_inverses() {
        let bytes = DataHolderType::Bytestream.view();
        let uri = DataHolderType::Uri.view();
        assert_eq!(bytes.file_block_hidden, !uri.file_block_hidden);
        assert_eq!(bytes.file_disabled, !uri.file_disabled);
        assert_eq!(bytes.url_hidden, !uri.url_hidden);
        assert_eq!(bytes.url_disabled, !uri.url_disabled);
        assert_eq!(bytes.dynamic_fields_disabled, !uri.dynamic_fields_disabled);
    }

    #[test]
    fn unknown_values_leave_state_alone() {
        let mut toggle = DataHolderToggle::new(Some(DataHolderType::Uri));
        assert_eq!(toggle.select("FTP"), None);
        assert_eq!(toggle.select("uri"), None);
        assert_eq!(toggle.select("URI"), None);

        assert_eq!(
            toggle.select("BYTESTREAM"),
            Some(DataHolderType::Bytestream.view())
        );
        assert_eq!(toggle.select("FTP"), None);
        assert_eq!(toggle.select("URI"), Some(DataHolderType::Uri.view()));
    }

    #[test]
    fn reselecting_the_shown_mode_changes_nothing() {
        let mut toggle = DataHolderToggle::default();
        assert_eq!(
            toggle.select("BYTESTREAM"),
            Some(DataHolderType::Bytestream.view())
        );
        assert_eq!(toggle.select("BYTESTREAM"), None);
    }

    #[test]
    fn parse_round_trips_radio_values() {
        for mode in [DataHolderType::Bytestream, DataHolderType::Uri] {
            assert_eq!(DataHolderType::parse(mode.as_str()), Some(mode));
        }
    }
}
