pub(crate) const BASE_PATH_ID: &str = "basepath";
pub(crate) const LOG_LEVEL_ATTR: &str = "data-log-level";
pub(crate) const RELOAD_SECONDS_ATTR: &str = "data-reload-seconds";
pub(crate) const PAGE_SIZE_ATTR: &str = "data-page-size";

pub(crate) const REG_AUTH_STATUS_ID: &str = "regAuthStatus";
pub(crate) const REGISTRY_SELECT_ID: &str = "registry";
pub(crate) const SET_REG_CREDS_DIALOG_ID: &str = "setRegCreds";
pub(crate) const SET_REG_CREDS_FORM_ID: &str = "setRegCredsForm";

pub(crate) const JOB_DETAILS_DIALOG_ID: &str = "jobDetailsDialog";
pub(crate) const JOB_DETAILS_JOB_NAME_ID: &str = "jobDetailsJobName";
pub(crate) const JOB_DETAILS_REG_NAME_ID: &str = "jobDetailsRegName";
pub(crate) const JOB_DETAILS_BODY_ID: &str = "jobDetailsBody";
pub(crate) const JOB_DETAILS_INFO_ID: &str = "jobDetailsInfo";
pub(crate) const JOB_DETAILS_COMPLETED_ID: &str = "jobDetailsCompleted";
pub(crate) const JOB_DETAILS_PROCESSING_ID: &str = "jobDetailsProcessing";
pub(crate) const JOB_DETAILS_PREV_ID: &str = "jobDetailsPrev";
pub(crate) const JOB_DETAILS_NEXT_ID: &str = "jobDetailsNext";

pub(crate) const RIL_CPID_ID: &str = "rilCPID";
pub(crate) const DATASET_NAME_ID: &str = "datasetName";
pub(crate) const RIL_MEMBER_ITEMS_ID: &str = "rilMemberItems";
pub(crate) const DATA_HOLDER_URL_ID: &str = "dataHolderURL";
pub(crate) const DATA_HOLDER_FILE_ID: &str = "dataHolderFile";
pub(crate) const DATA_HOLDER_FILE_BLOCK_ID: &str = "dataHolderFileBlock";
pub(crate) const DATA_HOLDER_RADIOS: &str = "input[type=radio][name=dataHolderType]";
pub(crate) const DYNAMIC_FIELDS: &str = "input[class=dynamicField]";
pub(crate) const FLASH_MESSAGES: &str = ".message";

pub(crate) const EDIT_ACTIVE_CHECKBOXES: &str = "input[type=checkbox][name=editactive]";

pub(crate) const HIDDEN_CLASS: &str = "hidden";
