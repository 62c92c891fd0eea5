use std::cell::RefCell;

use pa_console::ConsoleConfig;
use web_sys::Element;

use crate::{dom, ids::*, logger};

thread_local! {
    static CONFIG: RefCell<Option<ConsoleConfig>> = const { RefCell::new(None) };
}

/// Page configuration, read from `#basepath` on first use.
pub(crate) fn config() -> ConsoleConfig {
    CONFIG.with(|config| config.borrow_mut().get_or_insert_with(read_config).clone())
}

fn read_config() -> ConsoleConfig {
    let config = match dom::by_id::<Element>(BASE_PATH_ID) {
        Ok(element) => {
            let mut config = ConsoleConfig::new(element.text_content().unwrap_or_default());
            if let Some(level) = element.get_attribute(LOG_LEVEL_ATTR) {
                config = config.with_log_level(&level);
            }
            if let Some(seconds) = element.get_attribute(RELOAD_SECONDS_ATTR) {
                config = config.with_reload_seconds(&seconds);
            }
            if let Some(page_size) = element.get_attribute(PAGE_SIZE_ATTR) {
                config = config.with_page_size(&page_size);
            }
            config
        }
        Err(error) => {
            log::warn!("{error}; requests will be relative to the page");
            ConsoleConfig::default()
        }
    };
    logger::init(config.log_level);
    log::debug!("console configured with base path {:?}", config.base_path);
    config
}
