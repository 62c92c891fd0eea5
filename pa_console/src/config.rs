use std::time::Duration;

use log::LevelFilter;

use crate::endpoints::Endpoints;

/// Period between reloads of an open job-details table.
pub const RELOAD_PERIOD: Duration = Duration::from_secs(5);
/// How long a user-active "saved"/"failed" message stays up before fading.
pub const MESSAGE_HIDE_DELAY: Duration = Duration::from_millis(2000);
pub const FADE_DURATION: Duration = Duration::from_millis(400);
/// Delay before flash `.message` banners on the edit-item page are hidden.
pub const FLASH_MESSAGE_DELAY: Duration = Duration::from_millis(2000);
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub base_path: String,
    pub reload_period: Duration,
    pub message_hide_delay: Duration,
    pub fade_duration: Duration,
    pub flash_message_delay: Duration,
    pub page_size: usize,
    pub log_level: LevelFilter,
}

impl ConsoleConfig {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into().trim().to_string(),
            reload_period: RELOAD_PERIOD,
            message_hide_delay: MESSAGE_HIDE_DELAY,
            fade_duration: FADE_DURATION,
            flash_message_delay: FLASH_MESSAGE_DELAY,
            page_size: PAGE_SIZE,
            log_level: LevelFilter::Info,
        }
    }

    /// Applies a reload period in whole seconds; zero or unparsable values
    /// keep the current period.
    pub fn with_reload_seconds(mut self, seconds: &str) -> Self {
        match seconds.trim().parse::<u64>() {
            Ok(seconds) if seconds > 0 => self.reload_period = Duration::from_secs(seconds),
            _ => log::warn!("ignoring reload period {seconds:?}"),
        }
        self
    }

    /// Applies a job-details page size; unparsable values keep the current size.
    pub fn with_page_size(mut self, page_size: &str) -> Self {
        match page_size.trim().parse::<usize>() {
            Ok(page_size) => self.page_size = page_size.max(1),
            Err(_) => log::warn!("ignoring page size {page_size:?}"),
        }
        self
    }

    /// Applies a level name such as `"debug"`; unknown names keep the current level.
    pub fn with_log_level(mut self, level: &str) -> Self {
        if let Ok(level) = level.trim().parse() {
            self.log_level = level;
        }
        self
    }

    pub fn flash_message_delay_ms(&self) -> u32 {
        millis(self.flash_message_delay)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.base_path.clone())
    }
}

/// Browser timers take whole milliseconds.
pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_console_timings() {
        let config = ConsoleConfig::new(" /pa/ ");
        assert_eq!(config.base_path, "/pa/");
        assert_eq!(config.reload_period, Duration::from_secs(5));
        assert_eq!(config.message_hide_delay, Duration::from_millis(2000));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn log_level_override_ignores_garbage() {
        let config = ConsoleConfig::new("/pa/").with_log_level("debug");
        assert_eq!(config.log_level, LevelFilter::Debug);
        let config = config.with_log_level("chatty");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn reload_override_in_seconds() {
        let config = ConsoleConfig::default().with_reload_seconds(" 3 ");
        assert_eq!(millis(config.reload_period), 3000);
        assert_eq!(config.flash_message_delay_ms(), 2000);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);

        let config = config.with_reload_seconds("0").with_reload_seconds("soon");
        assert_eq!(config.reload_period, Duration::from_secs(3));
    }

    #[test]
    fn page_size_never_zero() {
        let config = ConsoleConfig::default().with_page_size("0");
        assert_eq!(config.page_size, 1);
        assert_eq!(config.with_page_size("25").with_page_size("many").page_size, 25);
    }
}
