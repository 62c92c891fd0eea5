use std::time::Duration;

use crate::config::{millis, ConsoleConfig};
use crate::endpoints::form_body;

/// Request to flip a user's "active" flag from the user management list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditActive {
    pub username: String,
    pub active: bool,
}

impl EditActive {
    pub fn new(username: impl Into<String>, active: bool) -> Self {
        Self {
            username: username.into(),
            active,
        }
    }

    pub fn form_body(&self) -> String {
        form_body([
            ("editactive", if self.active { "true" } else { "false" }),
            ("editactiveusername", self.username.as_str()),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditActiveOutcome {
    Saved,
    Failed,
}

impl EditActiveOutcome {
    /// The server answers with the literal text `true` on success.
    pub fn from_response(body: &str) -> Self {
        if body == "true" {
            Self::Saved
        } else {
            Self::Failed
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Saved => "saved",
            Self::Failed => "failed",
        }
    }
}

/// Timing of the inline message shown next to the checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFade {
    pub visible_for: Duration,
    pub fade_for: Duration,
}

impl MessageFade {
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            visible_for: config.message_hide_delay,
            fade_for: config.fade_duration,
        }
    }

    pub fn visible_ms(&self) -> u32 {
        millis(self.visible_for)
    }

    pub fn fade_ms(&self) -> u32 {
        millis(self.fade_for)
    }

    /// When the message is gone entirely, counted from when it was shown.
    pub fn hidden_ms(&self) -> u32 {
        millis(self.visible_for + self.fade_for)
    }
}

/// Timers queued for one inline message. Dropping a timer cancels it, so
/// showing a new message cancels the hide steps of the one it replaces.
#[derive(Debug)]
pub struct PendingFade<T> {
    timers: Vec<T>,
}

impl<T> Default for PendingFade<T> {
    fn default() -> Self {
        Self { timers: Vec::new() }
    }
}

impl<T> PendingFade<T> {
    pub fn cancel(&mut self) {
        self.timers.clear();
    }

    pub fn replace(&mut self, timers: impl IntoIterator<Item = T>) {
        self.timers = timers.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn form_body_carries_flag_and_username() {
        assert_eq!(
            EditActive::new("jane doe", true).form_body(),
            "editactive=true&editactiveusername=jane%20doe"
        );
        assert_eq!(
            EditActive::new("bob", false).form_body(),
            "editactive=false&editactiveusername=bob"
        );
    }

    #[test]
    fn only_literal_true_is_saved() {
        assert_eq!(EditActiveOutcome::from_response("true"), EditActiveOutcome::Saved);
        for body in ["false", "", "TRUE", "true\n", "{\"ok\":true}"] {
            assert_eq!(EditActiveOutcome::from_response(body), EditActiveOutcome::Failed);
        }
        assert_eq!(EditActiveOutcome::Saved.label(), "saved");
        assert_eq!(EditActiveOutcome::Failed.label(), "failed");
    }

    #[test]
    fn fade_follows_config() {
        let fade = MessageFade::from_config(&ConsoleConfig::default());
        assert_eq!(fade.visible_ms(), 2000);
        assert_eq!(fade.fade_ms(), 400);
        assert_eq!(fade.hidden_ms(), 2400);
    }

    struct Step(&'static str, Rc<RefCell<Vec<&'static str>>>);

    impl Drop for Step {
        fn drop(&mut self) {
            self.1.borrow_mut().push(self.0);
        }
    }

    #[test]
    fn new_message_cancels_earlier_steps() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut pending = PendingFade::default();

        pending.replace([
            Step("first fade", cancelled.clone()),
            Step("first hide", cancelled.clone()),
        ]);
        assert!(cancelled.borrow().is_empty());

        pending.replace([
            Step("second fade", cancelled.clone()),
            Step("second hide", cancelled.clone()),
        ]);
        assert_eq!(*cancelled.borrow(), vec!["first fade", "first hide"]);

        pending.cancel();
        assert_eq!(cancelled.borrow().len(), 4);
        pending.cancel();
        assert_eq!(cancelled.borrow().len(), 4);
    }
}
