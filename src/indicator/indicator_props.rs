//! Caller-supplied inputs shared by both indicators

/// Inputs for one render of an indicator.
///
/// The host owns these and may change them between any two renders.
/// Indicators only read them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorProps {
    pub is_visible: bool,
    /// Banner text; `None` falls back to the indicator's default message
    pub message: Option<String>,
}

impl IndicatorProps {
    pub fn new(is_visible: bool) -> Self {
        Self {
            is_visible,
            message: None,
        }
    }

    pub fn visible() -> Self {
        Self::new(true)
    }

    pub fn hidden() -> Self {
        Self::new(false)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The message to display, or `default` when none was given
    pub fn message_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(default)
    }
}
