//! Single transient notification banner.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub duration_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { duration_ms: 3000 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// The one toast on the page. `show` overwrites whatever is there; `hide`
/// only drops the `show` class so the message stays in place while the CSS
/// fades it out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    message: String,
    kind: Option<ToastKind>,
    visible: bool,
}

impl ToastState {
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.message = message.into();
        self.kind = Some(kind);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> Option<ToastKind> {
        self.kind
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Class attribute for the toast element.
    pub fn class_name(&self) -> String {
        let mut class = String::from("toast");
        if let Some(kind) = self.kind {
            class.push(' ');
            class.push_str(kind.class());
        }
        if self.visible {
            class.push_str(" show");
        }
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_toast_is_bare() {
        let toast = ToastState::default();
        assert_eq!(toast.class_name(), "toast");
        assert!(!toast.is_visible());
    }

    #[test]
    fn show_then_hide_keeps_kind() {
        let mut toast = ToastState::default();
        toast.show("Searching...", ToastKind::Success);
        assert_eq!(toast.class_name(), "toast success show");
        assert_eq!(toast.message(), "Searching...");

        toast.hide();
        assert_eq!(toast.class_name(), "toast success");
        assert_eq!(toast.message(), "Searching...");
    }

    #[test]
    fn newer_toast_overwrites_older() {
        let mut toast = ToastState::default();
        toast.show("Searching...", ToastKind::Success);
        toast.show("Please enter a search term.", ToastKind::Error);
        assert_eq!(toast.class_name(), "toast error show");
        assert_eq!(toast.message(), "Please enter a search term.");
        assert_eq!(toast.kind(), Some(ToastKind::Error));
    }
}
