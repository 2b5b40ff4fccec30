//! Overlay info dialog state.

/// State of the info dialog shown after an overlay is tapped.
///
/// `title` and `body` keep their last values after the dialog is hidden. They are
/// only meaningful while `visible` is true.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogState {
    /// Whether the dialog is shown.
    pub visible: bool,
    /// Dialog title.
    pub title: String,
    /// Dialog text.
    pub body: String,
}

impl DialogState {
    /// Visible dialog with the given contents.
    pub fn shown(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            visible: true,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Contents to display, or `None` while the dialog is hidden.
    pub fn contents(&self) -> Option<(&str, &str)> {
        self.visible
            .then_some((self.title.as_str(), self.body.as_str()))
    }
}
