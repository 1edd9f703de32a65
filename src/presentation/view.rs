//! The boundary between the form controller and the rendered page.

/// Operations the controller needs from the rendered form.
///
/// Implementations wrap whatever actually displays the form. Element
/// handles are resolved once, when the view is constructed.
pub trait FormView {
    /// Names of the form's controls, in document order.
    fn field_names(&self) -> Vec<String>;

    /// Current value of a control, or `None` if the form has no such control.
    fn read_value(&self, name: &str) -> Option<String>;

    /// Show an error next to a control, or clear it when `error` is `None`.
    fn show_error(&mut self, name: &str, error: Option<&str>);

    /// Reset every control to an empty value.
    fn reset(&mut self);

    fn set_confirmation_visible(&mut self, visible: bool);
}

/// In-memory form, for tests and headless harnesses.
///
/// # Example
///
/// ```rust
/// use formguard::presentation::{FormView, MemoryView};
///
/// let mut view = MemoryView::with_fields(["fullName", "phone"]);
/// view.set_value("phone", "050-1234567");
/// view.show_error("fullName", Some("שם מלא הוא שדה חובה"));
///
/// assert_eq!(view.read_value("phone").as_deref(), Some("050-1234567"));
/// assert!(view.has_error("fullName"));
///
/// view.reset();
/// assert_eq!(view.read_value("phone").as_deref(), Some(""));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryView {
    fields: Vec<MemoryField>,
    confirmation_visible: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct MemoryField {
    name: String,
    value: String,
    error: Option<String>,
}

impl MemoryView {
    pub fn with_fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: names
                .into_iter()
                .map(|name| MemoryField {
                    name: name.into(),
                    ..MemoryField::default()
                })
                .collect(),
            confirmation_visible: false,
        }
    }

    /// Set a control's value. Unknown names are ignored.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.value = value.into();
        }
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(|f| f.error.as_deref())
    }

    /// True when the control is in its error state.
    pub fn has_error(&self, name: &str) -> bool {
        self.error(name).is_some()
    }

    pub fn confirmation_visible(&self) -> bool {
        self.confirmation_visible
    }

    fn field(&self, name: &str) -> Option<&MemoryField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut MemoryField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }
}

impl FormView for MemoryView {
    fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    fn read_value(&self, name: &str) -> Option<String> {
        self.field(name).map(|f| f.value.clone())
    }

    fn show_error(&mut self, name: &str, error: Option<&str>) {
        if let Some(field) = self.field_mut(name) {
            field.error = error.map(str::to_string);
        }
    }

    fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    fn set_confirmation_visible(&mut self, visible: bool) {
        self.confirmation_visible = visible;
    }
}
