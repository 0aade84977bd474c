// params.rs - Declarative parameter descriptors

/// Describes how one configuration field is fed from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Accepted parameter names; the first one is canonical
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub required: bool,
}

impl ParamSpec {
    pub const fn new(
        aliases: &'static [&'static str],
        description: &'static str,
        required: bool,
    ) -> Self {
        Self {
            aliases,
            description,
            required,
        }
    }

    /// Name used in error messages and usage text
    pub fn canonical(&self) -> Option<&'static str> {
        self.aliases.first().copied()
    }
}

/// A field name paired with its descriptor, in declaration order
pub type FieldSpec = (&'static str, ParamSpec);

/// A configuration record the binder can populate field by field.
pub trait Bindable: Default {
    /// Whether `field` exists and can hold a freeform string
    fn accepts_text(&self, field: &str) -> bool;

    /// Store `value` in `field`. Only called when `accepts_text(field)` holds.
    fn set_text(&mut self, field: &str, value: &str);
}
