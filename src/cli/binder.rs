// binder.rs - Bind parsed parameters onto a configuration record

use thiserror::Error;

use crate::cli::args::ParsedArgs;
use crate::cli::params::{Bindable, FieldSpec};

/// Errors raised while binding parameters; both abort the run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error(
        "Parameter: '{alias}' is required. Run with no arguments to display help at the command prompt."
    )]
    MissingRequired { alias: String },

    #[error(
        "Invalid command line: parameter '{alias}' cannot be assigned to field '{field}'. Make sure that you have not used any arguments that are not valid."
    )]
    TypeMismatch { field: String, alias: String },
}

/// Populate a fresh `T` from `parsed` following `specs` in declaration order.
///
/// For each field the first alias present in `parsed` supplies the value.
/// Later aliases of the same field never overwrite it but are still checked
/// against the record, so a field that cannot take a string is reported
/// whichever alias names it.
pub fn bind<T: Bindable>(parsed: &ParsedArgs, specs: &[FieldSpec]) -> Result<T, BindingError> {
    let mut record = T::default();

    for (field, spec) in specs {
        let mut is_set = false;

        for alias in spec.aliases {
            let Some(value) = parsed.get(alias) else {
                continue;
            };
            if !record.accepts_text(field) {
                return Err(BindingError::TypeMismatch {
                    field: field.to_string(),
                    alias: alias.to_string(),
                });
            }
            if !is_set {
                record.set_text(field, value);
                is_set = true;
            }
        }

        if !is_set && spec.required {
            return Err(BindingError::MissingRequired {
                alias: spec.canonical().unwrap_or(*field).to_string(),
            });
        }
    }

    Ok(record)
}
