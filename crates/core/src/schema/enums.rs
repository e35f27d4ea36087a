//! Enum extraction
//!
//! A field's allowed literals come from the [`EnumHolder`] attached to it.
//! All constants are read in declaration order and each must hold a string.
//! A holder that cannot be read is not fatal: the failure is logged and the
//! property simply gets no `enum`.

use tracing::warn;
use typeschema_model::{EnumHolder, FieldInfo};

use crate::error::{SchemaError, SchemaResult};

/// Enum literals declared for a field
///
/// Returns an empty list when the field is absent, has no holder, or the
/// holder cannot be read.
pub fn extract_enums(field: Option<&FieldInfo>) -> Vec<String> {
    let Some(holder) = field.and_then(|f| f.enum_holder.as_ref()) else {
        return Vec::new();
    };

    match read_constants(holder) {
        Ok(literals) => literals,
        Err(e) => {
            warn!("Caught {} while getting enum, using no literals", e);
            Vec::new()
        }
    }
}

/// Read every constant of a holder as a string literal
pub fn read_constants(holder: &EnumHolder) -> SchemaResult<Vec<String>> {
    holder
        .constants
        .iter()
        .map(|constant| {
            constant
                .value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| SchemaError::Enum {
                    holder: holder.name.clone(),
                    reason: format!("constant {} is not a string: {}", constant.name, constant.value),
                })
        })
        .collect()
}
