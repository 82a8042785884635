//! Validation Utilities

use validator::{ValidationErrors, ValidationErrorsKind};

use super::error::{AppError, FieldError};

/// Convert validation errors to AppError
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let field_errors = collect_field_errors("", &errors);

    let message = field_errors
        .first()
        .map(|e| {
            if e.field.is_empty() {
                e.message.clone()
            } else {
                format!("{}: {}", e.field, e.message)
            }
        })
        .unwrap_or_else(|| "Validation failed".into());

    AppError::Validation(message)
}

/// Flatten nested (struct and list) errors into dotted field paths,
/// e.g. `items[1].total_price`.
fn collect_field_errors(prefix: &str, errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();

    for (field, kind) in errors.errors() {
        let path = if field == "__all__" {
            prefix.to_string()
        } else if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| FieldError {
                    field: path.clone(),
                    message: e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                }));
            }
            ValidationErrorsKind::Struct(inner) => {
                out.extend(collect_field_errors(&path, inner));
            }
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    out.extend(collect_field_errors(&format!("{}[{}]", path, index), inner));
                }
            }
        }
    }

    out
}
