use crate::core::{OptionKey, OptionValue, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{OptionDescriptor, OptionKind};

/// Checks that `value` has the kind the descriptor's control produces.
pub(super) fn validate_option_value(
    descriptor: &OptionDescriptor,
    value: &OptionValue,
) -> ChartResult<()> {
    match (&descriptor.kind, value) {
        (OptionKind::Checkbox { .. }, OptionValue::Bool(_))
        | (OptionKind::TextInput { .. }, OptionValue::Text(_) | OptionValue::Empty)
        | (OptionKind::NumberInput { .. }, OptionValue::Number(_) | OptionValue::Empty) => Ok(()),
        (OptionKind::Combo { choices, .. }, OptionValue::Text(text)) => {
            if choices.iter().any(|choice| *choice == text.as_str()) {
                Ok(())
            } else {
                Err(invalid_value(
                    descriptor.key,
                    format!("`{text}` is not one of {choices:?}"),
                ))
            }
        }
        (kind, value) => Err(invalid_value(
            descriptor.key,
            format!(
                "{} control does not accept a {} value",
                kind.name(),
                value.kind_name()
            ),
        )),
    }
}

pub(super) fn validate_viewport(viewport: Viewport) -> ChartResult<Viewport> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

/// Converts number-input text into an option value.
///
/// Blank text clears the value. Anything else that is not a valid `f64` is
/// kept as `NaN` and left for the renderer to reject or ignore.
#[must_use]
pub fn parse_number_input(text: &str) -> OptionValue {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return OptionValue::Empty;
    }
    OptionValue::number(trimmed.parse::<f64>().unwrap_or(f64::NAN))
}

pub(super) fn invalid_value(key: OptionKey, reason: impl Into<String>) -> ChartError {
    ChartError::InvalidOptionValue {
        key: key.as_str().to_owned(),
        reason: reason.into(),
    }
}
