use super::{Platform, PropertyFormInput};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError};

/// Validation messages grouped by field name
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Form fields as submitted, before range and membership checks
#[derive(Debug, Default, Validate)]
struct PropertyFormDraft {
    #[validate(required(message = "The location field is required."))]
    location: Option<String>,
    #[validate(
        required(message = "The latitude field is required."),
        custom(function = "validate_latitude")
    )]
    latitude: Option<f64>,
    #[validate(
        required(message = "The longitude field is required."),
        custom(function = "validate_longitude")
    )]
    longitude: Option<f64>,
    #[validate(
        required(message = "The rooms field is required."),
        range(min = 1, max = 10, message = "The rooms field must be between 1 and 10.")
    )]
    rooms: Option<i64>,
    #[validate(
        required(message = "The washrooms field is required."),
        range(min = 1, max = 10, message = "The washrooms field must be between 1 and 10.")
    )]
    washrooms: Option<i64>,
    #[validate(
        required(message = "The description field is required."),
        length(max = 500, message = "The description field must not be greater than 500 characters.")
    )]
    description: Option<String>,
    #[validate(
        required(message = "The platform field is required."),
        custom(function = "validate_platform")
    )]
    platform: Option<String>,
}

impl PropertyFormDraft {
    fn from_fields(fields: &Map<String, Value>, errors: &mut FieldErrors) -> Self {
        Self {
            location: string_field(fields, "location", errors),
            latitude: number_field(fields, "latitude", errors),
            longitude: number_field(fields, "longitude", errors),
            rooms: integer_field(fields, "rooms", errors),
            washrooms: integer_field(fields, "washrooms", errors),
            description: string_field(fields, "description", errors),
            platform: string_field(fields, "platform", errors),
        }
    }

    fn into_input(self) -> Option<PropertyFormInput> {
        Some(PropertyFormInput {
            location: self.location?,
            latitude: self.latitude?,
            longitude: self.longitude?,
            rooms: u8::try_from(self.rooms?).ok()?,
            washrooms: u8::try_from(self.washrooms?).ok()?,
            description: self.description?,
            platform: Platform::parse(&self.platform?)?,
        })
    }
}

fn coordinate_in(value: f64, bound: f64, message: &'static str) -> Result<(), ValidationError> {
    if (-bound..=bound).contains(&value) {
        return Ok(());
    }
    Err(ValidationError::new("between").with_message(Cow::Borrowed(message)))
}

fn validate_latitude(latitude: f64) -> Result<(), ValidationError> {
    coordinate_in(latitude, 90.0, "The latitude field must be between -90 and 90.")
}

fn validate_longitude(longitude: f64) -> Result<(), ValidationError> {
    coordinate_in(longitude, 180.0, "The longitude field must be between -180 and 180.")
}

fn validate_platform(platform: &str) -> Result<(), ValidationError> {
    if Platform::parse(platform).is_some() {
        return Ok(());
    }
    Err(ValidationError::new("in")
        .with_message(Cow::Borrowed("The selected platform is invalid.")))
}

/// Validate a submitted property form.
///
/// Fields are read leniently the way HTML form posts arrive: numeric fields
/// may be sent as strings, and empty strings count as missing. A field that
/// has the wrong type reports only its type error.
pub fn validate_form(body: &Value) -> Result<PropertyFormInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let Some(fields) = body.as_object() else {
        errors.insert(
            "body".to_string(),
            vec!["The request body must be a JSON object.".to_string()],
        );
        return Err(errors);
    };

    let draft = PropertyFormDraft::from_fields(fields, &mut errors);

    if let Err(failures) = draft.validate() {
        for (field, list) in failures.field_errors() {
            errors.entry(field.to_string()).or_insert_with(|| {
                list.iter()
                    .map(|error| match &error.message {
                        Some(message) => message.to_string(),
                        None => format!("The {field} field is invalid."),
                    })
                    .collect()
            });
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    draft.into_input().ok_or_else(|| {
        let mut errors = FieldErrors::new();
        errors.insert(
            "body".to_string(),
            vec!["The submitted form is incomplete.".to_string()],
        );
        errors
    })
}

fn present<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    match fields.get(name)? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        value => Some(value),
    }
}

fn push_error(errors: &mut FieldErrors, name: &str, message: String) {
    errors.entry(name.to_string()).or_default().push(message);
}

fn string_field(fields: &Map<String, Value>, name: &str, errors: &mut FieldErrors) -> Option<String> {
    match present(fields, name)? {
        Value::String(s) => Some(s.trim().to_string()),
        _ => {
            push_error(errors, name, format!("The {name} field must be a string."));
            None
        }
    }
}

fn number_field(fields: &Map<String, Value>, name: &str, errors: &mut FieldErrors) -> Option<f64> {
    let parsed = match present(fields, name)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    };
    if parsed.is_none() {
        push_error(errors, name, format!("The {name} field must be a number."));
    }
    parsed
}

fn integer_field(fields: &Map<String, Value>, name: &str, errors: &mut FieldErrors) -> Option<i64> {
    let parsed = match present(fields, name)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    if parsed.is_none() {
        push_error(errors, name, format!("The {name} field must be an integer."));
    }
    parsed
}
