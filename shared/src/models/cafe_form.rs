//! Cafe Form
//!
//! Raw add/edit submission. Field names match the `cafe` columns so the same
//! schema drives validation, rendering and persistence.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use url::{Host, Url};
use validator::{Validate, ValidationError, ValidationErrors};

use super::cafe::{Cafe, CafeInput, Price, PriceError, SeatBucket};

pub const MAX_TEXT_LEN: u64 = 250;

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_INVALID_URL: &str = "Invalid URL.";
pub const MSG_INVALID_CHOICE: &str = "Not a valid choice.";
pub const MSG_INVALID_DECIMAL: &str = "Not a valid decimal value.";
pub const MSG_NEGATIVE_PRICE: &str = "Price cannot be negative.";
pub const MSG_TOO_LONG: &str = "Field cannot be longer than 250 characters.";

const YES: &str = "Yes";
const NO: &str = "No";
const REQUIRED_CODE: &str = "required";

/// How a field is rendered and parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Url,
    YesNo,
    Seats,
    Price,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, label, kind }
}

/// Form fields in display order
pub const FIELDS: [FieldSpec; 10] = [
    field("name", "Cafe Name", FieldKind::Text),
    field("map_url", "Cafe Location on Google Maps (URL)", FieldKind::Url),
    field("img_url", "Cafe Image (URL)", FieldKind::Url),
    field("location", "Location Name", FieldKind::Text),
    field("has_sockets", "Sockets", FieldKind::YesNo),
    field("has_toilet", "Toilets", FieldKind::YesNo),
    field("has_wifi", "Wi-Fi", FieldKind::YesNo),
    field("can_take_calls", "Calls", FieldKind::YesNo),
    field("seats", "Seats", FieldKind::Seats),
    field("coffee_price", "Coffee Price in £", FieldKind::Price),
];

/// Raw add/edit form. Missing fields deserialize as empty strings and are
/// then reported as required. Rules run on the trimmed values, which are
/// also what gets stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CafeForm {
    #[validate(
        custom(function = "required"),
        length(max = MAX_TEXT_LEN, message = "Field cannot be longer than 250 characters.")
    )]
    pub name: String,
    #[validate(
        custom(function = "http_url"),
        length(max = MAX_TEXT_LEN, message = "Field cannot be longer than 250 characters.")
    )]
    pub map_url: String,
    #[validate(
        custom(function = "http_url"),
        length(max = MAX_TEXT_LEN, message = "Field cannot be longer than 250 characters.")
    )]
    pub img_url: String,
    #[validate(
        custom(function = "required"),
        length(max = MAX_TEXT_LEN, message = "Field cannot be longer than 250 characters.")
    )]
    pub location: String,
    #[validate(custom(function = "yes_no"))]
    pub has_sockets: String,
    #[validate(custom(function = "yes_no"))]
    pub has_toilet: String,
    #[validate(custom(function = "yes_no"))]
    pub has_wifi: String,
    #[validate(custom(function = "yes_no"))]
    pub can_take_calls: String,
    #[validate(custom(function = "seat_bucket"))]
    pub seats: String,
    #[validate(custom(function = "price"))]
    pub coffee_price: String,
}

impl CafeForm {
    /// Current raw value of a field, by column name
    pub fn value(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "map_url" => &self.map_url,
            "img_url" => &self.img_url,
            "location" => &self.location,
            "has_sockets" => &self.has_sockets,
            "has_toilet" => &self.has_toilet,
            "has_wifi" => &self.has_wifi,
            "can_take_calls" => &self.can_take_calls,
            "seats" => &self.seats,
            "coffee_price" => &self.coffee_price,
            _ => "",
        }
    }

    /// Validate the submission and convert it into a storable [`CafeInput`].
    ///
    /// Each amenity flag is read from its own field.
    pub fn normalize(&self) -> Result<CafeInput, FormErrors> {
        let form = self.trimmed();
        form.validate()?;

        Ok(CafeInput {
            has_sockets: parse_flag("has_sockets", &form.has_sockets)?,
            has_toilet: parse_flag("has_toilet", &form.has_toilet)?,
            has_wifi: parse_flag("has_wifi", &form.has_wifi)?,
            can_take_calls: parse_flag("can_take_calls", &form.can_take_calls)?,
            seats: form
                .seats
                .parse()
                .map_err(|_| FormErrors::single("seats", MSG_INVALID_CHOICE))?,
            coffee_price: form
                .coffee_price
                .parse()
                .map_err(|e| FormErrors::single("coffee_price", price_message(&e)))?,
            name: form.name,
            map_url: form.map_url,
            img_url: form.img_url,
            location: form.location,
        })
    }

    fn trimmed(&self) -> Self {
        let trim = |value: &String| value.trim().to_string();
        Self {
            name: trim(&self.name),
            map_url: trim(&self.map_url),
            img_url: trim(&self.img_url),
            location: trim(&self.location),
            has_sockets: trim(&self.has_sockets),
            has_toilet: trim(&self.has_toilet),
            has_wifi: trim(&self.has_wifi),
            can_take_calls: trim(&self.can_take_calls),
            seats: trim(&self.seats),
            coffee_price: trim(&self.coffee_price),
        }
    }
}

impl From<&Cafe> for CafeForm {
    fn from(cafe: &Cafe) -> Self {
        Self {
            name: cafe.name.clone(),
            map_url: cafe.map_url.clone(),
            img_url: cafe.img_url.clone(),
            location: cafe.location.clone(),
            has_sockets: yes_no_label(cafe.has_sockets).to_string(),
            has_toilet: yes_no_label(cafe.has_toilet).to_string(),
            has_wifi: yes_no_label(cafe.has_wifi).to_string(),
            can_take_calls: yes_no_label(cafe.can_take_calls).to_string(),
            seats: cafe.seats.label().to_string(),
            coffee_price: cafe.coffee_price.amount().to_string(),
        }
    }
}

pub fn yes_no_label(flag: bool) -> &'static str {
    if flag { YES } else { NO }
}

fn parse_yes_no(value: &str) -> Option<bool> {
    match value.trim() {
        YES => Some(true),
        NO => Some(false),
        _ => None,
    }
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, FormErrors> {
    parse_yes_no(value).ok_or_else(|| FormErrors::single(field, MSG_INVALID_CHOICE))
}

fn price_message(err: &PriceError) -> &'static str {
    match err {
        PriceError::Negative => MSG_NEGATIVE_PRICE,
        PriceError::Malformed(_) | PriceError::OutOfRange => MSG_INVALID_DECIMAL,
    }
}

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure(REQUIRED_CODE, MSG_REQUIRED));
    }
    Ok(())
}

/// Absolute `http`/`https` URL whose host is an IP address or a domain with a TLD
fn http_url(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    let invalid = || failure("url", MSG_INVALID_URL);

    let parsed = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    match parsed.host() {
        Some(Host::Domain(domain)) if has_tld(domain) => Ok(()),
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => Ok(()),
        _ => Err(invalid()),
    }
}

fn has_tld(domain: &str) -> bool {
    domain
        .trim_end_matches('.')
        .rsplit_once('.')
        .is_some_and(|(rest, tld)| {
            !rest.is_empty()
                && !tld.is_empty()
                && tld.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

fn yes_no(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    parse_yes_no(value)
        .map(|_| ())
        .ok_or_else(|| failure("choice", MSG_INVALID_CHOICE))
}

fn seat_bucket(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    value
        .parse::<SeatBucket>()
        .map(|_| ())
        .map_err(|_| failure("choice", MSG_INVALID_CHOICE))
}

fn price(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    value
        .parse::<Price>()
        .map(|_| ())
        .map_err(|e| failure("decimal", price_message(&e)))
}

/// Field name → messages, in field-name order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FormErrors::new();
        for (field, field_errors) in errors.field_errors() {
            // A blank field only reports that it is required.
            let blank = field_errors.iter().any(|e| e.code == REQUIRED_CODE);
            for error in field_errors
                .iter()
                .filter(|e| !blank || e.code == REQUIRED_CODE)
            {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}
