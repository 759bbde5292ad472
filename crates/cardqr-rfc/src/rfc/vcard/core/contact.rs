//! Validated contact record.

use serde::{Deserialize, Serialize};

use super::input::ContactInput;
use crate::error::{RfcError, RfcResult};

/// Postal address (ADR property, RFC 2426 §3.2.1).
///
/// Only street, locality, region, postal code, and country are carried; the
/// post office box and extended address slots are always empty on output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

impl PostalAddress {
    /// Returns whether no sub-field carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.street,
            &self.city,
            &self.state,
            &self.zip,
            &self.country,
        ]
        .iter()
        .all(|field| field.as_deref().is_none_or(str::is_empty))
    }

    /// Drops empty sub-fields; returns `None` if nothing remains.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let address = Self {
            street: present(self.street),
            city: present(self.city),
            state: present(self.state),
            zip: present(self.zip),
            country: present(self.country),
        };
        (!address.is_empty()).then_some(address)
    }
}

/// One person's contact details.
///
/// ## Summary
/// The given and family names are always non-blank; every constructor checks
/// this, so the serializer can treat any `ContactRecord` as well-formed.
/// Optional fields never hold an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    first_name: String,
    last_name: String,
    organization: Option<String>,
    title: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    mobile: Option<String>,
    website: Option<String>,
    address: Option<PostalAddress>,
    photo: Option<String>,
    note: Option<String>,
}

impl ContactRecord {
    /// Creates a record with only the required names.
    ///
    /// Names are kept exactly as given; only the blank check trims.
    ///
    /// ## Errors
    /// Returns `MissingRequiredField` if either name is blank.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> RfcResult<Self> {
        Ok(Self {
            first_name: required(Some(first_name.into()), "firstName")?,
            last_name: required(Some(last_name.into()), "lastName")?,
            organization: None,
            title: None,
            email: None,
            phone: None,
            mobile: None,
            website: None,
            address: None,
            photo: None,
            note: None,
        })
    }

    #[must_use]
    pub fn with_organization(mut self, value: impl Into<String>) -> Self {
        self.organization = present(Some(value.into()));
        self
    }

    #[must_use]
    pub fn with_title(mut self, value: impl Into<String>) -> Self {
        self.title = present(Some(value.into()));
        self
    }

    #[must_use]
    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = present(Some(value.into()));
        self
    }

    #[must_use]
    pub fn with_phone(mut self, value: impl Into<String>) -> Self {
        self.phone = present(Some(value.into()));
        self
    }

    #[must_use]
    pub fn with_mobile(mut self, value: impl Into<String>) -> Self {
        self.mobile = present(Some(value.into()));
        self
    }

    #[must_use]
    pub fn with_website(mut self, value: impl Into<String>) -> Self {
        self.website = present(Some(value.into()));
        self
    }

    /// Attaches an address; an address with no sub-fields is ignored.
    #[must_use]
    pub fn with_address(mut self, address: PostalAddress) -> Self {
        self.address = address.normalized();
        self
    }

    /// Attaches a base64 image payload, stored verbatim.
    #[must_use]
    pub fn with_photo(mut self, value: impl Into<String>) -> Self {
        self.photo = present(Some(value.into()));
        self
    }

    #[must_use]
    pub fn with_note(mut self, value: impl Into<String>) -> Self {
        self.note = present(Some(value.into()));
        self
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    #[must_use]
    pub fn mobile(&self) -> Option<&str> {
        self.mobile.as_deref()
    }

    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    #[must_use]
    pub fn address(&self) -> Option<&PostalAddress> {
        self.address.as_ref()
    }

    #[must_use]
    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Formats as a display name (given + family), trimmed.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl TryFrom<ContactInput> for ContactRecord {
    type Error = RfcError;

    fn try_from(input: ContactInput) -> RfcResult<Self> {
        Ok(Self {
            first_name: required(input.first_name, "firstName")?,
            last_name: required(input.last_name, "lastName")?,
            organization: present(input.organization),
            title: present(input.title),
            email: present(input.email),
            phone: present(input.phone),
            mobile: present(input.mobile),
            website: present(input.website),
            address: input.address.and_then(PostalAddress::normalized),
            photo: present(input.photo),
            note: present(input.note),
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> RfcResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(RfcError::MissingRequiredField(field)),
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
