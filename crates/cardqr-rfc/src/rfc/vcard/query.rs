//! Share-link query parameters.
//!
//! ## Summary
//! A share link is a `GET` URL whose query string carries the contact fields,
//! so the card can be regenerated without storing anything. Some fields
//! accept two parameter names; the full name wins when both are non-empty.
//!
//! | Field          | Names                    |
//! |----------------|--------------------------|
//! | first name     | `firstName`, `fn`        |
//! | last name      | `lastName`, `ln`         |
//! | organization   | `organization`, `org`    |
//! | website        | `website`, `url`         |
//!
//! Names are matched case-insensitively. `photo` is never carried in a link.

use std::collections::BTreeMap;

use cardqr_core::constants::VCARD_ROUTE_PREFIX;
use url::form_urlencoded;

use super::core::{ContactInput, ContactRecord, PostalAddress};

/// `(full name, abbreviation)` for aliased parameters.
const FIRST_NAME: (&str, Option<&str>) = ("firstName", Some("fn"));
const LAST_NAME: (&str, Option<&str>) = ("lastName", Some("ln"));
const ORGANIZATION: (&str, Option<&str>) = ("organization", Some("org"));
const WEBSITE: (&str, Option<&str>) = ("website", Some("url"));
const TITLE: (&str, Option<&str>) = ("title", None);
const EMAIL: (&str, Option<&str>) = ("email", None);
const PHONE: (&str, Option<&str>) = ("phone", None);
const MOBILE: (&str, Option<&str>) = ("mobile", None);
const NOTE: (&str, Option<&str>) = ("note", None);
const STREET: (&str, Option<&str>) = ("street", None);
const CITY: (&str, Option<&str>) = ("city", None);
const STATE: (&str, Option<&str>) = ("state", None);
const ZIP: (&str, Option<&str>) = ("zip", None);
const COUNTRY: (&str, Option<&str>) = ("country", None);

struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Keeps the first value seen for each (lowercased) name.
    fn collect<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (name, value) in pairs {
            map.entry(name.as_ref().to_ascii_lowercase())
                .or_insert_with(|| value.into());
        }
        Self(map)
    }

    fn non_empty(&self, name: &str) -> Option<String> {
        self.0
            .get(&name.to_ascii_lowercase())
            .filter(|value| !value.is_empty())
            .cloned()
    }

    fn pick(&self, (long, short): (&str, Option<&str>)) -> Option<String> {
        self.non_empty(long)
            .or_else(|| short.and_then(|short| self.non_empty(short)))
    }
}

impl ContactInput {
    /// ## Summary
    /// Rebuilds contact input from named query parameters.
    ///
    /// The address is present only if at least one of `street`, `city`,
    /// `state`, `zip`, `country` is non-empty.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let params = QueryParams::collect(pairs);

        let address = PostalAddress {
            street: params.pick(STREET),
            city: params.pick(CITY),
            state: params.pick(STATE),
            zip: params.pick(ZIP),
            country: params.pick(COUNTRY),
        }
        .normalized();

        Self {
            first_name: params.pick(FIRST_NAME),
            last_name: params.pick(LAST_NAME),
            organization: params.pick(ORGANIZATION),
            title: params.pick(TITLE),
            email: params.pick(EMAIL),
            phone: params.pick(PHONE),
            mobile: params.pick(MOBILE),
            website: params.pick(WEBSITE),
            address,
            photo: None,
            note: params.pick(NOTE),
        }
    }
}

/// Encodes `record` as a form-urlencoded query string.
///
/// Uses the short names for aliased fields and omits absent fields.
#[must_use]
pub fn share_query(record: &ContactRecord) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair(FIRST_NAME.0, record.first_name())
        .append_pair(LAST_NAME.0, record.last_name());

    let address = record.address();
    let optional = [
        ("org", record.organization()),
        (TITLE.0, record.title()),
        (EMAIL.0, record.email()),
        (PHONE.0, record.phone()),
        (MOBILE.0, record.mobile()),
        ("url", record.website()),
        (STREET.0, address.and_then(|a| a.street.as_deref())),
        (CITY.0, address.and_then(|a| a.city.as_deref())),
        (STATE.0, address.and_then(|a| a.state.as_deref())),
        (ZIP.0, address.and_then(|a| a.zip.as_deref())),
        (COUNTRY.0, address.and_then(|a| a.country.as_deref())),
        (NOTE.0, record.note()),
    ];

    for (name, value) in optional
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
    {
        query.append_pair(name, value);
    }

    query.finish()
}

/// Builds the absolute link that regenerates `record` as a vCard download.
#[must_use]
pub fn share_url(origin: &str, record: &ContactRecord) -> String {
    format!(
        "{}{VCARD_ROUTE_PREFIX}?{}",
        origin.trim_end_matches('/'),
        share_query(record)
    )
}
