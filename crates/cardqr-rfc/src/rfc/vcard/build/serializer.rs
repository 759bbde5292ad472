//! vCard serialization.

use chrono::{DateTime, Utc};

use super::escape::escape_text;
use crate::clock::{Clock, SystemClock};
use crate::rfc::vcard::core::{ContactRecord, PostalAddress};

const CRLF: &str = "\r\n";

/// `REV` timestamp layout (basic ISO 8601, UTC).
const REV_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Inputs visible to a line rule.
struct CardContext<'a> {
    record: &'a ContactRecord,
    revision: DateTime<Utc>,
}

/// One output line, emitted when `build` yields it.
struct LineRule {
    property: &'static str,
    build: fn(&CardContext<'_>) -> Option<String>,
}

/// Every line a card can contain, in output order.
static LINE_RULES: &[LineRule] = &[
    LineRule {
        property: "BEGIN",
        build: |_| Some("BEGIN:VCARD".to_string()),
    },
    LineRule {
        property: "VERSION",
        build: |_| Some("VERSION:3.0".to_string()),
    },
    LineRule {
        property: "FN",
        build: |ctx| Some(format!("FN:{}", escape_text(&ctx.record.display_name()))),
    },
    LineRule {
        property: "N",
        build: |ctx| {
            Some(format!(
                "N:{};{};;;",
                escape_text(ctx.record.last_name()),
                escape_text(ctx.record.first_name())
            ))
        },
    },
    LineRule {
        property: "ORG",
        build: |ctx| text_line("ORG", ctx.record.organization()),
    },
    LineRule {
        property: "TITLE",
        build: |ctx| text_line("TITLE", ctx.record.title()),
    },
    LineRule {
        property: "EMAIL",
        build: |ctx| text_line("EMAIL;TYPE=INTERNET", ctx.record.email()),
    },
    LineRule {
        property: "TEL",
        build: |ctx| text_line("TEL;TYPE=WORK,VOICE", ctx.record.phone()),
    },
    LineRule {
        property: "TEL",
        build: |ctx| text_line("TEL;TYPE=CELL", ctx.record.mobile()),
    },
    LineRule {
        property: "URL",
        build: |ctx| text_line("URL", ctx.record.website()),
    },
    LineRule {
        property: "ADR",
        build: |ctx| ctx.record.address().map(address_line),
    },
    LineRule {
        property: "PHOTO",
        // Base64 payload is written as-is.
        build: |ctx| {
            ctx.record
                .photo()
                .map(|photo| format!("PHOTO;ENCODING=b;TYPE=JPEG:{photo}"))
        },
    },
    LineRule {
        property: "NOTE",
        build: |ctx| text_line("NOTE", ctx.record.note()),
    },
    LineRule {
        property: "REV",
        build: |ctx| Some(format!("REV:{}", ctx.revision.format(REV_FORMAT))),
    },
    LineRule {
        property: "END",
        build: |_| Some("END:VCARD".to_string()),
    },
];

/// Serializes a contact record as a vCard 3.0 document.
///
/// ## Summary
/// Stamps `REV` with the system clock. Lines are joined with CRLF; there is
/// no line folding and no CRLF after `END:VCARD`.
#[must_use]
pub fn serialize(record: &ContactRecord) -> String {
    serialize_with_clock(record, &SystemClock)
}

/// Serializes a contact record, reading `REV` from `clock`.
#[must_use]
pub fn serialize_with_clock(record: &ContactRecord, clock: &dyn Clock) -> String {
    let ctx = CardContext {
        record,
        revision: clock.now(),
    };

    LINE_RULES
        .iter()
        .filter_map(|rule| (rule.build)(&ctx))
        .collect::<Vec<_>>()
        .join(CRLF)
}

/// Names of the properties `record` would produce, in output order.
#[must_use]
pub fn property_names(record: &ContactRecord) -> Vec<&'static str> {
    let ctx = CardContext {
        record,
        revision: DateTime::<Utc>::UNIX_EPOCH,
    };

    LINE_RULES
        .iter()
        .filter(|rule| (rule.build)(&ctx).is_some())
        .map(|rule| rule.property)
        .collect()
}

fn text_line(prefix: &str, value: Option<&str>) -> Option<String> {
    value.map(|value| format!("{prefix}:{}", escape_text(value)))
}

fn address_line(addr: &PostalAddress) -> String {
    // POBox;Extended;Street;Locality;Region;PostalCode;Country
    let segments = [
        &addr.street,
        &addr.city,
        &addr.state,
        &addr.zip,
        &addr.country,
    ]
    .map(|segment| escape_text(segment.as_deref().unwrap_or_default()));

    format!("ADR;TYPE=WORK:;;{}", segments.join(";"))
}
