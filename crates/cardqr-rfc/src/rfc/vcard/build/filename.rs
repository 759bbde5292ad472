//! Download filename derivation.

use crate::rfc::vcard::core::ContactRecord;

/// Returns `{first}_{last}.vcf` with whitespace collapsed to underscores.
///
/// A run of whitespace, together with any underscores touching it, becomes a
/// single `_`, so `"Ada "` + `"Lovelace"` yields `Ada_Lovelace.vcf`.
/// Underscores that touch no whitespace are left alone.
#[must_use]
pub fn filename(record: &ContactRecord) -> String {
    let joined = format!("{}_{}", record.first_name(), record.last_name());
    let mut name = String::with_capacity(joined.len() + 4);
    let mut run = String::new();

    for c in joined.chars() {
        if c.is_whitespace() || c == '_' {
            run.push(c);
            continue;
        }
        flush_run(&mut run, &mut name);
        name.push(c);
    }
    flush_run(&mut run, &mut name);

    name.push_str(".vcf");
    name
}

fn flush_run(run: &mut String, name: &mut String) {
    if run.chars().any(char::is_whitespace) {
        name.push('_');
    } else {
        name.push_str(run);
    }
    run.clear();
}
