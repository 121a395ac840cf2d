//! The `extra` field shared by clicks and impression items.

use std::collections::BTreeMap;

use snowplow_dsl_core::field::FieldMap;

/// Free-form string attributes attached under the `extra` key.
pub type Extra = BTreeMap<String, String>;

pub(crate) const EXTRA: &str = "extra";

/// Collects `(key, value)` pairs; a repeated key keeps its last value.
pub(crate) fn collect<I, K, V>(pairs: I) -> Extra
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Installs `extra` under its key unless it is empty, in which case the
/// field is left as it was.
pub(crate) fn write(fields: &mut FieldMap, extra: Extra) {
    if extra.is_empty() {
        return;
    }
    fields.insert(EXTRA, extra);
}

/// Builds an `Extra` through `configure`, then installs it like `write`.
pub(crate) fn write_with(fields: &mut FieldMap, configure: impl FnOnce(&mut Extra)) {
    let mut extra = Extra::new();
    configure(&mut extra);
    write(fields, extra);
}
