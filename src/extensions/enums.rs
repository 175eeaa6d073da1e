use strum::IntoEnumIterator;

/// Comma-separated list of an enum's accepted string forms, quoted into
/// parse error messages so callers see every valid value.
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str>,
{
    let mut out = String::new();
    for variant in T::iter() {
        if !out.is_empty() {
            out.push_str(", ");
        }
        out.push_str(variant.as_ref());
    }
    out
}
