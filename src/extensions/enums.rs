use strum::IntoEnumIterator;

/// Comma-separated list of an enum's canonical values, used to build the
/// fixed "valid values" suffix of validation errors.
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str>,
{
    T::iter()
        .map(|v| v.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ")
}
