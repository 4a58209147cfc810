use std::borrow::Cow;

// Percent encoding of query components
//------------------------------------------------------------------------------

/// Escapes everything except ASCII letters, digits and `-_.~`.
pub fn encode_component(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Decodes `%XX` escapes. `+` is left alone. If the decoded bytes are not valid
/// UTF-8 the raw value is returned unchanged.
pub fn decode_component(value: &str) -> Cow<'_, str> {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(value),
    }
}
