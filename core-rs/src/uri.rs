//! Identifier shortening
//!
//! Ontology identifiers arrive fully qualified
//! (`http://www.semanticweb.org/.../untitled-ontology-4#Bin_001`); views show
//! only the local name after the last fragment separator.

/// Fragment separator used by the ontology namespace
pub const FRAGMENT_SEPARATOR: char = '#';

/// Shorten an identifier to its local display name.
///
/// Returns the text after the last `#`, or the input unchanged when there is
/// no separator. Never fails.
///
/// # Example
///
/// ```
/// use waste_explorer::uri::local_name;
///
/// assert_eq!(local_name("http://example.org/onto#Bin_001"), "Bin_001");
/// assert_eq!(local_name("Plastic"), "Plastic");
/// ```
pub fn local_name(uri: &str) -> &str {
    match uri.rfind(FRAGMENT_SEPARATOR) {
        Some(idx) => &uri[idx + FRAGMENT_SEPARATOR.len_utf8()..],
        None => uri,
    }
}

/// Shorten an optional identifier; absent input yields an empty string
pub fn local_name_or_empty(uri: Option<&str>) -> &str {
    uri.map(local_name).unwrap_or("")
}
