/// Decodes HTML entities in text or attribute values.
///
/// `&nbsp;` becomes a plain space so pasted spacing does not leak
/// non-breaking characters into stored content.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    html_escape::decode_html_entities(&text.replace("&nbsp;", " ")).into_owned()
}
