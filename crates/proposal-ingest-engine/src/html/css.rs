/// Iterates `property: value` pairs of an inline `style` attribute.
/// Property names are lowercased; values are trimmed.
pub fn declarations(style: &str) -> impl Iterator<Item = (String, &str)> {
    style.split(';').filter_map(|decl| {
        let (prop, value) = decl.split_once(':')?;
        let prop = prop.trim().to_ascii_lowercase();
        let value = value.trim();
        (!prop.is_empty() && !value.is_empty()).then_some((prop, value))
    })
}

/// Value of `property` in an inline `style` attribute; the last declaration wins.
pub fn property<'a>(style: &'a str, property: &str) -> Option<&'a str> {
    declarations(style)
        .filter(|(prop, _)| prop == property)
        .map(|(_, value)| value)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_declarations() {
        let decls: Vec<_> =
            declarations("color: rgb(230, 0, 0); background-color:#ffff00;;").collect();
        assert_eq!(
            decls,
            vec![
                ("color".to_string(), "rgb(230, 0, 0)"),
                ("background-color".to_string(), "#ffff00"),
            ]
        );
    }

    #[test]
    fn property_lookup_is_exact_and_last_wins() {
        let style = "background-color: blue; COLOR: red; color: green";
        assert_eq!(property(style, "color"), Some("green"));
        assert_eq!(property(style, "background-color"), Some("blue"));
        assert_eq!(property(style, "text-align"), None);
    }
}
