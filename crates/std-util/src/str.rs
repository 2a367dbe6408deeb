use heck::ToUpperCamelCase;

/// `author_id` → `AuthorId`
pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

/// Lower-cases the leading word of a Go identifier. A leading initialism is
/// lowered as a unit, plural `s` included: `AuthorID` → `authorID`, `ID` →
/// `id`, `URLPath` → `urlPath`, `IDs` → `ids`.
pub fn lower_first(src: &str) -> String {
    let chars: Vec<char> = src.chars().collect();
    let upper = chars.iter().take_while(|c| c.is_uppercase()).count();

    // `IDs`, `IDsByName`
    let plural = chars.get(upper) == Some(&'s')
        && chars.get(upper + 1).map_or(true, |c| c.is_uppercase());

    let lower = match upper {
        0 => return src.to_string(),
        n if n == chars.len() => n,
        1 => 1,
        n if plural => n,
        // The last capital starts the next word
        n => n - 1,
    };

    chars[..lower]
        .iter()
        .flat_map(|c| c.to_lowercase())
        .chain(chars[lower..].iter().copied())
        .collect()
}
