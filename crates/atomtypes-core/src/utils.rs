/// Convert a script symbol to a type name.
///
/// Symbols are SCREAMING_SNAKE_CASE: each `_`-separated word keeps its first
/// letter uppercase and the rest is lowercased. A name that already looks
/// like PascalCase (starts uppercase, has lowercase letters, no `_`) is
/// returned unchanged.
///
/// # Examples
/// ```
/// use atomtypes_core::utils::symbol_to_type_name;
/// assert_eq!(symbol_to_type_name("CONCEPT_NODE"), "ConceptNode");
/// assert_eq!(symbol_to_type_name("ATOM"), "Atom");
/// assert_eq!(symbol_to_type_name("PatternLink"), "PatternLink");
/// ```
pub fn symbol_to_type_name(symbol: &str) -> String {
    let starts_uppercase = symbol.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    let has_lowercase = symbol.chars().any(|c| c.is_ascii_lowercase());
    if starts_uppercase && has_lowercase && !symbol.contains('_') {
        return symbol.to_owned();
    }

    let mut name = String::with_capacity(symbol.len());
    for word in symbol.split('_').filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.push(first.to_ascii_uppercase());
        }
        name.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
    name
}

/// Convert a type name to its script symbol.
///
/// # Examples
/// ```
/// use atomtypes_core::utils::type_name_to_symbol;
/// assert_eq!(type_name_to_symbol("ConceptNode"), "CONCEPT_NODE");
/// assert_eq!(type_name_to_symbol("Atom"), "ATOM");
/// ```
pub fn type_name_to_symbol(name: &str) -> String {
    let mut symbol = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 && !symbol.ends_with('_') {
            symbol.push('_');
        }
        symbol.push(c.to_ascii_uppercase());
    }
    symbol
}

/// Characters allowed in type names and bare script symbols.
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// A type name is non-empty and made of [`is_name_char`] characters only,
/// so every valid name can be written into a declaration script.
///
/// # Examples
/// ```
/// use atomtypes_core::utils::is_valid_type_name;
/// assert!(is_valid_type_name("Foo_Bar"));
/// assert!(!is_valid_type_name("a,b"));
/// assert!(!is_valid_type_name(""));
/// ```
pub fn is_valid_type_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}
