/// Makes a folder or file name safe for use as a filesystem path segment.
/// Spaces become underscores and characters that are problematic in file
/// names are stripped.
pub fn sanitize_name(name: &str) -> String {
    let name = name.replace(' ', "_");
    let name: String = name
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*'))
        .collect();
    let name = name.trim_matches(|c| c == '.' || c == ' ').to_string();
    if name.is_empty() {
        "unnamed".to_string()
    } else {
        name
    }
}

#[test]
fn sanitize_name_replaces_spaces_and_specials() {
    assert_eq!(sanitize_name("Race Committee"), "Race_Committee");
    assert_eq!(sanitize_name("a/b\\c:d"), "abcd");
    assert_eq!(sanitize_name(". hidden ."), "hidden");
    assert_eq!(sanitize_name("***"), "unnamed");
}
