//! Language detection from file extensions.

/// Map a filename to a display language tag. Unmapped extensions and
/// extensionless names fall back to `"text"`.
pub fn get_language(filename: &str) -> &'static str {
    let Some((_, ext)) = filename.rsplit_once('.') else {
        return "text";
    };
    match ext.to_ascii_lowercase().as_str() {
        "ts" | "tsx" => "typescript",
        "js" | "jsx" => "javascript",
        "py" => "python",
        "sql" => "sql",
        "css" => "css",
        "html" => "html",
        "json" => "json",
        "md" => "markdown",
        "yml" | "yaml" => "yaml",
        "sh" | "bash" | "zsh" => "bash",
        "rs" => "rust",
        "go" => "go",
        "rb" => "ruby",
        "java" => "java",
        "swift" => "swift",
        "kt" => "kotlin",
        "c" | "h" => "c",
        "cpp" => "cpp",
        "toml" => "toml",
        "xml" | "svg" => "xml",
        "graphql" | "gql" => "graphql",
        "dockerfile" => "dockerfile",
        _ => "text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(get_language("foo.tsx"), "typescript");
        assert_eq!(get_language("main.rs"), "rust");
        assert_eq!(get_language("deploy.yml"), "yaml");
        assert_eq!(get_language("schema.graphql"), "graphql");
        assert_eq!(get_language("icon.svg"), "xml");
    }

    #[test]
    fn no_extension_is_text() {
        assert_eq!(get_language("README"), "text");
        assert_eq!(get_language("Makefile"), "text");
    }

    #[test]
    fn unknown_extension_is_text() {
        assert_eq!(get_language("data.bin"), "text");
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(get_language("APP.TS"), "typescript");
        assert_eq!(get_language("notes.MD"), "markdown");
    }
}
