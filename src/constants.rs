/// Three dashes that open and close a frontmatter block. The newline that
/// follows is taken from the document.
pub const FRONTMATTER_DELIMITER: &str = "---";

pub const LF: &str = "\n";
pub const CRLF: &str = "\r\n";

pub const CONFIG_FILENAME: &str = "cheatsheet.yaml";

/// Extension (with leading dot, case as written) to highlighting language.
pub const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    (".md", "markdown"),
    (".sh", "bash"),
    (".bash", "bash"),
    (".py", "python"),
    (".js", "javascript"),
    (".ts", "typescript"),
    (".go", "go"),
    (".rb", "ruby"),
    (".yml", "yaml"),
    (".yaml", "yaml"),
    (".json", "json"),
    (".php", "php"),
    (".java", "java"),
    (".c", "c"),
    (".cpp", "cpp"),
    (".rs", "rust"),
    (".sql", "sql"),
];
