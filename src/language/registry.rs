use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSyntax {
    /// Single-line comment tokens, in matching priority order.
    pub single_line: Vec<String>,
    /// Block comment `(start, end)` pairs, scanned in declaration order.
    pub multi_line: Vec<(String, String)>,
}

impl CommentSyntax {
    #[must_use]
    pub fn new(single_line: Vec<&str>, multi_line: Vec<(&str, &str)>) -> Self {
        Self {
            single_line: single_line.into_iter().map(String::from).collect(),
            multi_line: multi_line
                .into_iter()
                .map(|(s, e)| (s.to_string(), e.to_string()))
                .collect(),
        }
    }

    fn c_style() -> Self {
        Self::new(vec!["//"], vec![("/*", "*/")])
    }

    fn hash() -> Self {
        Self::new(vec!["#"], vec![])
    }

    fn semicolon() -> Self {
        Self::new(vec![";"], vec![])
    }

    fn markup() -> Self {
        Self::new(vec![], vec![("<!--", "-->")])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Language tag used as the tally key.
    pub name: String,
    pub extensions: Vec<String>,
    pub comment_syntax: CommentSyntax,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, comment_syntax: CommentSyntax) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            comment_syntax,
        }
    }
}

/// Maps file names to comment grammars.
///
/// Lookup checks the exact (lower-cased) file name first, then the extension
/// after the last `.`. Both tables are keyed in lower case.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    extension_map: HashMap<String, usize>,
    filename_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
            filename_map: HashMap::new(),
        }
    }

    pub fn register(&mut self, language: Language) {
        let idx = self.languages.len();
        for ext in &language.extensions {
            self.extension_map.insert(ext.to_lowercase(), idx);
        }
        self.languages.push(language);
    }

    /// Route an exact file name to an already registered language tag.
    ///
    /// Returns `false` when `name` is not a registered tag.
    pub fn register_filename(&mut self, file_name: &str, name: &str) -> bool {
        let Some(idx) = self.languages.iter().position(|l| l.name == name) else {
            return false;
        };
        self.filename_map.insert(file_name.to_lowercase(), idx);
        true
    }

    /// Resolve a bare file name (no directory part) to its language.
    #[must_use]
    pub fn resolve(&self, file_name: &str) -> Option<&Language> {
        let lower = file_name.to_lowercase();
        if let Some(&idx) = self.filename_map.get(&lower) {
            return Some(&self.languages[idx]);
        }

        let (_, ext) = lower.rsplit_once('.')?;
        self.extension_map.get(ext).map(|&idx| &self.languages[idx])
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        let mut simple = |tag: &str, syntax: CommentSyntax| {
            registry.register(Language::new(tag, vec![tag], syntax));
        };

        for tag in [
            "c", "cpp", "h", "java", "js", "ts", "swift", "go", "rs", "kt", "m", "mm", "cs",
            "dart", "scss",
        ] {
            simple(tag, CommentSyntax::c_style());
        }

        simple(
            "py",
            CommentSyntax::new(vec!["#"], vec![("\"\"\"", "\"\"\""), ("'''", "'''")]),
        );
        simple("html", CommentSyntax::markup());
        simple("xml", CommentSyntax::markup());
        simple("php", CommentSyntax::new(vec!["//", "#"], vec![("/*", "*/")]));
        simple("vb", CommentSyntax::new(vec!["'"], vec![]));
        simple("sql", CommentSyntax::new(vec!["--"], vec![("/*", "*/")]));
        simple("css", CommentSyntax::new(vec![], vec![("/*", "*/")]));

        for tag in [
            "sh", "bash", "zsh", "make", "cmake", "ps1", "yml", "yaml", "toml", "r", "jl",
        ] {
            simple(tag, CommentSyntax::hash());
        }

        simple("bat", CommentSyntax::new(vec!["REM"], vec![]));

        for tag in ["asm", "s", "ini"] {
            simple(tag, CommentSyntax::semicolon());
        }

        simple("json", CommentSyntax::new(vec![], vec![]));
        simple("lua", CommentSyntax::new(vec!["--"], vec![("--[[", "]]")]));
        simple("ml", CommentSyntax::new(vec!["(*"], vec![("(*", "*)")]));

        for (file_name, tag) in [
            ("makefile", "make"),
            ("dockerfile", "sh"),
            ("cmakelists.txt", "cmake"),
            ("build", "sh"),
            ("configure", "sh"),
            ("install", "sh"),
            ("setup", "sh"),
        ] {
            registry.register_filename(file_name, tag);
        }

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
