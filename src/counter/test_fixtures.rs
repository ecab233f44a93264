//! Shared test fixtures for counter tests.
//!
//! Provides common `CommentSyntax` configurations used across both
//! `classifier_tests` and `sloc_tests` modules.

use crate::language::CommentSyntax;

/// C-family syntax: `//` and `/* */`
pub fn c_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec![("/*", "*/")])
}

/// Python syntax with triple-quoted strings as block comments
pub fn python_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["#"], vec![("\"\"\"", "\"\"\""), ("'''", "'''")])
}

/// PHP syntax with two single-line tokens
pub fn php_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["//", "#"], vec![("/*", "*/")])
}

/// Lua syntax with long bracket comments
pub fn lua_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["--"], vec![("--[[", "]]")])
}
