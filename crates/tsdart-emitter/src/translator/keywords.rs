//! Dart keywords and built-in type names emitted by the translator.

use tsdart_syntax::Keyword;

/// The Dart type accepting any value; the fallback for every type with no
/// faithful Dart equivalent.
pub const DYNAMIC: &str = "dynamic";
pub const NUM: &str = "num";
pub const STRING: &str = "String";
pub const BOOL: &str = "bool";
pub const VOID: &str = "void";

pub const LIST: &str = "List";
pub const MAP: &str = "Map";

/// Cast operator in `(expr as T)`.
pub const CAST: &str = "as";
/// Bound keyword in `T extends Bound`.
pub const EXTENDS: &str = "extends";

pub const COMMENT_OPEN: &str = "/*";
pub const COMMENT_CLOSE: &str = "*/";

/// Dart spelling of a TypeScript keyword type, or `None` when the keyword is
/// left to the caller.
#[must_use]
pub const fn dart_keyword(keyword: Keyword) -> Option<&'static str> {
    match keyword {
        Keyword::Number => Some(NUM),
        Keyword::String => Some(STRING),
        Keyword::Boolean => Some(BOOL),
        Keyword::Void => Some(VOID),
        Keyword::Any => Some(DYNAMIC),
        Keyword::Unknown
        | Keyword::Never
        | Keyword::Null
        | Keyword::Undefined
        | Keyword::Object
        | Keyword::Symbol
        | Keyword::BigInt => None,
    }
}

/// Make `text` safe to place inside a `/* ... */` comment.
#[must_use]
pub fn comment_safe(text: &str) -> String {
    text.replace("*/", "* /")
}
