//! Parser for [Type Language] (TL) schema files.
//!
//! Turns raw `.tl` text into [`Definition`]s: constructor names, 32-bit IDs,
//! ordered parameters and the flag bit guarding each optional parameter.
//! The dynamic codec in `tlwire-dynamic` drives encoding and decoding
//! directly from these definitions.
//!
//! # Quick start
//!
//! ```rust
//! use tlwire_parser::parse_tl_file;
//!
//! let src = "chatInviteAlready#5a686d7c chat:Chat = ChatInvite;";
//! let def = parse_tl_file(src).next().unwrap().unwrap();
//! assert_eq!(def.id, 0x5a686d7c);
//! assert_eq!(def.ty.name, "ChatInvite");
//! ```
//!
//! [Type Language]: https://core.telegram.org/mtproto/TL

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod crc;
/// Parse error types for TL schema parsing.
pub mod errors;
mod reader;
pub mod tl;

use errors::ParseError;
use tl::Definition;

/// Parses a complete TL schema, yielding one [`Definition`] at a time.
///
/// Blank lines and `//` comments are skipped. `---functions---` and
/// `---types---` switch the [`tl::Category`] of what follows, and a
/// definition may span several lines up to its terminating `;`.
///
/// Each item is a `Result` so callers choose between skipping and failing
/// on a bad definition.
pub fn parse_tl_file(contents: &str) -> impl Iterator<Item = Result<Definition, ParseError>> + '_ {
    reader::DefinitionReader::new(contents)
}

/// Extracts the protocol layer from a leading `// LAYER N` comment.
///
/// Only comment lines before the first definition are considered.
pub fn layer_of(contents: &str) -> Option<i32> {
    contents
        .lines()
        .map(str::trim)
        .take_while(|l| l.is_empty() || l.starts_with("//"))
        .find_map(|l| l.strip_prefix("// LAYER ")?.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::layer_of;

    #[test]
    fn layer_header() {
        assert_eq!(layer_of("// LAYER 158\nchatEmpty#29562865 id:long = Chat;"), Some(158));
        assert_eq!(layer_of("\n// generated\n// LAYER 7\n"), Some(7));
    }

    #[test]
    fn layer_header_after_definitions_is_ignored() {
        assert_eq!(layer_of("chatEmpty#29562865 id:long = Chat;\n// LAYER 158"), None);
    }
}
