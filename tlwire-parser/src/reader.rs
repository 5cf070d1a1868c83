//! Line reader behind [`crate::parse_tl_file`].

use crate::errors::ParseError;
use crate::tl::{Category, Definition};

pub(crate) struct DefinitionReader<'a> {
    lines: std::str::Lines<'a>,
    category: Category,
    /// Text of a definition whose `;` has not been seen yet.
    partial: String,
}

impl<'a> DefinitionReader<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            lines: src.lines(),
            category: Category::Types,
            partial: String::new(),
        }
    }
}

impl Iterator for DefinitionReader<'_> {
    type Item = Result<Definition, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(line) = self.lines.next() else {
                // Unterminated trailing definition.
                let rest = std::mem::take(&mut self.partial);
                let rest = rest.trim();
                if rest.is_empty() {
                    return None;
                }
                return Some(self.finish(rest));
            };

            let line = match line.split_once("//") {
                Some((code, _comment)) => code.trim(),
                None => line.trim(),
            };
            if line.is_empty() {
                continue;
            }

            match line {
                "---functions---" => { self.category = Category::Functions; continue; }
                "---types---"     => { self.category = Category::Types;     continue; }
                _ => {}
            }

            if !self.partial.is_empty() {
                self.partial.push(' ');
            }
            self.partial.push_str(line);

            if !line.ends_with(';') {
                continue;
            }

            let raw = std::mem::take(&mut self.partial);
            let raw = raw.trim_end_matches(';').trim();
            if raw.is_empty() {
                continue;
            }
            return Some(self.finish(raw));
        }
    }
}

impl DefinitionReader<'_> {
    fn finish(&self, raw: &str) -> Result<Definition, ParseError> {
        raw.parse::<Definition>().map(|mut def| {
            def.category = self.category;
            def
        })
    }
}
