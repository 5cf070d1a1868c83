//! The TL definition AST.

mod definition;
mod parameter;
mod ty;

pub use definition::Definition;
pub use parameter::{Parameter, ParameterType};
pub use ty::Type;

/// Whether a [`Definition`] is a data constructor or an RPC function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Constructors: everything before `---functions---` or after `---types---`.
    Types,
    /// Functions: everything after `---functions---`.
    Functions,
}

/// The flag bit guarding an optional parameter, `flags.3` in `flags.3?int`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Flag {
    /// Name of the `#` parameter holding the bit, usually `flags`.
    pub name: String,
    /// Bit index, 0 to 31.
    pub index: u32,
}

impl Flag {
    /// The bit as a mask.
    pub fn mask(&self) -> u32 {
        1 << self.index
    }
}
