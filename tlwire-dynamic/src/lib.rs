//! Schema-driven TL codec.
//!
//! Where `tlwire-types` fixes a layer at compile time, this crate takes the
//! `.tl` text at runtime: a [`Schema`] indexes the parsed definitions, and
//! [`Object`]s (a constructor ID plus named [`Value`]s) are encoded and
//! decoded by walking those definitions. The wire format is the same.
//!
//! ```rust
//! use tlwire_dynamic::{Object, Schema, Value};
//!
//! let schema = Schema::parse(
//!     "chatEmpty#29562865 id:long = Chat;
//!      chatInviteAlready#5a686d7c chat:Chat = ChatInvite;",
//! )
//! .unwrap();
//!
//! let invite = Object::new(0x5a686d7c).with("chat", Object::new(0x29562865).with("id", 1i64));
//! let bytes = schema.to_bytes(&invite).unwrap();
//! assert_eq!(&bytes[..8], &[0x7c, 0x6d, 0x68, 0x5a, 0x65, 0x28, 0x56, 0x29]);
//!
//! let back = schema.from_bytes(&bytes).unwrap();
//! assert_eq!(back, invite);
//! assert!(matches!(back.get("chat"), Some(Value::Object(_))));
//! ```

#![deny(unsafe_code)]

mod codec;
mod error;
mod schema;
mod value;

pub use codec::MAX_DEPTH;
pub use error::{DecodeError, EncodeError, SchemaError};
pub use schema::Schema;
pub use value::{Object, Value};
