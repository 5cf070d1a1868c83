//! A representative TL protocol layer as Rust types.
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`types`]   | Concrete constructors as `struct`s                    |
//! | [`enums`]   | Boxed types as closed `enum`s                         |
//! | [`Object`]  | Every boxed type of the layer, for dispatch           |
//!
//! Use the enum when the expected boxed type is known, and [`registry()`]
//! when only the leading constructor ID tells what follows.
//!
//! ```rust
//! use tlwire::{Deserializable, Serializable};
//! use tlwire_types::{enums, types};
//!
//! let invite = enums::ChatInvite::Already(types::ChatInviteAlready {
//!     chat: enums::Chat::Forbidden(types::ChatForbidden { id: 42, title: "gone".into() }),
//! });
//! let bytes = invite.to_bytes();
//! assert_eq!(&bytes[..4], &[0x7c, 0x6d, 0x68, 0x5a]);
//! assert_eq!(enums::ChatInvite::from_bytes(&bytes).unwrap(), invite);
//! ```
//!
//! # Features
//!
//! * `impl-serde`: derive `serde::{Serialize, Deserialize}` on every type.
//! * `name-for-id`: `name_for_id()` over [`CONSTRUCTORS`].

#![deny(unsafe_code)]
#![allow(clippy::large_enum_variant)]

pub mod enums;
pub mod types;
mod layer;

pub use layer::{CONSTRUCTORS, LAYER, Object, registry};
#[cfg(feature = "name-for-id")]
pub use layer::name_for_id;
