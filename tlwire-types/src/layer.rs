//! The layer-wide sum type and its dispatch table.

use tlwire::{Deserializable, Identifiable, Registry, Serializable};

use crate::{enums, types};

/// The protocol layer these definitions belong to.
pub const LAYER: i32 = 158;

macro_rules! object_variants {
    ($( $variant:ident($ty:ty) ),* $(,)?) => {
        /// Any boxed object of this layer.
        ///
        /// Decoded through [`registry()`] when the type is not known in advance.
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Object {
            $( $variant($ty), )*
        }

        impl Object {
            /// Constructor ID of the object held.
            pub fn constructor_id(&self) -> u32 {
                match self { $( Self::$variant(x) => x.constructor_id(), )* }
            }

            /// Schema name of the object held.
            pub fn constructor_name(&self) -> &'static str {
                match self { $( Self::$variant(x) => x.constructor_name(), )* }
            }
        }

        impl Serializable for Object {
            fn serialize(&self, buf: &mut impl Extend<u8>) {
                match self { $( Self::$variant(x) => x.serialize(buf), )* }
            }
        }

        $(
            impl From<$ty> for Object {
                fn from(x: $ty) -> Self { Self::$variant(x) }
            }
        )*
    };
}

object_variants! {
    Chat(enums::Chat),
    ChatInvite(enums::ChatInvite),
    User(enums::User),
    MessageEntity(enums::MessageEntity),
    ChannelAdminLogEvent(enums::ChannelAdminLogEvent),
    ChannelAdminLogEventAction(enums::ChannelAdminLogEventAction),
    GeoPoint(enums::GeoPoint),
    ResPq(enums::ResPq),
    PQInnerData(enums::PQInnerData),
    SentCodeType(enums::auth::SentCodeType),
    AdminLogResults(enums::channels::AdminLogResults),
}

macro_rules! constructors {
    ($( $ty:ty => $boxed:ty ),* $(,)?) => {
        /// Every constructor of this layer as `(id, name)`.
        pub const CONSTRUCTORS: &[(u32, &str)] = &[
            $( (<$ty as Identifiable>::CONSTRUCTOR_ID, <$ty as Identifiable>::NAME), )*
        ];

        fn register_all(reg: &mut Registry<Object>) {
            $( add::<$ty, $boxed>(reg); )*
        }
    };
}

constructors! {
    types::ChatEmpty                               => enums::Chat,
    types::ChatForbidden                           => enums::Chat,
    types::ChannelForbidden                        => enums::Chat,
    types::ChatInviteAlready                       => enums::ChatInvite,
    types::ChatInvitePeek                          => enums::ChatInvite,
    types::UserEmpty                               => enums::User,
    types::MessageEntityUnknown                    => enums::MessageEntity,
    types::MessageEntityMention                    => enums::MessageEntity,
    types::MessageEntityBold                       => enums::MessageEntity,
    types::MessageEntityCode                       => enums::MessageEntity,
    types::MessageEntityPre                        => enums::MessageEntity,
    types::MessageEntityTextUrl                    => enums::MessageEntity,
    types::MessageEntityMentionName                => enums::MessageEntity,
    types::MessageEntityBlockquote                 => enums::MessageEntity,
    types::ChannelAdminLogEvent                    => enums::ChannelAdminLogEvent,
    types::ChannelAdminLogEventActionChangeTitle   => enums::ChannelAdminLogEventAction,
    types::ChannelAdminLogEventActionChangeAbout   => enums::ChannelAdminLogEventAction,
    types::ChannelAdminLogEventActionToggleInvites => enums::ChannelAdminLogEventAction,
    types::GeoPointEmpty                           => enums::GeoPoint,
    types::GeoPoint                                => enums::GeoPoint,
    types::ResPq                                   => enums::ResPq,
    types::PQInnerData                             => enums::PQInnerData,
    types::auth::SentCodeTypeApp                   => enums::auth::SentCodeType,
    types::auth::SentCodeTypeSms                   => enums::auth::SentCodeType,
    types::auth::SentCodeTypeCall                  => enums::auth::SentCodeType,
    types::auth::SentCodeTypeFlashCall             => enums::auth::SentCodeType,
    types::auth::SentCodeTypeEmailCode             => enums::auth::SentCodeType,
    types::auth::SentCodeTypeSetUpEmailRequired    => enums::auth::SentCodeType,
    types::channels::AdminLogResults               => enums::channels::AdminLogResults,
}

/// Registers constructor `X` as a variant of boxed type `E`.
fn add<X, E>(reg: &mut Registry<Object>)
where
    X: Identifiable + Deserializable + Into<E> + 'static,
    E: Into<Object> + 'static,
{
    reg.insert(X::CONSTRUCTOR_ID, X::NAME, |buf| {
        let boxed: E = X::deserialize(buf)?.into();
        Ok(boxed.into())
    });
}

/// Builds the dispatch table for every constructor of [`LAYER`].
///
/// Build it once and share it; decoding only reads from it.
///
/// ```rust
/// use tlwire::Serializable;
/// use tlwire_types::{Object, enums, registry, types};
///
/// let reg = registry();
/// let chat = enums::Chat::Empty(types::ChatEmpty { id: 7 });
/// let obj = reg.from_bytes(&chat.to_bytes()).unwrap();
/// assert_eq!(obj, Object::Chat(chat));
/// ```
pub fn registry() -> Registry<Object> {
    let mut reg = Registry::new(LAYER);
    register_all(&mut reg);
    log::debug!("[layer] dispatch table for layer {LAYER}: {} constructors", reg.len());
    reg
}

/// Schema name of a constructor of this layer.
#[cfg(feature = "name-for-id")]
pub fn name_for_id(id: u32) -> Option<&'static str> {
    CONSTRUCTORS.iter().find(|(i, _)| *i == id).map(|(_, name)| *name)
}
