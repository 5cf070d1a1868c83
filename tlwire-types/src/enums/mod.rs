//! Boxed types as closed `enum`s, one variant per constructor.
//!
//! Encoding writes the variant's constructor ID before its body; decoding
//! reads the ID and fails with [`tlwire::Error::UnknownConstructor`] for any
//! constructor not belonging to the type. There is no way to build a boxed
//! type other than through one of its constructors.

pub mod auth;
pub mod channels;

use crate::types;

/// Declares a boxed enum with its encoding and the `From`/`TryFrom`
/// conversions to and from its constructors.
///
/// Constructors without fields listed under `empty` become unit variants.
macro_rules! boxed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident($ty:ty) ),* $(,)?
        }
        $( empty { $( $unit:ident: $unit_ty:ty ),* $(,)? } )?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $variant($ty), )*
            $($( $unit, )*)?
        }

        impl $name {
            /// Constructor ID of the variant held.
            pub fn constructor_id(&self) -> u32 {
                match self {
                    $( Self::$variant(_) => <$ty as tlwire::Identifiable>::CONSTRUCTOR_ID, )*
                    $($( Self::$unit => <$unit_ty as tlwire::Identifiable>::CONSTRUCTOR_ID, )*)?
                }
            }

            /// Schema name of the variant held.
            pub fn constructor_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => <$ty as tlwire::Identifiable>::NAME, )*
                    $($( Self::$unit => <$unit_ty as tlwire::Identifiable>::NAME, )*)?
                }
            }
        }

        impl tlwire::Serializable for $name {
            fn serialize(&self, buf: &mut impl Extend<u8>) {
                tlwire::Serializable::serialize(&self.constructor_id(), buf);
                match self {
                    $( Self::$variant(x) => tlwire::Serializable::serialize(x, buf), )*
                    $($( Self::$unit => {} )*)?
                }
            }
        }

        impl tlwire::Deserializable for $name {
            fn deserialize(buf: tlwire::deserialize::Buffer) -> tlwire::deserialize::Result<Self> {
                let id = <u32 as tlwire::Deserializable>::deserialize(buf)?;
                $(
                    if id == <$ty as tlwire::Identifiable>::CONSTRUCTOR_ID {
                        return Ok(Self::$variant(<$ty as tlwire::Deserializable>::deserialize(buf)?));
                    }
                )*
                $($(
                    if id == <$unit_ty as tlwire::Identifiable>::CONSTRUCTOR_ID {
                        return Ok(Self::$unit);
                    }
                )*)?
                Err(tlwire::Error::UnknownConstructor { id })
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(x: $ty) -> Self {
                    Self::$variant(x)
                }
            }

            impl TryFrom<$name> for $ty {
                type Error = $name;
                #[allow(unreachable_patterns)]
                fn try_from(v: $name) -> Result<Self, Self::Error> {
                    match v {
                        $name::$variant(x) => Ok(x),
                        other => Err(other),
                    }
                }
            }
        )*

        $($(
            impl From<$unit_ty> for $name {
                fn from(_: $unit_ty) -> Self {
                    Self::$unit
                }
            }
        )*)?
    };
}

pub(crate) use boxed_enum;

boxed_enum! {
    /// [`Chat`](https://core.telegram.org/type/Chat)
    pub enum Chat {
        Empty(types::ChatEmpty),
        Forbidden(types::ChatForbidden),
        ChannelForbidden(types::ChannelForbidden),
    }
}

impl Chat {
    /// The chat or channel ID, whichever constructor it came from.
    pub fn id(&self) -> i64 {
        match self {
            Self::Empty(c) => c.id,
            Self::Forbidden(c) => c.id,
            Self::ChannelForbidden(c) => c.id,
        }
    }
}

boxed_enum! {
    /// [`ChatInvite`](https://core.telegram.org/type/ChatInvite)
    pub enum ChatInvite {
        Already(types::ChatInviteAlready),
        Peek(types::ChatInvitePeek),
    }
}

boxed_enum! {
    /// [`User`](https://core.telegram.org/type/User)
    pub enum User {
        Empty(types::UserEmpty),
    }
}

boxed_enum! {
    /// [`MessageEntity`](https://core.telegram.org/type/MessageEntity)
    pub enum MessageEntity {
        Unknown(types::MessageEntityUnknown),
        Mention(types::MessageEntityMention),
        Bold(types::MessageEntityBold),
        Code(types::MessageEntityCode),
        Pre(types::MessageEntityPre),
        TextUrl(types::MessageEntityTextUrl),
        MentionName(types::MessageEntityMentionName),
        Blockquote(types::MessageEntityBlockquote),
    }
}

impl MessageEntity {
    /// `(offset, length)` of the text range, in UTF-16 code units.
    pub fn range(&self) -> (i32, i32) {
        match self {
            Self::Unknown(e) => (e.offset, e.length),
            Self::Mention(e) => (e.offset, e.length),
            Self::Bold(e) => (e.offset, e.length),
            Self::Code(e) => (e.offset, e.length),
            Self::Pre(e) => (e.offset, e.length),
            Self::TextUrl(e) => (e.offset, e.length),
            Self::MentionName(e) => (e.offset, e.length),
            Self::Blockquote(e) => (e.offset, e.length),
        }
    }
}

boxed_enum! {
    /// [`ChannelAdminLogEvent`](https://core.telegram.org/type/ChannelAdminLogEvent)
    pub enum ChannelAdminLogEvent {
        Event(types::ChannelAdminLogEvent),
    }
}

boxed_enum! {
    /// [`ChannelAdminLogEventAction`](https://core.telegram.org/type/ChannelAdminLogEventAction)
    pub enum ChannelAdminLogEventAction {
        ChangeTitle(types::ChannelAdminLogEventActionChangeTitle),
        ChangeAbout(types::ChannelAdminLogEventActionChangeAbout),
        ToggleInvites(types::ChannelAdminLogEventActionToggleInvites),
    }
}

boxed_enum! {
    /// [`GeoPoint`](https://core.telegram.org/type/GeoPoint)
    pub enum GeoPoint {
        Point(types::GeoPoint),
    }
    empty {
        Empty: types::GeoPointEmpty,
    }
}

boxed_enum! {
    /// [`ResPQ`](https://core.telegram.org/type/ResPQ)
    pub enum ResPq {
        ResPq(types::ResPq),
    }
}

boxed_enum! {
    /// [`P_Q_inner_data`](https://core.telegram.org/type/P_Q_inner_data)
    pub enum PQInnerData {
        Data(types::PQInnerData),
    }
}
