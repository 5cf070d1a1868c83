//! Concrete constructors (bare types) as `struct`s.
//!
//! `Serializable`/`Deserializable` cover the body only; the constructor ID
//! is written by the boxed enum in [`crate::enums`] or by
//! [`tlwire::Boxed`]. Optional fields map to the flag bit noted in each
//! type's schema line.

pub mod auth;
pub mod channels;

use tlwire::deserialize::{Buffer, Result};
use tlwire::{Deserializable, Identifiable, Serializable};

use crate::enums;

/// Flags word bit for a presence-only (`flags.N?true`) field.
fn bit(set: bool, index: u32) -> u32 {
    if set { 1 << index } else { 0 }
}

/// Flags word bit for an optional field.
fn opt_bit<T>(value: &Option<T>, index: u32) -> u32 {
    bit(value.is_some(), index)
}

/// Reads an optional field if its bit is set in `flags`.
fn read_if<T: Deserializable>(flags: u32, index: u32, buf: Buffer) -> Result<Option<T>> {
    if flags & (1 << index) != 0 { T::deserialize(buf).map(Some) } else { Ok(None) }
}

// ─── Chat ─────────────────────────────────────────────────────────────────────

/// ```tl
/// chatEmpty#29562865 id:long = Chat;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatEmpty {
    pub id: i64,
}

impl Identifiable for ChatEmpty {
    const CONSTRUCTOR_ID: u32 = 0x29562865;
    const NAME: &'static str = "chatEmpty";
}

impl Serializable for ChatEmpty {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
    }
}

impl Deserializable for ChatEmpty {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self { id: i64::deserialize(buf)? })
    }
}

/// ```tl
/// chatForbidden#6592a1a7 id:long title:string = Chat;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatForbidden {
    pub id: i64,
    pub title: String,
}

impl Identifiable for ChatForbidden {
    const CONSTRUCTOR_ID: u32 = 0x6592a1a7;
    const NAME: &'static str = "chatForbidden";
}

impl Serializable for ChatForbidden {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
        self.title.serialize(buf);
    }
}

impl Deserializable for ChatForbidden {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let id = i64::deserialize(buf)?;
        let title = String::deserialize(buf)?;
        Ok(Self { id, title })
    }
}

/// ```tl
/// channelForbidden#17d493d5 flags:# broadcast:flags.5?true megagroup:flags.8?true
///     id:long access_hash:long title:string until_date:flags.16?int = Chat;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelForbidden {
    pub broadcast: bool,
    pub megagroup: bool,
    pub id: i64,
    pub access_hash: i64,
    pub title: String,
    pub until_date: Option<i32>,
}

impl Identifiable for ChannelForbidden {
    const CONSTRUCTOR_ID: u32 = 0x17d493d5;
    const NAME: &'static str = "channelForbidden";
}

impl Serializable for ChannelForbidden {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        (bit(self.broadcast, 5) | bit(self.megagroup, 8) | opt_bit(&self.until_date, 16)).serialize(buf);
        self.id.serialize(buf);
        self.access_hash.serialize(buf);
        self.title.serialize(buf);
        self.until_date.serialize(buf);
    }
}

impl Deserializable for ChannelForbidden {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        let id = i64::deserialize(buf)?;
        let access_hash = i64::deserialize(buf)?;
        let title = String::deserialize(buf)?;
        let until_date = read_if(flags, 16, buf)?;
        Ok(Self {
            broadcast: flags & (1 << 5) != 0,
            megagroup: flags & (1 << 8) != 0,
            id,
            access_hash,
            title,
            until_date,
        })
    }
}

// ─── ChatInvite ───────────────────────────────────────────────────────────────

/// ```tl
/// chatInviteAlready#5a686d7c chat:Chat = ChatInvite;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatInviteAlready {
    pub chat: enums::Chat,
}

impl Identifiable for ChatInviteAlready {
    const CONSTRUCTOR_ID: u32 = 0x5a686d7c;
    const NAME: &'static str = "chatInviteAlready";
}

impl Serializable for ChatInviteAlready {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.chat.serialize(buf);
    }
}

impl Deserializable for ChatInviteAlready {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self { chat: enums::Chat::deserialize(buf)? })
    }
}

/// ```tl
/// chatInvitePeek#61695cb0 chat:Chat expires:int = ChatInvite;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatInvitePeek {
    pub chat: enums::Chat,
    pub expires: i32,
}

impl Identifiable for ChatInvitePeek {
    const CONSTRUCTOR_ID: u32 = 0x61695cb0;
    const NAME: &'static str = "chatInvitePeek";
}

impl Serializable for ChatInvitePeek {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.chat.serialize(buf);
        self.expires.serialize(buf);
    }
}

impl Deserializable for ChatInvitePeek {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let chat = enums::Chat::deserialize(buf)?;
        let expires = i32::deserialize(buf)?;
        Ok(Self { chat, expires })
    }
}

// ─── User ─────────────────────────────────────────────────────────────────────

/// ```tl
/// userEmpty#d3bc4b7a id:long = User;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserEmpty {
    pub id: i64,
}

impl Identifiable for UserEmpty {
    const CONSTRUCTOR_ID: u32 = 0xd3bc4b7a;
    const NAME: &'static str = "userEmpty";
}

impl Serializable for UserEmpty {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
    }
}

impl Deserializable for UserEmpty {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self { id: i64::deserialize(buf)? })
    }
}

// ─── MessageEntity ────────────────────────────────────────────────────────────

/// Entities that are just a text range.
macro_rules! range_entity {
    ($(#[$doc:meta])* $name:ident = $id:literal, $tl:literal) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            pub offset: i32,
            pub length: i32,
        }

        impl Identifiable for $name {
            const CONSTRUCTOR_ID: u32 = $id;
            const NAME: &'static str = $tl;
        }

        impl Serializable for $name {
            fn serialize(&self, buf: &mut impl Extend<u8>) {
                self.offset.serialize(buf);
                self.length.serialize(buf);
            }
        }

        impl Deserializable for $name {
            fn deserialize(buf: Buffer) -> Result<Self> {
                let offset = i32::deserialize(buf)?;
                let length = i32::deserialize(buf)?;
                Ok(Self { offset, length })
            }
        }
    };
}

range_entity! {
    /// ```tl
    /// messageEntityUnknown#bb92ba95 offset:int length:int = MessageEntity;
    /// ```
    MessageEntityUnknown = 0xbb92ba95, "messageEntityUnknown"
}

range_entity! {
    /// ```tl
    /// messageEntityMention#fa04579d offset:int length:int = MessageEntity;
    /// ```
    MessageEntityMention = 0xfa04579d, "messageEntityMention"
}

range_entity! {
    /// ```tl
    /// messageEntityBold#bd610bc9 offset:int length:int = MessageEntity;
    /// ```
    MessageEntityBold = 0xbd610bc9, "messageEntityBold"
}

range_entity! {
    /// ```tl
    /// messageEntityCode#28a20571 offset:int length:int = MessageEntity;
    /// ```
    MessageEntityCode = 0x28a20571, "messageEntityCode"
}

/// ```tl
/// messageEntityPre#73924be0 offset:int length:int language:string = MessageEntity;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageEntityPre {
    pub offset: i32,
    pub length: i32,
    pub language: String,
}

impl Identifiable for MessageEntityPre {
    const CONSTRUCTOR_ID: u32 = 0x73924be0;
    const NAME: &'static str = "messageEntityPre";
}

impl Serializable for MessageEntityPre {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
        self.language.serialize(buf);
    }
}

impl Deserializable for MessageEntityPre {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let offset = i32::deserialize(buf)?;
        let length = i32::deserialize(buf)?;
        let language = String::deserialize(buf)?;
        Ok(Self { offset, length, language })
    }
}

/// ```tl
/// messageEntityTextUrl#76a6d327 offset:int length:int url:string = MessageEntity;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageEntityTextUrl {
    pub offset: i32,
    pub length: i32,
    pub url: String,
}

impl Identifiable for MessageEntityTextUrl {
    const CONSTRUCTOR_ID: u32 = 0x76a6d327;
    const NAME: &'static str = "messageEntityTextUrl";
}

impl Serializable for MessageEntityTextUrl {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
        self.url.serialize(buf);
    }
}

impl Deserializable for MessageEntityTextUrl {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let offset = i32::deserialize(buf)?;
        let length = i32::deserialize(buf)?;
        let url = String::deserialize(buf)?;
        Ok(Self { offset, length, url })
    }
}

/// ```tl
/// messageEntityMentionName#dc7b1140 offset:int length:int user_id:long = MessageEntity;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageEntityMentionName {
    pub offset: i32,
    pub length: i32,
    pub user_id: i64,
}

impl Identifiable for MessageEntityMentionName {
    const CONSTRUCTOR_ID: u32 = 0xdc7b1140;
    const NAME: &'static str = "messageEntityMentionName";
}

impl Serializable for MessageEntityMentionName {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
        self.user_id.serialize(buf);
    }
}

impl Deserializable for MessageEntityMentionName {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let offset = i32::deserialize(buf)?;
        let length = i32::deserialize(buf)?;
        let user_id = i64::deserialize(buf)?;
        Ok(Self { offset, length, user_id })
    }
}

/// ```tl
/// messageEntityBlockquote#f1ccaaac flags:# collapsed:flags.0?true
///     offset:int length:int = MessageEntity;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageEntityBlockquote {
    pub collapsed: bool,
    pub offset: i32,
    pub length: i32,
}

impl Identifiable for MessageEntityBlockquote {
    const CONSTRUCTOR_ID: u32 = 0xf1ccaaac;
    const NAME: &'static str = "messageEntityBlockquote";
}

impl Serializable for MessageEntityBlockquote {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        bit(self.collapsed, 0).serialize(buf);
        self.offset.serialize(buf);
        self.length.serialize(buf);
    }
}

impl Deserializable for MessageEntityBlockquote {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        let offset = i32::deserialize(buf)?;
        let length = i32::deserialize(buf)?;
        Ok(Self { collapsed: flags & 1 != 0, offset, length })
    }
}

// ─── Admin log ────────────────────────────────────────────────────────────────

/// ```tl
/// channelAdminLogEvent#1fad68cd id:long date:int user_id:long
///     action:ChannelAdminLogEventAction = ChannelAdminLogEvent;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelAdminLogEvent {
    pub id: i64,
    pub date: i32,
    pub user_id: i64,
    pub action: enums::ChannelAdminLogEventAction,
}

impl Identifiable for ChannelAdminLogEvent {
    const CONSTRUCTOR_ID: u32 = 0x1fad68cd;
    const NAME: &'static str = "channelAdminLogEvent";
}

impl Serializable for ChannelAdminLogEvent {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
        self.date.serialize(buf);
        self.user_id.serialize(buf);
        self.action.serialize(buf);
    }
}

impl Deserializable for ChannelAdminLogEvent {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let id = i64::deserialize(buf)?;
        let date = i32::deserialize(buf)?;
        let user_id = i64::deserialize(buf)?;
        let action = enums::ChannelAdminLogEventAction::deserialize(buf)?;
        Ok(Self { id, date, user_id, action })
    }
}

/// ```tl
/// channelAdminLogEventActionChangeTitle#e6dfb825 prev_value:string new_value:string
///     = ChannelAdminLogEventAction;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelAdminLogEventActionChangeTitle {
    pub prev_value: String,
    pub new_value: String,
}

impl Identifiable for ChannelAdminLogEventActionChangeTitle {
    const CONSTRUCTOR_ID: u32 = 0xe6dfb825;
    const NAME: &'static str = "channelAdminLogEventActionChangeTitle";
}

impl Serializable for ChannelAdminLogEventActionChangeTitle {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.prev_value.serialize(buf);
        self.new_value.serialize(buf);
    }
}

impl Deserializable for ChannelAdminLogEventActionChangeTitle {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let prev_value = String::deserialize(buf)?;
        let new_value = String::deserialize(buf)?;
        Ok(Self { prev_value, new_value })
    }
}

/// ```tl
/// channelAdminLogEventActionChangeAbout#55188a2e prev_value:string new_value:string
///     = ChannelAdminLogEventAction;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelAdminLogEventActionChangeAbout {
    pub prev_value: String,
    pub new_value: String,
}

impl Identifiable for ChannelAdminLogEventActionChangeAbout {
    const CONSTRUCTOR_ID: u32 = 0x55188a2e;
    const NAME: &'static str = "channelAdminLogEventActionChangeAbout";
}

impl Serializable for ChannelAdminLogEventActionChangeAbout {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.prev_value.serialize(buf);
        self.new_value.serialize(buf);
    }
}

impl Deserializable for ChannelAdminLogEventActionChangeAbout {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let prev_value = String::deserialize(buf)?;
        let new_value = String::deserialize(buf)?;
        Ok(Self { prev_value, new_value })
    }
}

/// ```tl
/// channelAdminLogEventActionToggleInvites#1b7907ae new_value:Bool = ChannelAdminLogEventAction;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelAdminLogEventActionToggleInvites {
    pub new_value: bool,
}

impl Identifiable for ChannelAdminLogEventActionToggleInvites {
    const CONSTRUCTOR_ID: u32 = 0x1b7907ae;
    const NAME: &'static str = "channelAdminLogEventActionToggleInvites";
}

impl Serializable for ChannelAdminLogEventActionToggleInvites {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.new_value.serialize(buf);
    }
}

impl Deserializable for ChannelAdminLogEventActionToggleInvites {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self { new_value: bool::deserialize(buf)? })
    }
}

// ─── GeoPoint ─────────────────────────────────────────────────────────────────

/// ```tl
/// geoPointEmpty#1117dd5f = GeoPoint;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPointEmpty {}

impl Identifiable for GeoPointEmpty {
    const CONSTRUCTOR_ID: u32 = 0x1117dd5f;
    const NAME: &'static str = "geoPointEmpty";
}

impl Serializable for GeoPointEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for GeoPointEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// ```tl
/// geoPoint#b2a2f663 flags:# long:double lat:double access_hash:long
///     accuracy_radius:flags.0?int = GeoPoint;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub long: f64,
    pub lat: f64,
    pub access_hash: i64,
    pub accuracy_radius: Option<i32>,
}

impl Identifiable for GeoPoint {
    const CONSTRUCTOR_ID: u32 = 0xb2a2f663;
    const NAME: &'static str = "geoPoint";
}

impl Serializable for GeoPoint {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        opt_bit(&self.accuracy_radius, 0).serialize(buf);
        self.long.serialize(buf);
        self.lat.serialize(buf);
        self.access_hash.serialize(buf);
        self.accuracy_radius.serialize(buf);
    }
}

impl Deserializable for GeoPoint {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        let long = f64::deserialize(buf)?;
        let lat = f64::deserialize(buf)?;
        let access_hash = i64::deserialize(buf)?;
        let accuracy_radius = read_if(flags, 0, buf)?;
        Ok(Self { long, lat, access_hash, accuracy_radius })
    }
}

// ─── Key exchange ─────────────────────────────────────────────────────────────

/// ```tl
/// resPQ#05162463 nonce:int128 server_nonce:int128 pq:bytes
///     server_public_key_fingerprints:Vector<long> = ResPQ;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResPq {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub pq: Vec<u8>,
    pub server_public_key_fingerprints: Vec<i64>,
}

impl Identifiable for ResPq {
    const CONSTRUCTOR_ID: u32 = 0x05162463;
    const NAME: &'static str = "resPQ";
}

impl Serializable for ResPq {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.pq.serialize(buf);
        self.server_public_key_fingerprints.serialize(buf);
    }
}

impl Deserializable for ResPq {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let pq = Vec::<u8>::deserialize(buf)?;
        let server_public_key_fingerprints = Vec::<i64>::deserialize(buf)?;
        Ok(Self { nonce, server_nonce, pq, server_public_key_fingerprints })
    }
}

/// ```tl
/// p_q_inner_data#83c95aec pq:bytes p:bytes q:bytes nonce:int128 server_nonce:int128
///     new_nonce:int256 = P_Q_inner_data;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PQInnerData {
    pub pq: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce: [u8; 32],
}

impl Identifiable for PQInnerData {
    const CONSTRUCTOR_ID: u32 = 0x83c95aec;
    const NAME: &'static str = "p_q_inner_data";
}

impl Serializable for PQInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.pq.serialize(buf);
        self.p.serialize(buf);
        self.q.serialize(buf);
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce.serialize(buf);
    }
}

impl Deserializable for PQInnerData {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let pq = Vec::<u8>::deserialize(buf)?;
        let p = Vec::<u8>::deserialize(buf)?;
        let q = Vec::<u8>::deserialize(buf)?;
        let nonce = <[u8; 16]>::deserialize(buf)?;
        let server_nonce = <[u8; 16]>::deserialize(buf)?;
        let new_nonce = <[u8; 32]>::deserialize(buf)?;
        Ok(Self { pq, p, q, nonce, server_nonce, new_nonce })
    }
}
