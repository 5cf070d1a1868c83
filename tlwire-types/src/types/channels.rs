//! `channels.*` constructors.

use tlwire::deserialize::{Buffer, Result};
use tlwire::{Deserializable, Identifiable, Serializable};

use crate::enums;

/// ```tl
/// channels.adminLogResults#ed8af74d events:Vector<ChannelAdminLogEvent>
///     chats:Vector<Chat> users:Vector<User> = channels.AdminLogResults;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdminLogResults {
    pub events: Vec<enums::ChannelAdminLogEvent>,
    pub chats: Vec<enums::Chat>,
    pub users: Vec<enums::User>,
}

impl Identifiable for AdminLogResults {
    const CONSTRUCTOR_ID: u32 = 0xed8af74d;
    const NAME: &'static str = "channels.adminLogResults";
}

impl Serializable for AdminLogResults {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.events.serialize(buf);
        self.chats.serialize(buf);
        self.users.serialize(buf);
    }
}

impl Deserializable for AdminLogResults {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let events = Vec::<enums::ChannelAdminLogEvent>::deserialize(buf)?;
        let chats = Vec::<enums::Chat>::deserialize(buf)?;
        let users = Vec::<enums::User>::deserialize(buf)?;
        Ok(Self { events, chats, users })
    }
}
