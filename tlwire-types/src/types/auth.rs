//! `auth.*` constructors.

use tlwire::deserialize::{Buffer, Result};
use tlwire::{Deserializable, Identifiable, Serializable};

use super::{bit, opt_bit, read_if};

/// Code types that only carry the code length.
macro_rules! length_only {
    ($(#[$doc:meta])* $name:ident = $id:literal, $tl:literal) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            pub length: i32,
        }

        impl Identifiable for $name {
            const CONSTRUCTOR_ID: u32 = $id;
            const NAME: &'static str = $tl;
        }

        impl Serializable for $name {
            fn serialize(&self, buf: &mut impl Extend<u8>) {
                self.length.serialize(buf);
            }
        }

        impl Deserializable for $name {
            fn deserialize(buf: Buffer) -> Result<Self> {
                Ok(Self { length: i32::deserialize(buf)? })
            }
        }
    };
}

length_only! {
    /// ```tl
    /// auth.sentCodeTypeApp#3dbb5986 length:int = auth.SentCodeType;
    /// ```
    SentCodeTypeApp = 0x3dbb5986, "auth.sentCodeTypeApp"
}

length_only! {
    /// ```tl
    /// auth.sentCodeTypeSms#c000bba2 length:int = auth.SentCodeType;
    /// ```
    SentCodeTypeSms = 0xc000bba2, "auth.sentCodeTypeSms"
}

length_only! {
    /// ```tl
    /// auth.sentCodeTypeCall#5353e5a7 length:int = auth.SentCodeType;
    /// ```
    SentCodeTypeCall = 0x5353e5a7, "auth.sentCodeTypeCall"
}

/// ```tl
/// auth.sentCodeTypeFlashCall#ab03c6d9 pattern:string = auth.SentCodeType;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentCodeTypeFlashCall {
    pub pattern: String,
}

impl Identifiable for SentCodeTypeFlashCall {
    const CONSTRUCTOR_ID: u32 = 0xab03c6d9;
    const NAME: &'static str = "auth.sentCodeTypeFlashCall";
}

impl Serializable for SentCodeTypeFlashCall {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.pattern.serialize(buf);
    }
}

impl Deserializable for SentCodeTypeFlashCall {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self { pattern: String::deserialize(buf)? })
    }
}

/// ```tl
/// auth.sentCodeTypeEmailCode#f450f59b flags:# apple_signin_allowed:flags.0?true
///     google_signin_allowed:flags.1?true email_pattern:string length:int
///     reset_available_period:flags.3?int reset_pending_date:flags.4?int
///     = auth.SentCodeType;
/// ```
///
/// Bit 2 is unused in this layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentCodeTypeEmailCode {
    pub apple_signin_allowed: bool,
    pub google_signin_allowed: bool,
    pub email_pattern: String,
    pub length: i32,
    pub reset_available_period: Option<i32>,
    pub reset_pending_date: Option<i32>,
}

impl Identifiable for SentCodeTypeEmailCode {
    const CONSTRUCTOR_ID: u32 = 0xf450f59b;
    const NAME: &'static str = "auth.sentCodeTypeEmailCode";
}

impl Serializable for SentCodeTypeEmailCode {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        (bit(self.apple_signin_allowed, 0)
            | bit(self.google_signin_allowed, 1)
            | opt_bit(&self.reset_available_period, 3)
            | opt_bit(&self.reset_pending_date, 4))
        .serialize(buf);
        self.email_pattern.serialize(buf);
        self.length.serialize(buf);
        self.reset_available_period.serialize(buf);
        self.reset_pending_date.serialize(buf);
    }
}

impl Deserializable for SentCodeTypeEmailCode {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        let email_pattern = String::deserialize(buf)?;
        let length = i32::deserialize(buf)?;
        let reset_available_period = read_if(flags, 3, buf)?;
        let reset_pending_date = read_if(flags, 4, buf)?;
        Ok(Self {
            apple_signin_allowed: flags & (1 << 0) != 0,
            google_signin_allowed: flags & (1 << 1) != 0,
            email_pattern,
            length,
            reset_available_period,
            reset_pending_date,
        })
    }
}

/// ```tl
/// auth.sentCodeTypeSetUpEmailRequired#a5491dea flags:# apple_signin_allowed:flags.0?true
///     google_signin_allowed:flags.1?true = auth.SentCodeType;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentCodeTypeSetUpEmailRequired {
    pub apple_signin_allowed: bool,
    pub google_signin_allowed: bool,
}

impl Identifiable for SentCodeTypeSetUpEmailRequired {
    const CONSTRUCTOR_ID: u32 = 0xa5491dea;
    const NAME: &'static str = "auth.sentCodeTypeSetUpEmailRequired";
}

impl Serializable for SentCodeTypeSetUpEmailRequired {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        (bit(self.apple_signin_allowed, 0) | bit(self.google_signin_allowed, 1)).serialize(buf);
    }
}

impl Deserializable for SentCodeTypeSetUpEmailRequired {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            apple_signin_allowed: flags & (1 << 0) != 0,
            google_signin_allowed: flags & (1 << 1) != 0,
        })
    }
}
