//! `auth.*` boxed types.

use super::boxed_enum;
use crate::types;

boxed_enum! {
    /// [`auth.SentCodeType`](https://core.telegram.org/type/auth.SentCodeType)
    pub enum SentCodeType {
        App(types::auth::SentCodeTypeApp),
        Sms(types::auth::SentCodeTypeSms),
        Call(types::auth::SentCodeTypeCall),
        FlashCall(types::auth::SentCodeTypeFlashCall),
        EmailCode(types::auth::SentCodeTypeEmailCode),
        SetUpEmailRequired(types::auth::SentCodeTypeSetUpEmailRequired),
    }
}
