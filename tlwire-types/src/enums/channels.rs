//! `channels.*` boxed types.

use super::boxed_enum;
use crate::types;

boxed_enum! {
    /// [`channels.AdminLogResults`](https://core.telegram.org/type/channels.AdminLogResults)
    pub enum AdminLogResults {
        AdminLogResults(types::channels::AdminLogResults),
    }
}
