use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FieldId(pub(crate) u32);

impl From<u32> for FieldId {
    fn from(value: u32) -> Self {
        FieldId(value)
    }
}

impl From<FieldId> for u32 {
    fn from(value: FieldId) -> Self {
        value.0
    }
}
