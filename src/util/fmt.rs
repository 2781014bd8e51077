use std::fmt::{self, Debug, Formatter};

/// Writes the contained string as-is when debug formatted, so that pre-rendered entries (such as
/// a `-` for an empty slot) can be placed in a [`debug_list`](Formatter::debug_list).
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
