use derive_more::{Display, Error};

/// A string contained a character outside of the ASCII range.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Character {character:?} at byte {index} isn't ASCII!")]
pub struct NotAscii {
    pub character: char,
    pub index: usize,
}

impl NotAscii {
    /// Returns an error for the first non-ASCII character in `s`, if there is one.
    pub(crate) fn check(s: &str) -> Result<(), NotAscii> {
        match s.char_indices().find(|(_, c)| !c.is_ascii()) {
            Some((index, character)) => Err(NotAscii { character, index }),
            None => Ok(()),
        }
    }
}
