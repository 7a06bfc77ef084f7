use thiserror::Error;

/// Represents all errors that can occur while classifying characters.
///
/// Positions are byte offsets into the expression after whitespace removal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Found a character that is neither a digit, a `.`, nor one of
    /// `+ - * / ( )`.
    #[error("Unknown character '{character}' at position {position}.")]
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
}
