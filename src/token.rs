//! Byte classification for the instruction grammar.

/// The classification bucket of one input byte.
///
/// The grammar spells its keywords letter by letter, so every letter it
/// uses is its own category. Anything outside the grammar's alphabet is
/// [`Token::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `m`
    M,
    /// `u`
    U,
    /// `l`
    L,
    /// `d`
    D,
    /// `o`
    O,
    /// `n`
    N,
    /// `t`
    T,
    /// `'`
    Quote,
    /// Any ASCII digit.
    Digit,
    /// `,`
    Comma,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// A byte the grammar has no use for.
    Invalid,
}

/// Classifies one input byte.
///
/// Total and deterministic: every byte maps to exactly one category, and
/// unclassifiable bytes map to [`Token::Invalid`] rather than failing.
/// The keywords are lowercase, so uppercase letters are not classified.
#[must_use]
pub fn classify(byte: u8) -> Token {
    match byte {
        b'm' => Token::M,
        b'u' => Token::U,
        b'l' => Token::L,
        b'd' => Token::D,
        b'o' => Token::O,
        b'n' => Token::N,
        b't' => Token::T,
        b'\'' => Token::Quote,
        b',' => Token::Comma,
        b'(' => Token::OpenParen,
        b')' => Token::CloseParen,
        _ if byte.is_ascii_digit() => Token::Digit,
        _ => Token::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_the_grammar_alphabet() {
        assert_eq!(classify(b'm'), Token::M);
        assert_eq!(classify(b'u'), Token::U);
        assert_eq!(classify(b'l'), Token::L);
        assert_eq!(classify(b'd'), Token::D);
        assert_eq!(classify(b'o'), Token::O);
        assert_eq!(classify(b'n'), Token::N);
        assert_eq!(classify(b't'), Token::T);
        assert_eq!(classify(b'\''), Token::Quote);
        assert_eq!(classify(b','), Token::Comma);
        assert_eq!(classify(b'('), Token::OpenParen);
        assert_eq!(classify(b')'), Token::CloseParen);
    }

    #[test]
    fn every_digit_shares_one_category() {
        for byte in b'0'..=b'9' {
            assert_eq!(classify(byte), Token::Digit);
        }
    }

    #[test]
    fn everything_else_is_invalid() {
        assert_eq!(classify(b'M'), Token::Invalid);
        assert_eq!(classify(b'x'), Token::Invalid);
        assert_eq!(classify(b' '), Token::Invalid);
        assert_eq!(classify(b'\n'), Token::Invalid);
        assert_eq!(classify(0), Token::Invalid);
        assert_eq!(classify(0xff), Token::Invalid);
    }

    #[test]
    fn only_the_grammar_alphabet_is_classified() {
        let classified = (u8::MIN..=u8::MAX)
            .filter(|&byte| classify(byte) != Token::Invalid)
            .count();
        // Eleven single-byte categories plus the ten digits.
        assert_eq!(classified, 21);
    }
}
