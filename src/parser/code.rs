//! Parses a compiler-style diagnostic code prefix, for example `CS1234: `
use super::common::{is_word_char, space0, VResult};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::recognize,
    sequence::{pair, tuple},
};

/// Two word characters followed by four digits
fn code_token(input: &str) -> VResult<'_, &str> {
    recognize(pair(
        take_while_m_n(2, 2, is_word_char),
        take_while_m_n(4, 4, |c: char| c.is_ascii_digit()),
    ))(input)
}

/// Matches the token plus its colon separator and any surrounding whitespace,
/// yielding just the token.
pub fn code_prefix(input: &str) -> VResult<'_, &str> {
    let (rest, (code, _, _, _)) = tuple((code_token, space0, char(':'), space0))(input)?;

    Ok((rest, code))
}
