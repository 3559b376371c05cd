//! Common parsing functions shared by the message parsers
use nom::{
    IResult,
    bytes::complete::take_while,
    error::VerboseError,
};

pub type VResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Word characters restricted to ASCII, matching `\w` without culture rules
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn space0(input: &str) -> VResult<'_, &str> {
    take_while(char::is_whitespace)(input)
}
