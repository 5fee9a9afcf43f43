//! Parser for plain word list files, one word per line

use crate::dictionary::InitializeError;
use nom::{
	bytes::complete::take_till, character::complete::char, multi::many0, IResult, Parser,
};
use nom_supreme::ParserExt;

/// Splits the content of a word list into its raw lines
pub(crate) struct DicParser;

impl DicParser {
	/// Every `\n` terminated line is kept verbatim, blank ones included.
	/// An unterminated last line is kept only when it is not empty so that
	/// a trailing newline does not produce a phantom entry.
	pub(crate) fn parse(self, i: &str) -> Result<Vec<&str>, InitializeError> {
		let parser_err = |e: nom::Err<nom::error::Error<_>>| InitializeError::Parser(e.to_string());

		let (rest, mut lines) = many0(Self::parse_line).parse(i).map_err(parser_err)?;

		if !rest.is_empty() {
			lines.push(strip_carriage_return(rest));
		}

		Ok(lines)
	}

	/// One `\n` terminated line, without its terminator
	fn parse_line(i: &str) -> IResult<&str, &str> {
		take_till(|c: char| c == '\n')
			.terminated(char('\n'))
			.map(strip_carriage_return)
			.parse(i)
	}
}

/// Files written on Windows end their lines with `\r\n`
fn strip_carriage_return(line: &str) -> &str {
	line.strip_suffix('\r').unwrap_or(line)
}
