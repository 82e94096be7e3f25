// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parser for `Name <email>` mailbox strings.

use chumsky::extra::ParserExtra;
use chumsky::input::{Input, Stream, ValueInput};
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

use crate::error::{Error, Result};

/// A display name and an address, both trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Mailbox {
    pub name: String,
    pub email: String,
}

/// Parse `Name <email>`.
pub(crate) fn parse_mailbox(field: &'static str, src: &str) -> Result<Mailbox> {
    let malformed = || Error::invalid(field, format!("`{src}` does not match `Name <email>`"));

    let stream = Stream::from_iter(src.trim().chars());
    let (name, email) = mailbox::<'_, _, extra::Err<Rich<'_, char>>>()
        .then_ignore(end())
        .parse(stream)
        .into_result()
        .map_err(|_| malformed())?;

    let (name, email) = (name.trim(), email.trim());
    if name.is_empty() || email.is_empty() {
        return Err(malformed());
    }
    Ok(Mailbox {
        name: name.to_owned(),
        email: email.to_owned(),
    })
}

/// ```txt
/// mailbox = display-name "<" addr-spec ">"
/// ```
fn mailbox<'src, I, E>() -> impl Parser<'src, I, (String, String), E>
where
    I: Input<'src, Token = char, Span = SimpleSpan> + ValueInput<'src>,
    E: ParserExtra<'src, I>,
{
    let display_name = any()
        .filter(|c: &char| *c != '<')
        .repeated()
        .at_least(1)
        .collect::<String>();
    let addr_spec = any()
        .filter(|c: &char| !matches!(c, '<' | '>'))
        .repeated()
        .at_least(1)
        .collect::<String>();

    display_name.then(addr_spec.delimited_by(just('<'), just('>')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_email() {
        let mailbox = parse_mailbox("organizer", "Jane Doe <mail@example.com>").unwrap();
        assert_eq!(mailbox.name, "Jane Doe");
        assert_eq!(mailbox.email, "mail@example.com");

        let mailbox = parse_mailbox("organizer", "  Jane   < jane@example.com >  ").unwrap();
        assert_eq!(mailbox.name, "Jane");
        assert_eq!(mailbox.email, "jane@example.com");
    }

    #[test]
    fn rejects_malformed_strings() {
        #[rustfmt::skip]
        let cases = [
            "mail@example.com",
            "<mail@example.com>",
            "Jane <>",
            "Jane <mail@example.com",
            "Jane <mail@example.com> trailing",
            "   <a@b>",
        ];
        for src in cases {
            let err = parse_mailbox("organizer", src).unwrap_err();
            assert!(
                err.to_string().contains("`organizer`"),
                "src = {src:?}, err = {err}"
            );
        }
    }
}
