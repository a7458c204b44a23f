use std::fmt::{self, Display, Write};

pub(super) const INDENT: &str = "  ";

pub(crate) fn write_quoted(sdl: &mut impl Write, s: &str) -> fmt::Result {
    sdl.write_char('"')?;
    for c in s.chars() {
        match c {
            '\r' => sdl.write_str("\\r"),
            '\n' => sdl.write_str("\\n"),
            '\t' => sdl.write_str("\\t"),
            '\\' => sdl.write_str("\\\\"),
            '"' => sdl.write_str("\\\""),
            c if c.is_control() => write!(sdl, "\\u{:04X}", c as u32),
            c => sdl.write_char(c),
        }?
    }
    sdl.write_char('"')
}

/// A block string description, one line per description line.
///
/// The indentation common to all non-blank lines is removed, deeper indentation is kept.
pub(super) struct Description<'a>(pub &'a str, pub &'a str);

impl Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Description(description, indentation) = self;

        let common_indent = description
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.len() - line.trim_start().len())
            .min()
            .unwrap_or_default();

        writeln!(f, r#"{indentation}""""#)?;

        let mut lines = description.lines().skip_while(|line| line.trim().is_empty()).peekable();

        while let Some(line) = lines.next() {
            let line = line.get(common_indent..).unwrap_or(line.trim_start()).trim_end();

            if line.is_empty() && lines.peek().map(|next| next.trim().is_empty()).unwrap_or(true) {
                continue;
            }

            if line.is_empty() {
                writeln!(f)?;
                continue;
            }

            writeln!(f, "{indentation}{}", line.replace(r#"""""#, r#"\""""#))?;
        }

        writeln!(f, r#"{indentation}""""#)
    }
}

pub(super) fn write_description(f: &mut fmt::Formatter<'_>, description: Option<&str>, indent: &str) -> fmt::Result {
    let Some(description) = description else { return Ok(()) };
    Display::fmt(&Description(description, indent), f)
}

/// Writes `items` separated by `separator`.
pub(super) fn write_separated<T: Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
    separator: &str,
) -> fmt::Result {
    let mut items = items.into_iter().peekable();

    while let Some(item) = items.next() {
        Display::fmt(&item, f)?;

        if items.peek().is_some() {
            f.write_str(separator)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Helper<'a>(&'a str, &'a str);

    impl Display for Helper<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_description(f, Some(self.0), self.1)
        }
    }

    #[test]
    fn relative_indentation_is_kept() {
        let rendered = Helper("Example:\n    indented code\n", INDENT).to_string();
        assert_eq!(rendered, "  \"\"\"\n  Example:\n      indented code\n  \"\"\"\n");

        let rendered = Helper("    query {\n      cats\n    }", "").to_string();
        assert_eq!(rendered, "\"\"\"\nquery {\n  cats\n}\n\"\"\"\n");
    }

    #[test]
    fn quoted_strings_are_escaped() {
        let mut out = String::new();
        write_quoted(&mut out, "tab\there \"quoted\" back\\slash\u{1}").unwrap();

        assert_eq!(out, r#""tab\there \"quoted\" back\\slash\u0001""#);
    }

    #[test]
    fn descriptions_are_indented() {
        let rendered = Helper("\n  A cat.\n\n\n  Meows \"\"\"loudly\"\"\".\n", INDENT).to_string();

        assert_eq!(rendered, "  \"\"\"\n  A cat.\n\n  Meows \\\"\"\"loudly\\\"\"\".\n  \"\"\"\n");
    }
}
