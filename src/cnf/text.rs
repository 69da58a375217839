use crate::error::{Error, Result};
use crate::logic::lexer::{Token, tokenize};

use super::clause::{Clause, Literal};

/// Tokens that may never appear in an already-flattened clause line. Checked in
/// this order so that `<=>` is not reported as `=>`.
const CONNECTIVES: [&str; 4] = ["<=>", "=>", "&", "|"];

/// One clause per line, literals separated by single spaces.
pub fn to_text(clauses: &[Clause]) -> String {
    let mut out = String::new();
    for clause in clauses {
        out.push_str(&clause.to_string());
        out.push('\n');
    }
    out
}

/// Non-blank input lines with comments removed, paired with their 1-based
/// line number in the raw input.
pub fn input_lines(text: &str) -> Vec<(usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, strip_comment(line).trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect()
}

fn strip_comment(s: &str) -> &str {
    if let Some(idx) = s.find('#') {
        &s[..idx]
    } else {
        s
    }
}

/// Read a flattened clause line such as `!P Q r2`.
pub fn parse_clause_line(line_no: usize, text: &str) -> Result<Clause> {
    for token in CONNECTIVES {
        if text.contains(token) {
            return Err(format_error(line_no, token, text));
        }
    }

    let tokens = tokenize(text).map_err(|error| Error::Syntax {
        line: line_no,
        error,
    })?;

    let mut clause = Clause::new();
    let mut negate = false;
    for spanned in tokens {
        match spanned.token {
            Token::Not if !negate => negate = true,
            Token::Atom(name) => {
                let lit = if negate {
                    Literal::negative(name)
                } else {
                    Literal::positive(name)
                };
                clause.insert(lit);
                negate = false;
            }
            other => return Err(format_error(line_no, &other.to_string(), text)),
        }
    }
    if negate {
        return Err(format_error(line_no, "!", text));
    }
    Ok(clause)
}

fn format_error(line: usize, token: &str, text: &str) -> Error {
    Error::Format {
        line,
        token: token.to_owned(),
        text: text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{input_lines, parse_clause_line, to_text};
    use crate::cnf::clause::Literal;
    use crate::error::Error;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let src = "\
# header
P => Q   # trailing

  !A
";
        assert_eq!(input_lines(src), vec![(2, "P => Q"), (4, "!A")]);
    }

    #[test]
    fn clause_line_round_trip() {
        let clause = parse_clause_line(1, " !P   Q !P ").expect("clause");
        assert_eq!(clause.len(), 2);
        assert!(clause.contains(&Literal::negative("P")));
        assert_eq!(to_text(&[clause]), "!P Q\n");
    }

    #[test]
    fn connectives_are_format_errors() {
        let err = parse_clause_line(3, "A <=> B").expect_err("must fail");
        match err {
            Error::Format { line, token, .. } => {
                assert_eq!(line, 3);
                assert_eq!(token, "<=>");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            parse_clause_line(1, "A | B"),
            Err(Error::Format { ref token, .. }) if token == "|"
        ));
        assert!(matches!(
            parse_clause_line(1, "(A B)"),
            Err(Error::Format { ref token, .. }) if token == "("
        ));
        assert!(matches!(
            parse_clause_line(1, "!!A"),
            Err(Error::Format { ref token, .. }) if token == "!"
        ));
        assert!(matches!(parse_clause_line(1, "A !"), Err(Error::Format { .. })));
        assert!(matches!(parse_clause_line(1, "A ="), Err(Error::Syntax { line: 1, .. })));
    }
}
