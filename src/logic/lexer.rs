use std::fmt;

use crate::error::SyntaxError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Atom(String),
    Not,
    And,
    Or,
    Implies,
    Iff,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Atom(name) => write!(f, "{name}"),
            Token::Not => write!(f, "!"),
            Token::And => write!(f, "&"),
            Token::Or => write!(f, "|"),
            Token::Implies => write!(f, "=>"),
            Token::Iff => write!(f, "<=>"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// A token and the 1-based column it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub column: usize,
}

pub fn tokenize(line: &str) -> Result<Vec<Spanned>, SyntaxError> {
    let chars = line.chars().collect::<Vec<_>>();
    let mut out = Vec::new();
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        let column = i + 1;
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let (token, width) = match c {
            '!' => (Token::Not, 1),
            '&' => (Token::And, 1),
            '|' => (Token::Or, 1),
            '(' => (Token::LParen, 1),
            ')' => (Token::RParen, 1),
            // multi-char operators win over a lone '<' / '='
            '<' if chars.get(i + 1) == Some(&'=') && chars.get(i + 2) == Some(&'>') => {
                (Token::Iff, 3)
            }
            '=' if chars.get(i + 1) == Some(&'>') => (Token::Implies, 2),
            c if c.is_ascii_alphabetic() => {
                let end = chars[i..]
                    .iter()
                    .position(|ch| !ch.is_ascii_alphanumeric())
                    .map_or(chars.len(), |off| i + off);
                let name = chars[i..end].iter().collect::<String>();
                (Token::Atom(name), end - i)
            }
            ch => return Err(SyntaxError::IllegalChar { ch, column }),
        };
        out.push(Spanned { token, column });
        i += width;
    }

    Ok(out)
}

/// True when `name` would lex as a single atom.
pub fn is_atom_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::{Token, is_atom_name, tokenize};
    use crate::error::SyntaxError;

    #[test]
    fn operators_and_atoms() {
        let toks = tokenize("!A1 <=> (b=>C) | d & e")
            .expect("tokenize")
            .into_iter()
            .map(|s| s.token)
            .collect::<Vec<_>>();
        assert_eq!(
            toks,
            vec![
                Token::Not,
                Token::Atom("A1".into()),
                Token::Iff,
                Token::LParen,
                Token::Atom("b".into()),
                Token::Implies,
                Token::Atom("C".into()),
                Token::RParen,
                Token::Or,
                Token::Atom("d".into()),
                Token::And,
                Token::Atom("e".into()),
            ]
        );
    }

    #[test]
    fn lone_equals_is_illegal() {
        assert_eq!(
            tokenize("A = B"),
            Err(SyntaxError::IllegalChar { ch: '=', column: 3 })
        );
        assert_eq!(
            tokenize("A <= B"),
            Err(SyntaxError::IllegalChar { ch: '<', column: 3 })
        );
        assert!(matches!(
            tokenize("1A"),
            Err(SyntaxError::IllegalChar { ch: '1', column: 1 })
        ));
    }

    #[test]
    fn atom_names() {
        assert!(is_atom_name("P"));
        assert!(is_atom_name("x12"));
        assert!(!is_atom_name("12x"));
        assert!(!is_atom_name(""));
        assert!(!is_atom_name("a_b"));
    }
}
