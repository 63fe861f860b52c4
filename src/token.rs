use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) lexeme: String,
    pub(crate) literal: Option<Literal>,
    pub(crate) line: usize,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenKind {
    LeftParen, RightParen, LeftBrace, RightBrace,
    Comma, Dot, Minus, Plus, Semicolon, Slash, Star,

    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,

    Identifier, String, Number,

    And, Class, Else, False, Fun, For, If, Nil, Or,
    Print, Return, Super, This, True, Var, While,

    EndOfFile,
}

/// Decoded value carried by `Number` and `String` tokens.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl Token {
    /// A token without a decoded value. Only the scanner builds these; it
    /// never passes `Number` or `String`, which go through [`Token::number`]
    /// and [`Token::string`].
    pub(crate) fn new<S: Into<String>>(kind: TokenKind, lexeme: S, line: usize) -> Self {
        Self { kind, lexeme: lexeme.into(), literal: None, line }
    }

    pub fn number<S: Into<String>>(lexeme: S, value: f64, line: usize) -> Self {
        Self {
            kind: TokenKind::Number,
            lexeme: lexeme.into(),
            literal: Some(Literal::Number(value)),
            line,
        }
    }

    pub fn string<S: Into<String>, V: Into<String>>(lexeme: S, value: V, line: usize) -> Self {
        Self {
            kind: TokenKind::String,
            lexeme: lexeme.into(),
            literal: Some(Literal::String(value.into())),
            line,
        }
    }

    pub fn end_of_file(line: usize) -> Self {
        Self::new(TokenKind::EndOfFile, "", line)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{}", literal),
            None => Ok(()),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => f.write_str(s),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenKind::*;
        let name = match self {
            LeftParen => "LEFT_PAREN",
            RightParen => "RIGHT_PAREN",
            LeftBrace => "LEFT_BRACE",
            RightBrace => "RIGHT_BRACE",
            Comma => "COMMA",
            Dot => "DOT",
            Minus => "MINUS",
            Plus => "PLUS",
            Semicolon => "SEMICOLON",
            Slash => "SLASH",
            Star => "STAR",
            Bang => "BANG",
            BangEqual => "BANG_EQUAL",
            Equal => "EQUAL",
            EqualEqual => "EQUAL_EQUAL",
            Greater => "GREATER",
            GreaterEqual => "GREATER_EQUAL",
            Less => "LESS",
            LessEqual => "LESS_EQUAL",
            Identifier => "IDENTIFIER",
            String => "STRING",
            Number => "NUMBER",
            And => "AND",
            Class => "CLASS",
            Else => "ELSE",
            False => "FALSE",
            Fun => "FUN",
            For => "FOR",
            If => "IF",
            Nil => "NIL",
            Or => "OR",
            Print => "PRINT",
            Return => "RETURN",
            Super => "SUPER",
            This => "THIS",
            True => "TRUE",
            Var => "VAR",
            While => "WHILE",
            EndOfFile => "EOF",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_token_renders_kind_lexeme_and_value() {
        let token = Token::number("15", 15.0, 1);
        assert_eq!("NUMBER 15 15", token.to_string());
    }

    #[test]
    fn fractional_number_keeps_its_digits() {
        let token = Token::number("2.5", 2.5, 1);
        assert_eq!("NUMBER 2.5 2.5", token.to_string());
    }

    #[test]
    fn string_token_renders_value_without_quotes() {
        let token = Token::string("\"hi\"", "hi", 3);
        assert_eq!("STRING \"hi\" hi", token.to_string());
        assert_eq!(Some(&Literal::String("hi".into())), token.literal());
    }

    #[test]
    fn plain_tokens_carry_no_literal() {
        let token = Token::new(TokenKind::GreaterEqual, ">=", 2);
        assert_eq!(None, token.literal());
        assert_eq!("GREATER_EQUAL >= ", token.to_string());
    }

    #[test]
    fn end_of_file_has_empty_lexeme() {
        let token = Token::end_of_file(4);
        assert_eq!(TokenKind::EndOfFile, token.kind());
        assert_eq!("", token.lexeme());
        assert_eq!(4, token.line());
        assert_eq!("EOF  ", token.to_string());
    }
}
