use crate::{
    diagnostics::{Diagnostic, Diagnostics, Severity},
    error::{Error, LexicalError, Result},
    token::{Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::str::CharIndices;
use tracing::{debug, trace};

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "and" => TokenKind::And,
    "class" => TokenKind::Class,
    "else" => TokenKind::Else,
    "false" => TokenKind::False,
    "for" => TokenKind::For,
    "fun" => TokenKind::Fun,
    "if" => TokenKind::If,
    "nil" => TokenKind::Nil,
    "or" => TokenKind::Or,
    "print" => TokenKind::Print,
    "return" => TokenKind::Return,
    "super" => TokenKind::Super,
    "this" => TokenKind::This,
    "true" => TokenKind::True,
    "var" => TokenKind::Var,
    "while" => TokenKind::While,
};

/// Turns Lox source text into tokens.
///
/// Iterating yields every token and every recovered lexical error in source
/// order. [`Scanner::scan_tokens`] drains the iterator, routes errors into a
/// [`Diagnostics`] and appends the end-of-file marker.
pub struct Scanner<'a> {
    source: &'a str,
    chars: PeekMoreIterator<CharIndices<'a>>,
    // Byte offsets into `source`.
    start: usize,
    current: usize,
    line: usize,
    warnings: Vec<Diagnostic>,
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        loop {
            self.start = self.current;
            let c = self.advance()?;
            if let Some(scanned) = self.scan_token(c) {
                return Some(scanned);
            }
        }
    }
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekmore(),
            start: 0,
            current: 0,
            line: 1,
            warnings: Vec::new(),
        }
    }

    pub fn scan_tokens(mut self, diagnostics: &mut Diagnostics) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(scanned) = self.next() {
            // Warnings raised while skipping trivia come before this item.
            self.flush_warnings(diagnostics);
            match scanned {
                Ok(token) => {
                    trace!(kind = %token.kind, line = token.line, lexeme = %token.lexeme, "token");
                    tokens.push(token);
                }
                Err(e) => diagnostics.report(&e),
            }
        }
        self.flush_warnings(diagnostics);
        tokens.push(Token::end_of_file(self.line));
        debug!(tokens = tokens.len(), lines = self.line, "scan finished");
        tokens
    }

    fn flush_warnings(&mut self, diagnostics: &mut Diagnostics) {
        for warning in self.warnings.drain(..) {
            diagnostics.push(warning);
        }
    }

    fn scan_token(&mut self, c: char) -> Option<Result<Token>> {
        use TokenKind::*;
        match c {
            '(' => Some(Ok(self.make_token(LeftParen))),
            ')' => Some(Ok(self.make_token(RightParen))),
            '{' => Some(Ok(self.make_token(LeftBrace))),
            '}' => Some(Ok(self.make_token(RightBrace))),
            ',' => Some(Ok(self.make_token(Comma))),
            '.' => Some(Ok(self.make_token(Dot))),
            '-' => Some(Ok(self.make_token(Minus))),
            '+' => Some(Ok(self.make_token(Plus))),
            ';' => Some(Ok(self.make_token(Semicolon))),
            '*' => Some(Ok(self.make_token(Star))),
            '!' => Some(Ok(self.either('=', BangEqual, Bang))),
            '=' => Some(Ok(self.either('=', EqualEqual, Equal))),
            '<' => Some(Ok(self.either('=', LessEqual, Less))),
            '>' => Some(Ok(self.either('=', GreaterEqual, Greater))),
            '/' => {
                if self.does_next_match('/') {
                    self.advance_while(|n| n != '\n');
                    None
                } else if self.does_next_match('*') {
                    self.skip_block_comment().map(Err)
                } else {
                    Some(Ok(self.make_token(Slash)))
                }
            }
            ' ' | '\r' | '\t' => None,
            '\n' => {
                self.line += 1;
                None
            }
            '"' => Some(self.extract_string()),
            c if c.is_ascii_digit() => Some(Ok(self.extract_number())),
            c if can_start_identifier(c) => Some(Ok(self.extract_identifier())),
            c => Some(Err(Error::lexical(self.line, LexicalError::UnexpectedCharacter(c)))),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let (offset, c) = self.chars.next()?;
        self.current = offset + c.len_utf8();
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn peek_next(&mut self) -> Option<char> {
        self.chars.peek_nth(1).map(|&(_, c)| c)
    }

    fn does_next_match(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn either(&mut self, next: char, matched: TokenKind, otherwise: TokenKind) -> Token {
        let kind = if self.does_next_match(next) { matched } else { otherwise };
        self.make_token(kind)
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme(), self.line)
    }

    /// Skips to the first `*/`. Returns the error to report when input ends
    /// first.
    fn skip_block_comment(&mut self) -> Option<Error> {
        let opened_on = self.line;
        while let Some(c) = self.peek() {
            match c {
                '*' if self.peek_next() == Some('/') => {
                    self.advance();
                    self.advance();
                    return None;
                }
                '/' if self.peek_next() == Some('*') => {
                    self.warnings.push(Diagnostic::new(
                        Severity::Warning,
                        self.line,
                        "Nested block comments are not supported; the first '*/' closes the comment.",
                    ));
                    // Only the slash: the star may still start the closing `*/`.
                    self.advance();
                }
                '\n' => {
                    self.line += 1;
                    self.advance();
                }
                _ => {
                    self.advance();
                }
            }
        }
        debug!(opened_on, "block comment runs to end of input");
        Some(Error::lexical(self.line, LexicalError::UnterminatedComment))
    }

    fn extract_string(&mut self) -> Result<Token> {
        let mut newline_count = 0;
        self.advance_while_for_each(|n| n != '"', |c| if c == '\n' { newline_count += 1 });
        self.line += newline_count;

        if self.advance().is_none() {
            return Err(Error::lexical(self.line, LexicalError::UnterminatedString));
        }

        // Both quotes are one byte wide.
        let value = &self.source[self.start + 1..self.current - 1];
        Ok(Token::string(self.lexeme(), value, self.line))
    }

    fn extract_number(&mut self) -> Token {
        self.advance_while(|n| n.is_ascii_digit());

        if self.peek() == Some('.') && self.peek_next().map_or(false, |n| n.is_ascii_digit()) {
            self.advance();
            self.advance_while(|n| n.is_ascii_digit());
        }

        // Digits with an optional fraction always form a valid f64.
        let text = self.lexeme();
        Token::number(text, text.parse().unwrap_or_default(), self.line)
    }

    fn extract_identifier(&mut self) -> Token {
        self.advance_while(is_part_of_valid_identifier);

        let kind = KEYWORDS.get(self.lexeme()).copied().unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }

    fn advance_while(&mut self, keep_going: impl Fn(char) -> bool) {
        self.advance_while_for_each(keep_going, |_| {})
    }

    fn advance_while_for_each(
        &mut self,
        keep_going: impl Fn(char) -> bool,
        mut f: impl FnMut(char),
    ) {
        while let Some(next) = self.peek() {
            if !keep_going(next) {
                break;
            }
            self.advance();
            f(next);
        }
    }
}

fn can_start_identifier(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_part_of_valid_identifier(c: char) -> bool {
    can_start_identifier(c) || c.is_ascii_digit()
}
