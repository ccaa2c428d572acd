use crate::parser::error::UnrecognizedCharacter;
use crate::parser::token::Location;
use crate::parser::token::Token;
use crate::parser::token::TokenKind;
use anyhow::Result;
use std::collections::VecDeque;
use tracing::trace;

/// Lazy tokenizer over an in-memory source buffer.
///
/// Tokens are only scanned when asked for. Tokens that were scanned by
/// [Scanner::peek_token], [Scanner::peek_nth] or [Scanner::peek_until] wait
/// in a FIFO queue and are handed out by [Scanner::next_token] before any new
/// input is read.
pub struct Scanner {
    source: Vec<char>,
    lookahead: VecDeque<Token>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            lookahead: VecDeque::new(),
            start: 0,
            current: 0,
            line: 0,
            column: 0,
        }
    }
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
    fn advance(&mut self) -> char {
        let c = self.peek();
        self.current += 1;
        self.column += 1;
        c
    }
    fn peek(&self) -> char {
        match self.source.get(self.current) {
            Some(c) => *c,
            None => '\0',
        }
    }
    fn location(&self) -> Location {
        Location::new(self.line, self.column, self.current)
    }
    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek().is_whitespace() {
            if self.advance() == '\n' {
                self.line += 1;
                self.column = 0;
            }
        }
    }
    // Whether the character can be part of an identifier or keyword.
    fn is_identifier(c: char) -> bool {
        c.is_alphabetic() || c == '_'
    }
    fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }
    fn number(&mut self) -> TokenKind {
        while Scanner::is_digit(self.peek()) {
            self.advance();
        }
        TokenKind::Number
    }
    // Scan identifiers and keywords.
    fn identifier(&mut self) -> TokenKind {
        while Scanner::is_identifier(self.peek()) {
            self.advance();
        }
        let word = self.lexeme();
        TokenKind::keyword(&word).unwrap_or(TokenKind::Identifier)
    }
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }
    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }
    /// Scan one token from the raw input, ignoring the lookahead queue.
    ///
    /// On failure the cursor stays on the offending character.
    fn scan_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        self.start = self.current;
        let location = self.location();
        if self.is_at_end() {
            return Ok(Token::new(TokenKind::Eof, "".to_string(), location));
        }
        let kind = match self.peek() {
            ';' => self.single(TokenKind::Semicolon),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '=' => self.single(TokenKind::Equal),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            c if Scanner::is_digit(c) => self.number(),
            c if Scanner::is_identifier(c) => self.identifier(),
            character => {
                return Err(anyhow::Error::new(UnrecognizedCharacter {
                    character,
                    location,
                }));
            }
        };
        let token = Token::new(kind, self.lexeme(), location);
        trace!("scanned {token}");
        Ok(token)
    }
    /// Consume and return the next token.
    ///
    /// Once the input is exhausted, every call returns a new
    /// [TokenKind::Eof] token.
    pub fn next_token(&mut self) -> Result<Token> {
        match self.lookahead.pop_front() {
            Some(token) => Ok(token),
            None => self.scan_token(),
        }
    }
    /// Make sure at least `n` tokens wait in the lookahead queue.
    fn buffer(&mut self, n: usize) -> Result<()> {
        while self.lookahead.len() < n {
            let token = self.scan_token()?;
            self.lookahead.push_back(token);
        }
        Ok(())
    }
    /// Return the next token without consuming it.
    pub fn peek_token(&mut self) -> Result<&Token> {
        self.peek_nth(0)
    }
    /// Return the token `n` positions after the next one without consuming
    /// anything. Only the tokens up to that position are scanned.
    pub fn peek_nth(&mut self, n: usize) -> Result<&Token> {
        self.buffer(n + 1)?;
        Ok(&self.lookahead[n])
    }
    /// Buffer tokens until one of the `stop` kinds (or the end of the input)
    /// shows up and return everything up to and including it.
    ///
    /// Nothing is consumed; the returned tokens are replayed by
    /// [Scanner::next_token].
    pub fn peek_until(&mut self, stop: &[TokenKind]) -> Result<&[Token]> {
        let mut seen = 0;
        loop {
            self.buffer(seen + 1)?;
            let kind = self.lookahead[seen].kind;
            seen += 1;
            if kind == TokenKind::Eof || stop.contains(&kind) {
                break;
            }
        }
        Ok(&self.lookahead.make_contiguous()[..seen])
    }
    /// Scan the whole source, including the final [TokenKind::Eof].
    pub fn scan(src: &str) -> Result<Vec<Token>> {
        let mut scanner = Scanner::new(src);
        let mut tokens = vec![];
        loop {
            let token = scanner.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
    pub fn error(src: &str, loc: &Location, msg: &str) -> String {
        let lines = src.split('\n').collect::<Vec<&str>>();
        let n = loc.line();
        let prev_line = if n > 0 {
            let prev_n = n - 1;
            let prev = lines.get(prev_n).unwrap_or(&"");
            format!("\n{prev_n}  | {prev}")
        } else {
            "".to_string()
        };
        let line = lines.get(n).unwrap_or(&"");
        let line_num_width = 4 + n.to_string().len();
        let err_indent = " ".repeat(loc.column() + line_num_width);
        format!("```{prev_line}\n{n}  | {line}\n{err_indent}^ {msg}\n```")
    }
}
