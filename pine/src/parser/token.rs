use std::fmt::Display;
use std::fmt::Formatter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Markers
    Eof,

    // Literals
    /// 42
    Number,

    // Identifiers
    /// foo
    Identifier,

    // Keywords
    /// module
    KwModule,
    /// var
    KwVar,

    // Punctuation
    /// ;
    Semicolon,
    /// +
    Plus,
    /// -
    Minus,
    /// =
    Equal,
    /// {
    LBrace,
    /// }
    RBrace,
}

impl TokenKind {
    /// Short name used by [Token::describe] and in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Number => "number",
            TokenKind::Identifier => "id",
            TokenKind::KwModule => "module",
            TokenKind::KwVar => "var",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Equal => "equals",
            TokenKind::LBrace => "lbrace",
            TokenKind::RBrace => "rbrace",
        }
    }
    /// Map a scanned word to its keyword kind, if it is one.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "module" => Some(TokenKind::KwModule),
            "var" => Some(TokenKind::KwVar),
            _ => None,
        }
    }
    /// Whether tokens of this kind carry source text worth printing.
    pub fn has_payload(&self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Identifier)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// The line number of the token.
    line: usize,
    /// The column number of the token.
    column: usize,
    /// The character location in the raw source string.
    start: usize,
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "loc(:{}:{})", self.line, self.column)
    }
}

impl Location {
    pub fn new(line: usize, column: usize, start: usize) -> Self {
        Self {
            line,
            column,
            start,
        }
    }
    pub fn line(&self) -> usize {
        self.line
    }
    pub fn column(&self) -> usize {
        self.column
    }
    pub fn start(&self) -> usize {
        self.start
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The kind of token, such as `x` (Identifier) or `42` (Number).
    pub kind: TokenKind,
    /// The lexeme of the token, such as `x` (Identifier) or `;` (Semicolon).
    pub lexeme: String,
    pub location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, location: Location) -> Self {
        Self {
            kind,
            lexeme,
            location,
        }
    }
    pub fn line(&self) -> usize {
        self.location.line()
    }
    pub fn column(&self) -> usize {
        self.location.column()
    }
    /// The literal spelling for numbers and identifiers.
    ///
    /// Keywords and punctuation have a fixed spelling, so they carry no
    /// payload.
    pub fn payload(&self) -> Option<&str> {
        if self.kind.has_payload() {
            Some(&self.lexeme)
        } else {
            None
        }
    }
    /// Debug description such as `{number: 42}` or `{semicolon: }`.
    pub fn describe(&self) -> String {
        format!("{{{}: {}}}", self.kind.name(), self.payload().unwrap_or(""))
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} \"{}\" {}", self.kind, self.lexeme, self.location)
    }
}
