use std::io::{self, BufReader, Bytes, Read};

use crate::error::LexicalError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Integer literal tokens, such as `42`. The value travels with the token.
    Num(i64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multi,
    /// `/`
    Div,
    /// `(`
    Open,
    /// `)`
    Close,
    /// `;`
    Break,
    /// `|`
    Abs,
    /// `^`
    Expo,
    /// `.`
    Stop,
    /// End of input.
    Eof,
}

impl Token {
    /// Maps a single punctuation character to its token.
    ///
    /// Returns `None` for every character that is not a one-character token.
    ///
    /// # Example
    /// ```
    /// use simcalc::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::from_punctuation('^'), Some(Token::Expo));
    /// assert_eq!(Token::from_punctuation('&'), None);
    /// ```
    #[must_use]
    pub const fn from_punctuation(c: char) -> Option<Self> {
        Some(match c {
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Multi,
            '/' => Self::Div,
            '(' => Self::Open,
            ')' => Self::Close,
            ';' => Self::Break,
            '|' => Self::Abs,
            '^' => Self::Expo,
            '.' => Self::Stop,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Num(_) => "integer",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multi => "*",
            Self::Div => "/",
            Self::Open => "(",
            Self::Close => ")",
            Self::Break => ";",
            Self::Abs => "|",
            Self::Expo => "^",
            Self::Stop => ".",
            Self::Eof => "eof",
        };
        write!(f, "{name}")
    }
}

/// Streaming tokenizer over any byte source.
///
/// Bytes are decoded as UTF-8 one character at a time. The lexer keeps a
/// single character of pushback, which is only needed to hand back the
/// character that terminated an integer literal.
pub struct Lexer<R: Read> {
    bytes:    Bytes<BufReader<R>>,
    pushback: Option<char>,
    finished: bool,
}

impl<R: Read> Lexer<R> {
    /// Creates a lexer reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self { bytes:    BufReader::new(reader).bytes(),
               pushback: None,
               finished: false, }
    }

    /// Returns the next token, consuming exactly the characters that form it.
    ///
    /// Whitespace is skipped. At the end of input `Token::Eof` is returned,
    /// and keeps being returned on every later call.
    ///
    /// # Errors
    /// - `InvalidCharacter` for any character that does not start a token.
    /// - `LiteralTooLarge` for a digit run that overflows `i64`.
    /// - `Io` when the underlying reader fails.
    ///
    /// # Example
    /// ```
    /// use simcalc::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("12+3".as_bytes());
    /// assert_eq!(lexer.next_token().unwrap(), Token::Num(12));
    /// assert_eq!(lexer.next_token().unwrap(), Token::Plus);
    /// assert_eq!(lexer.next_token().unwrap(), Token::Num(3));
    /// assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    /// ```
    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        let token = self.scan()?;
        log::trace!("lexed token {token:?}");
        Ok(token)
    }

    fn scan(&mut self) -> Result<Token, LexicalError> {
        loop {
            let Some(c) = self.read_char()? else {
                return Ok(Token::Eof);
            };

            if c.is_whitespace() {
                continue;
            }
            if c.is_ascii_digit() {
                return self.scan_number(c);
            }
            return Token::from_punctuation(c).ok_or(LexicalError::InvalidCharacter { character: c });
        }
    }

    /// Consumes the maximal digit run starting with `first`.
    fn scan_number(&mut self, first: char) -> Result<Token, LexicalError> {
        let mut lexeme = String::from(first);
        while let Some(c) = self.read_char()? {
            if c.is_ascii_digit() {
                lexeme.push(c);
            } else {
                self.unread(c);
                break;
            }
        }

        lexeme.parse()
              .map(Token::Num)
              .map_err(|_| LexicalError::LiteralTooLarge { literal: lexeme })
    }

    fn unread(&mut self, c: char) {
        debug_assert!(self.pushback.is_none(), "pushback slot already occupied");
        self.pushback = Some(c);
    }

    /// Reads one character, honouring the pushback slot.
    ///
    /// Malformed UTF-8 decodes to `char::REPLACEMENT_CHARACTER`.
    fn read_char(&mut self) -> Result<Option<char>, LexicalError> {
        if let Some(c) = self.pushback.take() {
            return Ok(Some(c));
        }
        if self.finished {
            return Ok(None);
        }

        let Some(lead) = self.read_byte()? else {
            self.finished = true;
            return Ok(None);
        };
        if lead.is_ascii() {
            return Ok(Some(char::from(lead)));
        }

        let width = match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
        };
        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            match self.read_byte()? {
                Some(b) => *slot = b,
                None => {
                    self.finished = true;
                    return Ok(Some(char::REPLACEMENT_CHARACTER));
                },
            }
        }

        Ok(Some(std::str::from_utf8(&buf[..width]).ok()
                                                  .and_then(|s| s.chars().next())
                                                  .unwrap_or(char::REPLACEMENT_CHARACTER)))
    }

    fn read_byte(&mut self) -> Result<Option<u8>, LexicalError> {
        loop {
            match self.bytes.next() {
                Some(Ok(b)) => return Ok(Some(b)),
                Some(Err(e)) if e.kind() == io::ErrorKind::Interrupted => {},
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(None),
            }
        }
    }
}

/// Yields every token before `Token::Eof`, stopping after the first error.
impl<R: Read> Iterator for Lexer<R> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished && self.pushback.is_none() {
            return None;
        }
        match self.next_token() {
            Ok(Token::Eof) => None,
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.finished = true;
                self.pushback = None;
                Some(Err(e))
            },
        }
    }
}
