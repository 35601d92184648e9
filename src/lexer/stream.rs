use thiserror::Error;

/// Signals that the stream has no character at the requested position.
///
/// Running off the end is the normal way a lex finishes, so callers usually
/// treat this as a stop signal rather than a failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("end of input")]
pub struct EndOfInput;

/// Position snapshot taken when a scanner begins a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStart {
    pub index: usize,
    pub line: usize,
    pub first: char,
}

/// Owns the source text and a forward-only cursor over its characters.
///
/// The cursor points at the most recently consumed character. Before the
/// first `advance_next` it sits before the first character.
#[derive(Debug, Clone)]
pub struct CharStream {
    source: String,
    chars: Vec<(usize, char)>,
    consumed: usize,
    line: usize,
}

impl CharStream {
    pub fn new(source: impl Into<String>) -> CharStream {
        let source = source.into();
        let chars = source.char_indices().collect();

        CharStream {
            source,
            chars,
            consumed: 0,
            line: 1,
        }
    }

    pub fn advance_next(&mut self) -> Result<char, EndOfInput> {
        let (_, c) = *self.chars.get(self.consumed).ok_or(EndOfInput)?;
        self.consumed += 1;

        if c == '\n' {
            self.line += 1;
        }

        Ok(c)
    }

    /// Character at `offset` from the current one. `peek(0)` is the current
    /// character, `peek(1)` the next unconsumed one.
    pub fn peek(&self, offset: isize) -> Result<char, EndOfInput> {
        self.position(offset)
            .and_then(|pos| self.chars.get(pos))
            .map(|(_, c)| *c)
            .ok_or(EndOfInput)
    }

    /// Byte offset of the current character.
    pub fn current_index(&self) -> Option<usize> {
        self.position(0)
            .and_then(|pos| self.chars.get(pos))
            .map(|(index, _)| *index)
    }

    /// Inclusive byte offset of the last byte of the current character.
    pub fn end_index(&self) -> Option<usize> {
        self.position(0)
            .and_then(|pos| self.chars.get(pos))
            .map(|(index, c)| index + c.len_utf8() - 1)
    }

    pub fn line_number(&self) -> usize {
        self.line
    }

    pub fn start_token(&self) -> Result<TokenStart, EndOfInput> {
        let pos = self.position(0).ok_or(EndOfInput)?;
        let (index, first) = *self.chars.get(pos).ok_or(EndOfInput)?;

        Ok(TokenStart {
            index,
            line: self.line,
            first,
        })
    }

    /// The current character plus the following `width - 1`, or `None` when
    /// fewer than `width` characters remain from the cursor.
    pub fn window(&self, width: usize) -> Option<&str> {
        if width == 0 {
            return None;
        }

        let first = self.position(0)?;
        let last = first + width - 1;
        let (start, _) = *self.chars.get(first)?;
        let (index, c) = *self.chars.get(last)?;

        Some(&self.source[start..index + c.len_utf8()])
    }

    pub fn is_finished(&self) -> bool {
        self.consumed >= self.chars.len()
    }

    fn position(&self, offset: isize) -> Option<usize> {
        let pos = self.consumed as isize - 1 + offset;
        usize::try_from(pos).ok()
    }
}
