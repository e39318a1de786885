pub trait Source {
    fn name_str(&self) -> &str;
    fn source_str(&self) -> &str;
}

impl Source for (String, String) {
    fn name_str(&self) -> &str {
        &self.0
    }

    fn source_str(&self) -> &str {
        &self.1
    }
}

/// A script together with the byte offsets of its line breaks.
#[derive(Debug)]
pub struct Cached<S: Source> {
    source: S,
    line_breaks: Vec<usize>,
}

impl<S: Source> Cached<S> {
    pub fn new(source: S) -> Self {
        let line_breaks = source
            .source_str()
            .match_indices('\n')
            .map(|(i, _)| i)
            .collect();

        Self {
            source,
            line_breaks,
        }
    }

    pub fn as_source(&self) -> &S {
        &self.source
    }

    /// One-based line and column of a byte offset.
    pub fn byte_to_line_col(&self, byte: usize) -> Option<(usize, usize)> {
        let line = self.byte_to_line_index(byte)?;
        let col = byte - self.line_to_byte(line)?;

        Some((line + 1, col + 1))
    }

    pub fn byte_to_line_index(&self, byte: usize) -> Option<usize> {
        if byte > self.source_str().len() {
            return None;
        }

        match self.line_breaks.binary_search(&byte) {
            Ok(line) | Err(line) => Some(line),
        }
    }

    pub fn line_to_byte(&self, line: usize) -> Option<usize> {
        match line {
            0 => Some(0),
            _ => self.line_breaks.get(line - 1).map(|&byte| byte + 1),
        }
    }

    pub fn line_str(&self, index: usize) -> Option<&str> {
        let start = self.line_to_byte(index)?;
        let end = self
            .line_breaks
            .get(index)
            .copied()
            .unwrap_or(self.source_str().len());

        let s = &self.source_str()[start..end];
        Some(s.strip_suffix('\r').unwrap_or(s))
    }

    pub fn num_lines(&self) -> usize {
        1 + self.line_breaks.len()
    }
}

impl<S: Source> Source for Cached<S> {
    fn name_str(&self) -> &str {
        self.source.name_str()
    }

    fn source_str(&self) -> &str {
        self.source.source_str()
    }
}

#[cfg(test)]
mod tests {
    use super::Cached;

    fn cached_str(s: impl Into<String>) -> Cached<(String, String)> {
        Cached::new(("script".to_owned(), s.into()))
    }

    #[test]
    fn line_col() {
        let cached = cached_str("");
        assert_eq!(cached.byte_to_line_col(0), Some((1, 1)));
        assert_eq!(cached.byte_to_line_col(1), None);

        let cached = cached_str("function f() {\n  var x = 1;\n}");
        assert_eq!(cached.byte_to_line_col(0), Some((1, 1)));
        assert_eq!(cached.byte_to_line_col(14), Some((1, 15)));
        assert_eq!(cached.byte_to_line_col(17), Some((2, 3)));
        assert_eq!(cached.byte_to_line_col(28), Some((3, 1)));
    }

    #[test]
    fn line_str() {
        let cached = cached_str("a\r\nbc\n");
        assert_eq!(cached.num_lines(), 3);
        assert_eq!(cached.line_str(0), Some("a"));
        assert_eq!(cached.line_str(1), Some("bc"));
        assert_eq!(cached.line_str(2), Some(""));
        assert_eq!(cached.line_str(3), None);
    }
}
