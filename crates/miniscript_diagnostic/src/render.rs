use std::io;

use termcolor::WriteColor;
use unicode_width::UnicodeWidthStr;

use super::sources::{Cached, Source};
use super::{Config, Diagnostic, Snippet};

const TAB: &str = "    ";

impl Diagnostic {
    pub fn write_to_stream<S: Source>(
        &self,
        source: &Cached<S>,
        config: &Config,
        stream: &mut impl WriteColor,
    ) -> io::Result<()> {
        DiagnosticWriter {
            diagnostic: self,
            source,
            stream,
            config,
        }
        .draw_all()
    }
}

struct DiagnosticWriter<'stream, 'a, W: WriteColor, S: Source> {
    diagnostic: &'a Diagnostic,
    source: &'a Cached<S>,

    stream: &'stream mut W,
    config: &'a Config,
}

impl<W: WriteColor, S: Source> DiagnosticWriter<'_, '_, W, S> {
    fn draw_all(mut self) -> io::Result<()> {
        self.draw_header()?;

        let diagnostic = self.diagnostic;
        for snippet in &diagnostic.snippets {
            self.draw_snippet(snippet)?;
        }

        writeln!(self.stream)
    }

    fn draw_header(&mut self) -> io::Result<()> {
        self.stream.set_color(&self.config.error_color)?;
        write!(self.stream, "Error:")?;
        self.stream.reset()?;

        match &self.diagnostic.message {
            Some(message) => writeln!(self.stream, " {message}"),
            None => writeln!(self.stream),
        }
    }

    fn draw_snippet(&mut self, snippet: &Snippet) -> io::Result<()> {
        let source = self.source;

        // spans past the end of input are clamped onto it
        let start = snippet.span.start.min(source.source_str().len());

        let Some(line) = source.byte_to_line_index(start) else {
            return Ok(());
        };
        let (line_num, col_num) = source.byte_to_line_col(start).unwrap_or((line + 1, 1));

        self.stream.set_color(&self.config.subtle)?;
        writeln!(self.stream, "In {}:{line_num}:{col_num}", source.name_str())?;
        self.stream.reset()?;

        let line_num_width = line_num.to_string().len();
        let line_start = source.line_to_byte(line).unwrap_or(0);
        let line_str = source.line_str(line).unwrap_or_default();

        self.draw_gutter(Some(line_num), line_num_width)?;
        writeln!(self.stream, "{}", line_str.replace('\t', TAB))?;

        self.draw_gutter(None, line_num_width)?;

        let before = &source.source_str()[line_start..start];
        let offset = str_width(before);

        // only the part of the snippet on its first line is underlined
        let line_end = line_start + line_str.len();
        let underline_len = snippet.span.end.min(line_end).saturating_sub(start).max(1);

        self.stream.set_color(&self.config.error_color)?;
        write!(self.stream, "{:<offset$}", "")?;
        for _ in 0..underline_len {
            write!(self.stream, "{}", self.config.underline)?;
        }
        writeln!(
            self.stream,
            "{}{}",
            self.config.underline_after, snippet.label
        )?;
        self.stream.reset()?;

        Ok(())
    }

    fn draw_gutter(&mut self, line: Option<usize>, line_num_width: usize) -> io::Result<()> {
        self.stream.set_color(&self.config.subtle)?;

        match line {
            Some(line) => write!(self.stream, "{line:>line_num_width$}")?,
            None => write!(self.stream, "{:>line_num_width$}", "")?,
        }
        write!(self.stream, " {} ", self.config.gutter)?;

        self.stream.reset()
    }
}

fn str_width(s: &str) -> usize {
    s.split('\t').map(UnicodeWidthStr::width).sum::<usize>() + s.matches('\t').count() * TAB.len()
}
