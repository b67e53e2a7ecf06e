use std::io::{BufRead, Stdin, StdinLock};

use fallible_iterator::FallibleIterator;

/// Reads a buffer and streams one entry per line, keyed by 0-based line
/// number, `'0x0a'` trimmed from the end.
#[derive(new)]
pub struct ReadLines<I: BufRead> {
    input: I,
    #[new(default)]
    buffer: String,
    #[new(default)]
    line: usize,
}

impl<I: BufRead> FallibleIterator for ReadLines<I> {
    type Item = (usize, Box<str>);
    type Error = std::io::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        read_line(&mut self.input, &mut self.buffer, &mut self.line)
    }
}

lazy_static! {
    static ref STDIN: Stdin = std::io::stdin();
}

/// Same as [`ReadLines`] over the locked standard input.
#[derive(new)]
pub struct ReadStdinLines {
    #[new(value = "STDIN.lock()")]
    stdin_lock: StdinLock<'static>,
    #[new(default)]
    buffer: String,
    #[new(default)]
    line: usize,
}

impl FallibleIterator for ReadStdinLines {
    type Item = (usize, Box<str>);
    type Error = std::io::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        read_line(&mut self.stdin_lock, &mut self.buffer, &mut self.line)
    }
}

fn read_line<R: BufRead>(
    input: &mut R,
    buffer: &mut String,
    line: &mut usize,
) -> Result<Option<(usize, Box<str>)>, std::io::Error> {
    buffer.clear();
    let read = input.read_line(buffer)?;
    if read > 0 {
        let value = std::mem::take(buffer);
        let value = value.trim_end_matches('\n');
        let key = *line;
        *line += 1;
        Ok(Some((key, value.into())))
    } else {
        Ok(None)
    }
}
