#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[macro_use]
extern crate thiserror;

mod configuration;

use std::{
    fs::File,
    io::{BufReader, Write},
};

use anyhow::Context;
use configuration::DemoConfiguration;
use fallible_iterator::FallibleIterator;
use lazyseq::{
    iterator::io::buf::{ReadLines, ReadStdinLines},
    prelude::*,
};
use tracing_subscriber::EnvFilter;

type Lines = Box<dyn FallibleIterator<Item = (usize, Box<str>), Error = anyhow::Error>>;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let configuration = DemoConfiguration::from_args(std::env::args().skip(1))?;
    tracing::debug!(?configuration, "configuration loaded");

    let lines = pipeline(open(&configuration)?, &configuration);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match (configuration.chunk, configuration.keys) {
        (Some(chunk_size), true) => {
            print_chunks(chunk(lines, chunk_size, SourceKeys)?, &mut out)
        }
        (Some(chunk_size), false) => {
            print_chunks(chunk(lines, chunk_size, Ordinal::new())?, &mut out)
        }
        (None, _) => print_lines(lines, &mut out),
    }
}

fn open(configuration: &DemoConfiguration) -> anyhow::Result<Lines> {
    Ok(match &configuration.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Could not open {}", path.display()))?;
            Box::new(ReadLines::new(BufReader::new(file)).map_err(anyhow::Error::from))
        }
        None => Box::new(ReadStdinLines::new().map_err(anyhow::Error::from)),
    })
}

fn pipeline(mut lines: Lines, configuration: &DemoConfiguration) -> Lines {
    let keys = configuration.keys;
    if let Some(count) = configuration.skip {
        lines = if keys {
            Box::new(skip(lines, count, SourceKeys))
        } else {
            Box::new(skip(lines, count, Ordinal::new()))
        };
    }
    if let Some(pattern) = configuration.grep.clone() {
        let predicate = move |line: &Box<str>, _: &usize| Ok(line.contains(pattern.as_str()));
        lines = if keys {
            Box::new(filter(lines, predicate, SourceKeys))
        } else {
            Box::new(filter(lines, predicate, Ordinal::new()))
        };
    }
    if configuration.upper {
        let transform = |line: Box<str>, _: &usize| Ok(line.to_uppercase().into_boxed_str());
        lines = if keys {
            Box::new(map(lines, transform, SourceKeys))
        } else {
            Box::new(map(lines, transform, Ordinal::new()))
        };
    }
    if let Some(count) = configuration.head {
        lines = if keys {
            Box::new(head(lines, count, SourceKeys))
        } else {
            Box::new(head(lines, count, Ordinal::new()))
        };
    }
    if let Some(count) = configuration.tail {
        lines = if keys {
            Box::new(tail(lines, count, SourceKeys))
        } else {
            Box::new(tail(lines, count, Ordinal::new()))
        };
    }
    lines
}

fn print_lines<W: Write>(mut lines: Lines, out: &mut W) -> anyhow::Result<()> {
    while let Some((key, line)) = lines.next()? {
        writeln!(out, "{}\t{}", key, line)?;
    }
    Ok(())
}

fn print_chunks<P, W>(mut chunks: Chunks<Lines, P>, out: &mut W) -> anyhow::Result<()>
where
    P: KeyPolicy<usize, Box<str>, Key = usize, Value = Box<str>> + Clone,
    W: Write,
{
    while let Some((index, chunk)) = chunks.next()? {
        let items = entries(chunk)?;
        tracing::debug!(index, len = items.len(), "chunk read");
        write!(out, "{}:", index)?;
        for (key, line) in items {
            write!(out, " [{}] {}", key, line)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
