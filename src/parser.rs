// src/parser.rs
//! Decodes one deck file into zero or more [`Deck`] records.
//!
//! A file holds either a single deck object or a JSON array of deck objects.
//! The array form is decoded element by element straight off the reader, so
//! the raw file text is never fully buffered. Either way, any decode error
//! aborts the whole file: partially decoded decks from a broken file are
//! discarded rather than returned.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::de::{SeqAccess, Visitor};
use serde::Deserializer as _;

use crate::error::{DeckstatError, Result};
use crate::model::Deck;

/// Parses a deck file, accepting both the single-object and the array form.
///
/// # Errors
///
/// Returns `Io` if the file cannot be opened and `Parse` if its content is
/// malformed or does not match the deck shape.
pub fn parse_file(path: &Path) -> Result<Vec<Deck>> {
    let file = File::open(path).map_err(|e| DeckstatError::io(e, path))?;
    let mut reader = BufReader::new(file);

    match peek_token(&mut reader, path)? {
        b'[' => parse_array(reader, path),
        _ => {
            let deck = decode_one(reader, path)?;
            Ok(vec![deck])
        }
    }
}

/// Parses a file known to contain exactly one deck object.
///
/// Convenience variant of [`parse_file`] for callers that know the shape in
/// advance; an array input is rejected instead of being unwrapped.
///
/// # Errors
///
/// Returns `Io` on open failures and `Parse` on malformed input or when the
/// file turns out to hold an array.
pub fn parse_single_file(path: &Path) -> Result<Deck> {
    let file = File::open(path).map_err(|e| DeckstatError::io(e, path))?;
    let mut reader = BufReader::new(file);

    if peek_token(&mut reader, path)? == b'[' {
        return Err(DeckstatError::parse(
            path,
            "expected a single deck object, found an array",
        ));
    }
    decode_one(reader, path)
}

fn decode_one<R: io::Read>(reader: R, path: &Path) -> Result<Deck> {
    serde_json::from_reader(reader).map_err(|e| DeckstatError::parse(path, e.to_string()))
}

fn parse_array<R: io::Read>(reader: R, path: &Path) -> Result<Vec<Deck>> {
    let mut de = serde_json::Deserializer::from_reader(reader);
    let decks = de
        .deserialize_seq(DeckSeqVisitor)
        .map_err(|e| DeckstatError::parse(path, e.to_string()))?;
    // Reject trailing garbage after the closing bracket.
    de.end()
        .map_err(|e| DeckstatError::parse(path, e.to_string()))?;
    Ok(decks)
}

/// Collects array elements one at a time; each deck is fully decoded and
/// moved into the result before the next element is touched.
struct DeckSeqVisitor;

impl<'de> Visitor<'de> for DeckSeqVisitor {
    type Value = Vec<Deck>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array of deck objects")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut decks = Vec::new();
        while let Some(deck) = seq.next_element::<Deck>()? {
            decks.push(deck);
        }
        Ok(decks)
    }
}

/// Returns the first non-whitespace byte without consuming it.
fn peek_token<R: BufRead>(reader: &mut R, path: &Path) -> Result<u8> {
    loop {
        let buf = reader
            .fill_buf()
            .map_err(|e| DeckstatError::io(e, path))?;
        if buf.is_empty() {
            return Err(DeckstatError::parse(path, "empty input"));
        }
        match buf.iter().position(|b| !b" \t\r\n".contains(b)) {
            Some(i) => {
                let byte = buf[i];
                reader.consume(i);
                return Ok(byte);
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}
