//! Loaders supplying patterns and texts to an [`Automaton`](crate::Automaton).
//!
//! These are plain I/O adapters; they hand the automaton in-memory strings and
//! leave all matching semantics to it.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::errors::{Result, RunetrieError};

/// Reads a dictionary with one pattern per line.
///
/// Surrounding whitespace is trimmed from each line. Blank lines are kept as
/// empty patterns so that the index of a pattern is its 0-based line number.
///
/// # Errors
///
/// [`RunetrieError`] is returned when reading fails or a line is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use runetrie::dictionary::load_dictionary;
///
/// let dict = load_dictionary("  apple\n\nбанан \r\n".as_bytes()).unwrap();
/// assert_eq!(vec!["apple", "", "банан"], dict);
/// ```
pub fn load_dictionary<R>(mut rdr: R) -> Result<Vec<String>>
where
    R: BufRead,
{
    let mut patterns = vec![];
    let mut buf = vec![];
    loop {
        buf.clear();
        if rdr.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = std::str::from_utf8(&buf)
            .map_err(|_| RunetrieError::invalid_utf8(Some(patterns.len() + 1)))?;
        patterns.push(line.trim().to_string());
    }
    Ok(patterns)
}

/// Reads a dictionary file. See [`load_dictionary`].
///
/// # Errors
///
/// [`RunetrieError`] is returned when the file cannot be read or a line is not valid UTF-8.
pub fn load_dictionary_file<P>(path: P) -> Result<Vec<String>>
where
    P: AsRef<Path>,
{
    load_dictionary(BufReader::new(File::open(path)?))
}

/// Reads a whole text blob.
///
/// # Errors
///
/// [`RunetrieError`] is returned when reading fails or the text is not valid UTF-8.
pub fn load_text<R>(mut rdr: R) -> Result<String>
where
    R: Read,
{
    let mut buf = vec![];
    rdr.read_to_end(&mut buf)?;
    String::from_utf8(buf).map_err(|_| RunetrieError::invalid_utf8(None))
}

/// Reads a whole text file. See [`load_text`].
///
/// # Errors
///
/// [`RunetrieError`] is returned when the file cannot be read or is not valid UTF-8.
pub fn load_text_file<P>(path: P) -> Result<String>
where
    P: AsRef<Path>,
{
    load_text(File::open(path)?)
}
