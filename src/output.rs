//! Word list rendering and output destinations.

use crate::error::Result;
use crate::text::WordSet;
use std::io::Write;
use std::path::PathBuf;

/// Renders a word set as a comma-space separated list, in sorted order.
pub fn format_wordlist(words: &WordSet) -> String {
    words
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Where the rendered word list goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Print to standard output.
    Stdout,
    /// Write (and overwrite) a file.
    File(PathBuf),
}

impl OutputSink {
    /// Chooses a file sink when a path is given, stdout otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(OutputSink::Stdout, OutputSink::File)
    }

    /// Writes the rendered word list followed by a newline.
    pub fn write(&self, words: &WordSet) -> Result<()> {
        let line = format_wordlist(words);
        match self {
            OutputSink::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", line)?;
            }
            OutputSink::File(path) => {
                let mut file = std::fs::File::create(path)?;
                writeln!(file, "{}", line)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> WordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_format_sorted() {
        assert_eq!(format_wordlist(&set(&["jumps", "brown", "quick"])), "brown, jumps, quick");
    }

    #[test]
    fn test_format_single_and_empty() {
        assert_eq!(format_wordlist(&set(&["solo"])), "solo");
        assert_eq!(format_wordlist(&WordSet::new()), "");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(OutputSink::from_path(None), OutputSink::Stdout);
        assert_eq!(
            OutputSink::from_path(Some(PathBuf::from("out.txt"))),
            OutputSink::File(PathBuf::from("out.txt"))
        );
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");

        OutputSink::File(path.clone()).write(&set(&["house", "apple"])).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "apple, house\n");
    }
}
