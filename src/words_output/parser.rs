use anyhow::{bail, Result};

use crate::words_output::{
    expansion_parser::parse_expansion,
    parser_helper::{DefinitionList, ParsedWordsOutput},
    possibility_parser::parse_possibility,
};

// The engine closes an entry with a bare '*' when it dropped further
// unlikely analyses.
const TRUNCATION_MARKER: &str = "*";

// Printed when the lookup failed entirely.
const UNKNOWN_BANNER: &str = "========   UNKNOWN    ========";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    // Any unclassifiable line fails the whole parse.
    Strict,
    // Unclassifiable lines pass through verbatim as Text items.
    Permissive,
}

// Line-grouping state machine: classifies each line as analysis, expansion,
// gloss, marker or unknown, and assembles the definitions. Feed lines with
// `consume_line`, then call `finish` for the end-of-input flush.
pub struct WordsOutputParser {
    mode: ParseMode,
    list: DefinitionList,
    truncated: bool,
}

impl WordsOutputParser {
    pub fn new(mode: ParseMode) -> Self {
        WordsOutputParser {
            mode,
            list: DefinitionList::new(),
            truncated: false,
        }
    }

    pub fn consume_line(&mut self, line: &str) -> Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        if let Some(possibility) = parse_possibility(line) {
            self.list.push_possibility(possibility);
            return Ok(());
        }

        if let Some(expansion) = parse_expansion(line) {
            self.list.push_expansion(expansion);
            return Ok(());
        }

        if self.list.inside_definition() {
            let trimmed = line.trim();
            if trimmed == TRUNCATION_MARKER {
                self.truncated = true;
                self.list.flush_definition();
            } else if trimmed == UNKNOWN_BANNER {
                self.list.flush_definition();
                self.list.push_text(line.to_owned());
            } else {
                self.list.push_meaning_line(line);
            }
            return Ok(());
        }

        match self.mode {
            ParseMode::Strict => bail!("Unclassified line: {:?}", line),
            ParseMode::Permissive => {
                self.list.push_text(line.to_owned());
                Ok(())
            }
        }
    }

    pub fn finish(self) -> ParsedWordsOutput {
        ParsedWordsOutput {
            items: self.list.collect_to_vec(),
            truncated: self.truncated,
        }
    }
}

// One captured engine response, LF or CRLF delimited.
pub fn parse_words_output(text: &str, mode: ParseMode) -> Result<ParsedWordsOutput> {
    let mut parser = WordsOutputParser::new(mode);
    for line in text.lines() {
        parser.consume_line(line)?;
    }
    Ok(parser.finish())
}
