// Parsing of captured output from Whitaker's WORDS (the "words" command-line
// dictionary engine), one query's stdout at a time.
//
// The format is line-based and column-aligned:
// - analysis lines: inflected form left-aligned in a 21-column field, a
//   part-of-speech tag, then fixed-width grammatical fields separated by one
//   blank column each
// - expansion lines: dictionary headword (principal parts), split from the
//   part-of-speech tag by the first run of two consecutive spaces
// - every other line inside an entry is gloss text; a bare '*' means the
//   engine dropped further unlikely analyses, "========   UNKNOWN    ========"
//   means the lookup failed
//
// Absent values still occupy their full slot ('X' or blanks); consuming a
// slot at the wrong width shifts every later field on the line.

pub mod expansion_parser;
pub mod grammar;
pub mod parser;
pub mod parser_helper;
pub mod possibility_parser;
mod scanner;
