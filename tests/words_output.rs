use std::fs;

use anyhow::Result;

use whitakers_json::words_output::{
    expansion_parser::{parse_expansion, Expansion},
    grammar::{Case, Conjugation, Declension, Degree, Gender, Mood, Number, Tense},
    parser::{parse_words_output, ParseMode, WordsOutputParser},
    parser_helper::{Definition, ParsedWordsOutput, ResultItem, Word},
    possibility_parser::{parse_possibility, Possibility},
};

static WORDS_TXT_SUFFIX: &str = ".words.txt";

// Analysis lines carry the inflected form left-aligned in 21 columns.
fn analysis_line(form: &str, rest: &str) -> String {
    format!("{:<21}{}", form, rest)
}

#[test]
fn test_capture_files_parse_and_round_trip() -> Result<()> {
    let paths = fs::read_dir("./tests").unwrap();
    for path in paths {
        let path = path.unwrap().path();
        let file_name = path.file_name().unwrap().to_str().unwrap();
        if !file_name.ends_with(WORDS_TXT_SUFFIX) {
            continue;
        }

        let txt = fs::read_to_string(&path).unwrap();

        let parsed = parse_words_output(&txt, ParseMode::Strict)?;
        assert!(!parsed.items.is_empty(), "{}: no items", file_name);

        let json = serde_json::to_string_pretty(&parsed)?;
        let decoded: ParsedWordsOutput = serde_json::from_str(&json)?;
        assert_eq!(parsed, decoded, "{}: round trip", file_name);
    }

    Ok(())
}

#[test]
fn test_analysis_without_word_is_dropped() -> Result<()> {
    let parsed = parse_words_output(
        &analysis_line("vi.a", "N      1 1 NOM S F"),
        ParseMode::Strict,
    )?;

    assert!(parsed.items.is_empty());
    assert!(!parsed.truncated);

    Ok(())
}

#[test]
fn test_noun_with_two_analyses_shares_one_word() -> Result<()> {
    let txt = [
        "vir                  N      2 3 NOM S M",
        "vir                  N      2 3 VOC S M",
        "vir, viri  N (2nd) M",
        "man; husband; hero; person of courage, honor, and nobility;",
    ]
    .join("\n");

    let parsed = parse_words_output(&txt, ParseMode::Strict)?;

    let expected = ParsedWordsOutput {
        items: vec![ResultItem::Definition(Definition {
            possibilities: vec![
                Possibility::Noun {
                    text: "vir".to_owned(),
                    declension: Some(Declension::Second),
                    variety: 3,
                    case: Some(Case::Nominative),
                    number: Some(Number::Singular),
                    gender: Gender::Masculine,
                },
                Possibility::Noun {
                    text: "vir".to_owned(),
                    declension: Some(Declension::Second),
                    variety: 3,
                    case: Some(Case::Vocative),
                    number: Some(Number::Singular),
                    gender: Gender::Masculine,
                },
            ],
            words: vec![Word {
                expansion: Some(Expansion::Noun {
                    principal_parts: "vir, viri".to_owned(),
                    declension: Some(Declension::Second),
                    gender: Gender::Masculine,
                    notes: vec![],
                }),
                meaning: "man; husband; hero; person of courage, honor, and nobility;".to_owned(),
            }],
        })],
        truncated: false,
    };

    assert_eq!(parsed, expected);

    Ok(())
}

#[test]
fn test_truncation_marker_is_sticky_and_produces_no_item() -> Result<()> {
    let txt = [
        analysis_line("am.o", "V      1 1 PRES ACTIVE  IND 1 S"),
        "amo, amare, amavi, amatus  V (1st)".to_owned(),
        "love, like; fall in love with;".to_owned(),
        "*".to_owned(),
        analysis_line("vir", "N      2 3 NOM S M"),
        "vir, viri  N (2nd) M".to_owned(),
        "man; husband; hero;".to_owned(),
    ]
    .join("\n");

    let parsed = parse_words_output(&txt, ParseMode::Strict)?;

    assert!(parsed.truncated);
    assert_eq!(parsed.items.len(), 2);
    for item in &parsed.items {
        assert!(matches!(item, ResultItem::Definition(_)));
    }

    Ok(())
}

#[test]
fn test_back_to_back_entries_stay_separate() -> Result<()> {
    let txt = [
        analysis_line("ven.i", "V      4 1 PRES ACTIVE  IMP 2 S"),
        "venio, venire, veni, ventus  V (4th)".to_owned(),
        "come; advance; proceed;".to_owned(),
        analysis_line("ven.i", "N      2 4 GEN S N"),
        "venum, veni  N (2nd) N".to_owned(),
        "sale, purchase;".to_owned(),
    ]
    .join("\n");

    let parsed = parse_words_output(&txt, ParseMode::Strict)?;

    assert_eq!(parsed.items.len(), 2);

    let ResultItem::Definition(first) = &parsed.items[0] else {
        panic!("first item is not a definition");
    };
    assert_eq!(first.possibilities.len(), 1);
    assert!(matches!(
        first.possibilities[0],
        Possibility::Verb {
            conjugation: Some(Conjugation::Fourth),
            mood: Mood::Imperative,
            ..
        }
    ));

    let ResultItem::Definition(second) = &parsed.items[1] else {
        panic!("second item is not a definition");
    };
    assert_eq!(second.possibilities.len(), 1);
    assert!(matches!(
        second.possibilities[0],
        Possibility::Noun {
            case: Some(Case::Genitive),
            ..
        }
    ));

    Ok(())
}

#[test]
fn test_unknown_banner_becomes_text_item() -> Result<()> {
    let txt = [
        analysis_line("vir", "N      2 3 NOM S M"),
        "vir, viri  N (2nd) M".to_owned(),
        "man; husband; hero;".to_owned(),
        "========   UNKNOWN    ========".to_owned(),
    ]
    .join("\n");

    let parsed = parse_words_output(&txt, ParseMode::Strict)?;

    assert_eq!(parsed.items.len(), 2);
    assert!(matches!(parsed.items[0], ResultItem::Definition(_)));
    assert_eq!(
        parsed.items[1],
        ResultItem::Text {
            value: "========   UNKNOWN    ========".to_owned(),
        }
    );

    Ok(())
}

#[test]
fn test_adjective_with_explicit_neuter_gender() {
    let possibility = parse_possibility(&analysis_line("bell.um", "ADJ    1 1 ACC S N POS"))
        .expect("adjective line");

    assert_eq!(
        possibility,
        Possibility::Adjective {
            text: "bell.um".to_owned(),
            declension: Some(Declension::First),
            variety: 1,
            case: Some(Case::Accusative),
            number: Some(Number::Singular),
            gender: Some(Gender::Neuter),
            degree: Degree::Positive,
        }
    );
}

#[test]
fn test_deponent_verb_has_no_voice() {
    let possibility = parse_possibility(&analysis_line("sequ.or", "V      3 1 PRES         IND 1 S"))
        .expect("deponent verb line");

    assert!(possibility.is_deponent());
    assert!(matches!(
        possibility,
        Possibility::Verb {
            voice: None,
            tense: Tense::Present,
            mood: Mood::Indicative,
            ..
        }
    ));
}

#[test]
fn test_placeholder_fields_consume_their_full_slot() {
    let possibility = parse_possibility(&analysis_line("fas", "N      X 9 X   X N"))
        .expect("indeclinable noun line");

    assert_eq!(
        possibility,
        Possibility::Noun {
            text: "fas".to_owned(),
            declension: None,
            variety: 9,
            case: None,
            number: None,
            gender: Gender::Neuter,
        }
    );
}

#[test]
fn test_pronoun_gloss_without_expansion_line() -> Result<()> {
    let txt = [
        analysis_line("h.ic", "PRON   3 1 NOM S M"),
        "this; these (pl.); (them/they sometimes);".to_owned(),
    ]
    .join("\n");

    let parsed = parse_words_output(&txt, ParseMode::Strict)?;

    assert_eq!(parsed.items.len(), 1);
    let ResultItem::Definition(definition) = &parsed.items[0] else {
        panic!("not a definition");
    };
    assert_eq!(
        definition.words,
        vec![Word {
            expansion: None,
            meaning: "this; these (pl.); (them/they sometimes);".to_owned(),
        }]
    );

    Ok(())
}

#[test]
fn test_multi_line_gloss_keeps_line_breaks() -> Result<()> {
    let txt = fs::read_to_string("./tests/sequor.words.txt")?;

    let parsed = parse_words_output(&txt, ParseMode::Strict)?;

    assert!(parsed.truncated);
    assert_eq!(parsed.items.len(), 1);
    let ResultItem::Definition(definition) = &parsed.items[0] else {
        panic!("not a definition");
    };
    assert_eq!(
        definition.words[0].meaning,
        "follow; escort/attend/accompany; aim at/reach after/strive for/make for;\n\
         come next/after; attain; be led by;",
    );

    Ok(())
}

#[test]
fn test_strict_mode_fails_on_unclassified_line() {
    let result = parse_words_output("words, version 1.97FC", ParseMode::Strict);
    assert!(result.is_err());
}

#[test]
fn test_permissive_mode_echoes_unclassified_line() -> Result<()> {
    let parsed = parse_words_output("words, version 1.97FC", ParseMode::Permissive)?;

    assert_eq!(
        parsed.items,
        vec![ResultItem::Text {
            value: "words, version 1.97FC".to_owned(),
        }]
    );

    Ok(())
}

#[test]
fn test_consume_line_by_line_matches_whole_text() -> Result<()> {
    let txt = fs::read_to_string("./tests/amo.words.txt")?;

    let mut parser = WordsOutputParser::new(ParseMode::Strict);
    for line in txt.lines() {
        parser.consume_line(line)?;
    }

    assert_eq!(parser.finish(), parse_words_output(&txt, ParseMode::Strict)?);

    Ok(())
}

#[test]
fn test_participle_and_supine_lines() {
    let participle = parse_possibility(&analysis_line(
        "secut.us",
        "VPAR   3 1 NOM S M PERF PASSIVE PPL",
    ))
    .expect("participle line");
    assert!(matches!(
        participle,
        Possibility::VerbParticiple {
            conjugation: Some(Conjugation::Third),
            tense: Tense::Perfect,
            ..
        }
    ));

    let supine =
        parse_possibility(&analysis_line("cubit.um", "SUPINE 1 1 ACC S N")).expect("supine line");
    assert!(matches!(
        supine,
        Possibility::Supine {
            case: Some(Case::Accusative),
            gender: Some(Gender::Neuter),
            ..
        }
    ));
}

#[test]
fn test_preposition_conjunction_and_adverb_lines() {
    let preposition =
        parse_possibility(&analysis_line("cum", "PREP   ABL")).expect("preposition line");
    assert_eq!(
        preposition,
        Possibility::Preposition {
            text: "cum".to_owned(),
            case: Some(Case::Ablative),
        }
    );

    let conjunction = parse_possibility(&analysis_line("at", "CONJ")).expect("conjunction line");
    assert_eq!(
        conjunction,
        Possibility::Conjunction {
            text: "at".to_owned(),
        }
    );
    assert_eq!(conjunction.text(), "at");

    let adverb = parse_possibility(&analysis_line("etiam", "ADV    POS")).expect("adverb line");
    assert_eq!(
        adverb,
        Possibility::Adverb {
            text: "etiam".to_owned(),
            degree: Degree::Positive,
        }
    );
}

#[test]
fn test_expansion_notes_are_normalized() {
    let expansion = parse_expansion("abutor, abuti, abusus sum  V (3rd)  dep.  veryrare")
        .expect("verb expansion");

    assert_eq!(
        expansion,
        Expansion::Verb {
            principal_parts: "abutor, abuti, abusus sum".to_owned(),
            conjugation: Some(Conjugation::Third),
            notes: vec!["dep.".to_owned(), "very rare".to_owned()],
        }
    );
}

#[test]
fn test_preposition_expansion_carries_case() {
    let expansion = parse_expansion("cum  PREP  ABL").expect("preposition expansion");

    assert_eq!(
        expansion,
        Expansion::Preposition {
            principal_parts: "cum".to_owned(),
            case: Some(Case::Ablative),
            notes: vec![],
        }
    );
    assert_eq!(expansion.principal_parts(), "cum");
}

#[test]
fn test_gloss_lines_are_not_expansions() {
    assert_eq!(
        parse_expansion("man; husband; hero; person of courage, honor, and nobility;"),
        None
    );
    assert_eq!(parse_possibility("come; advance; proceed;"), None);
}

#[test]
fn test_display_abbreviations() {
    assert_eq!(Case::Nominative.abbreviation(), "nom.");
    assert_eq!(Gender::Neuter.abbreviation(), "neut.");
    assert_eq!(Tense::FuturePerfect.abbreviation(), "fut. perf.");
    assert_eq!(Declension::Second.abbreviation(), "2nd");
    assert_eq!(Degree::Superlative.abbreviation(), "superl.");
}
