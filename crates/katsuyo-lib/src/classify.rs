//! Verb classification: script validation, compound detection, the
//! irregular verb table and the one-grade/five-grade split.

use serde::{Deserialize, Serialize};

use crate::error::ConjugateError;
use crate::kana::{self, to_hiragana_char};
use crate::romaji;

/// The morphological class of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerbKind {
    /// 五段: conjugates by vowel-row substitution of the terminal
    /// syllable.
    Godan,
    /// 一段: the terminal る is dropped and suffixes attach to the
    /// invariant stem.
    Ichidan,
    /// One of the closed set of verbs whose forms are tabulated.
    Irregular,
}

/// Which of the tabulated irregular rule sets applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IrregularKind {
    /// する, including compounds such as 勉強する.
    Suru,
    /// くる / 来る, including compounds such as 持ってくる.
    Kuru,
    /// ある.
    Aru,
    /// いく / 行く: regular く-terminal except the connective and past
    /// forms.
    Iku,
    /// The five honorific verbs (くださる, なさる, いらっしゃる,
    /// おっしゃる, ござる).
    Honorific,
}

/// The classification result. Constructed once per call and never
/// mutated by any generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VerbInfo {
    /// The trimmed input, in its original script mix.
    pub dictionary_form: String,
    /// Phonetic reading, as phonetic as the input allows. Kanji the
    /// classifier does not know pass through unchanged.
    pub reading: String,
    /// Romanized rendering of the reading.
    pub romaji: String,
    /// The morphological class.
    pub kind: VerbKind,
    /// The invariant portion used by the generators. For compound
    /// verbs this is the compound prefix.
    pub stem: String,
    /// The final character(s) that determined the classification. For
    /// compound verbs this is the irregular base itself.
    pub ending: String,
    /// Present if and only if `kind` is irregular.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irregular: Option<IrregularKind>,
    /// Present if and only if the verb is a compound built on する or
    /// 来る.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound_prefix: Option<String>,
}

/// The closed table of irregular verbs, both spellings where two
/// exist.
static IRREGULAR: &[(&str, IrregularKind)] = &[
    ("する", IrregularKind::Suru),
    ("くる", IrregularKind::Kuru),
    ("来る", IrregularKind::Kuru),
    ("ある", IrregularKind::Aru),
    ("いく", IrregularKind::Iku),
    ("行く", IrregularKind::Iku),
    ("くださる", IrregularKind::Honorific),
    ("なさる", IrregularKind::Honorific),
    ("いらっしゃる", IrregularKind::Honorific),
    ("おっしゃる", IrregularKind::Honorific),
    ("ござる", IrregularKind::Honorific),
];

/// Irregular bases which form compounds. Checked before the direct
/// lookup so that 勉強する never matches the bare する entry.
static COMPOUND_BASES: &[(&str, IrregularKind)] = &[
    ("する", IrregularKind::Suru),
    ("くる", IrregularKind::Kuru),
    ("来る", IrregularKind::Kuru),
];

/// Kana which may precede the terminal る in a genuine one-grade verb:
/// the i row and the e row.
#[rustfmt::skip]
static ICHIDAN_ROWS: &[char] = &[
    'い', 'き', 'ぎ', 'し', 'じ', 'ち', 'ぢ', 'に', 'ひ', 'び', 'ぴ', 'み', 'り',
    'え', 'け', 'げ', 'せ', 'ぜ', 'て', 'で', 'ね', 'へ', 'べ', 'ぺ', 'め', 'れ',
];

/// Kanji-final verbs confirmed to be one-grade. A kanji directly
/// before る hides the vowel row, so these cannot be decided by
/// pattern alone.
static CONFIRMED_ICHIDAN: &[&str] = &[
    "見る", "出る", "着る", "似る", "煮る", "寝る", "得る", "経る", "居る", "射る", "鋳る",
    "干る",
];

/// Verbs that look one-grade but conjugate five-grade.
static FALSE_ICHIDAN: &[&str] = &[
    "帰る", "走る", "入る", "切る", "知る", "要る", "限る", "蹴る", "滑る", "握る", "練る",
    "参る", "焦る", "喋る", "捻る", "罵る", "辿る", "嘲る", "覆る",
];

/// The nine five-grade terminal characters.
static GODAN_ENDINGS: &[char] = &['う', 'く', 'ぐ', 'す', 'つ', 'ぬ', 'ぶ', 'む', 'る'];

/// Split the final character off a non-empty string.
fn split_last(text: &str) -> (&str, &str) {
    let mut it = text.chars();
    it.next_back();
    let stem = it.as_str();
    (stem, &text[stem.len()..])
}

fn info(
    text: &str,
    reading: String,
    kind: VerbKind,
    stem: &str,
    ending: &str,
    irregular: Option<IrregularKind>,
    compound_prefix: Option<String>,
) -> VerbInfo {
    VerbInfo {
        dictionary_form: text.to_owned(),
        romaji: romaji::to_romaji(&reading),
        reading,
        kind,
        stem: stem.to_owned(),
        ending: ending.to_owned(),
        irregular,
        compound_prefix,
    }
}

/// Classify a candidate dictionary-form verb.
///
/// Checks are ordered: compound detection must precede the direct
/// irregular lookup, and the one-grade heuristic must come after all
/// irregular checks. First match wins.
pub fn classify(input: &str) -> Result<VerbInfo, ConjugateError> {
    let text = input.trim();

    if text.is_empty() {
        return Err(ConjugateError::EmptyInput);
    }

    if let Some(c) = text.chars().find(|c| !kana::is_japanese(*c)) {
        return Err(ConjugateError::InvalidCharacters(c));
    }

    // Compound verbs built on する or 来る inflect only the base; the
    // prefix is carried into every generated form.
    for &(base, kind) in COMPOUND_BASES {
        if text.len() > base.len() && text.ends_with(base) {
            let prefix = &text[..text.len() - base.len()];

            let reading = match kind {
                IrregularKind::Kuru => format!("{prefix}くる"),
                _ => text.to_owned(),
            };

            return Ok(info(
                text,
                reading,
                VerbKind::Irregular,
                prefix,
                base,
                Some(kind),
                Some(prefix.to_owned()),
            ));
        }
    }

    if let Some(&(_, kind)) = IRREGULAR.iter().find(|(verb, _)| *verb == text) {
        let (stem, ending) = split_last(text);

        // The kanji spellings of the irregular verbs have known
        // readings.
        let reading = match text {
            "来る" => "くる".to_owned(),
            "行く" => "いく".to_owned(),
            _ => text.to_owned(),
        };

        return Ok(info(
            text,
            reading,
            VerbKind::Irregular,
            stem,
            ending,
            Some(kind),
            None,
        ));
    }

    let mut it = text.chars();
    let last = it.next_back().map(to_hiragana_char);
    let prev = it.next_back();

    // One-grade heuristic: る preceded by an i-row or e-row syllable.
    // A kanji directly before る is ambiguous and is decided by the
    // curated lists; verbs on neither list default to five-grade.
    if let (Some('る'), Some(prev)) = (last, prev) {
        let ichidan = if kana::is_kanji(prev) {
            if FALSE_ICHIDAN.contains(&text) {
                false
            } else {
                CONFIRMED_ICHIDAN.contains(&text)
            }
        } else {
            ICHIDAN_ROWS.contains(&to_hiragana_char(prev))
        };

        if ichidan {
            let (stem, ending) = split_last(text);
            return Ok(info(
                text,
                text.to_owned(),
                VerbKind::Ichidan,
                stem,
                ending,
                None,
                None,
            ));
        }
    }

    // Five-grade fallback on the terminal character.
    if let Some(last) = last {
        if GODAN_ENDINGS.contains(&last) {
            let (stem, ending) = split_last(text);
            return Ok(info(
                text,
                text.to_owned(),
                VerbKind::Godan,
                stem,
                ending,
                None,
                None,
            ));
        }
    }

    Err(ConjugateError::UnknownVerb(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn godan_by_ending() {
        for (verb, ending) in [
            ("書く", "く"),
            ("泳ぐ", "ぐ"),
            ("話す", "す"),
            ("待つ", "つ"),
            ("死ぬ", "ぬ"),
            ("遊ぶ", "ぶ"),
            ("読む", "む"),
            ("買う", "う"),
            ("分かる", "る"),
        ] {
            let info = classify(verb).unwrap();
            assert_eq!(info.kind, VerbKind::Godan, "{verb}");
            assert_eq!(info.ending, ending);
            assert_eq!(format!("{}{}", info.stem, info.ending), verb);
        }
    }

    #[test]
    fn ichidan_by_kana_row() {
        for verb in ["食べる", "起きる", "見せる", "信じる", "開ける"] {
            let info = classify(verb).unwrap();
            assert_eq!(info.kind, VerbKind::Ichidan, "{verb}");
            assert_eq!(info.ending, "る");
        }
    }

    #[test]
    fn kanji_final_disambiguation() {
        // Confirmed one-grade.
        for verb in ["見る", "出る", "着る", "寝る"] {
            assert_eq!(classify(verb).unwrap().kind, VerbKind::Ichidan, "{verb}");
        }

        // Orthographically one-grade but actually five-grade.
        for verb in ["帰る", "走る", "入る", "切る", "知る", "限る"] {
            assert_eq!(classify(verb).unwrap().kind, VerbKind::Godan, "{verb}");
        }

        // Unknown kanji + る defaults to five-grade.
        assert_eq!(classify("頑張る").unwrap().kind, VerbKind::Godan);
    }

    #[test]
    fn irregular_lookup() {
        for (verb, kind) in [
            ("する", IrregularKind::Suru),
            ("くる", IrregularKind::Kuru),
            ("来る", IrregularKind::Kuru),
            ("ある", IrregularKind::Aru),
            ("いく", IrregularKind::Iku),
            ("行く", IrregularKind::Iku),
            ("くださる", IrregularKind::Honorific),
            ("なさる", IrregularKind::Honorific),
            ("いらっしゃる", IrregularKind::Honorific),
            ("おっしゃる", IrregularKind::Honorific),
            ("ござる", IrregularKind::Honorific),
        ] {
            let info = classify(verb).unwrap();
            assert_eq!(info.kind, VerbKind::Irregular, "{verb}");
            assert_eq!(info.irregular, Some(kind), "{verb}");
            assert_eq!(info.compound_prefix, None, "{verb}");
        }
    }

    #[test]
    fn irregular_readings() {
        assert_eq!(classify("来る").unwrap().reading, "くる");
        assert_eq!(classify("行く").unwrap().reading, "いく");
        assert_eq!(classify("行く").unwrap().romaji, "iku");
    }

    #[test]
    fn compounds() {
        let info = classify("勉強する").unwrap();
        assert_eq!(info.kind, VerbKind::Irregular);
        assert_eq!(info.irregular, Some(IrregularKind::Suru));
        assert_eq!(info.compound_prefix.as_deref(), Some("勉強"));
        assert_eq!(info.ending, "する");
        assert_eq!(format!("{}{}", info.stem, info.ending), "勉強する");

        let info = classify("持ってくる").unwrap();
        assert_eq!(info.irregular, Some(IrregularKind::Kuru));
        assert_eq!(info.compound_prefix.as_deref(), Some("持って"));

        let info = classify("持って来る").unwrap();
        assert_eq!(info.irregular, Some(IrregularKind::Kuru));
        assert_eq!(info.compound_prefix.as_deref(), Some("持って"));
        assert_eq!(info.reading, "持ってくる");
    }

    #[test]
    fn trims_whitespace() {
        let info = classify("  書く\n").unwrap();
        assert_eq!(info.dictionary_form, "書く");
    }

    #[test]
    fn empty_input() {
        for input in ["", " ", "   ", "\t", "\n", " \t\r\n "] {
            assert_eq!(classify(input), Err(ConjugateError::EmptyInput), "{input:?}");
        }
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(
            classify("kaku"),
            Err(ConjugateError::InvalidCharacters('k'))
        );
        assert_eq!(
            classify("書く!"),
            Err(ConjugateError::InvalidCharacters('!'))
        );
        assert_eq!(
            classify("書く です"),
            Err(ConjugateError::InvalidCharacters(' '))
        );
    }

    #[test]
    fn unknown_verb() {
        // Valid script, but no rule matches the ending.
        assert!(matches!(
            classify("きれい"),
            Err(ConjugateError::UnknownVerb(_))
        ));
        assert!(matches!(
            classify("ほん"),
            Err(ConjugateError::UnknownVerb(_))
        ));
    }

    #[test]
    fn katakana_verbs() {
        // Loanword verbs spelled with katakana classify by their
        // folded kana.
        let info = classify("サボる").unwrap();
        assert_eq!(info.kind, VerbKind::Godan);

        let info = classify("コピーする").unwrap();
        assert_eq!(info.irregular, Some(IrregularKind::Suru));
    }
}
