//! Kana to romaji conversion and its inverse.
//!
//! Conversion is a single left-to-right pass with longest-match-first
//! lookup: digraphs such as しゃ must be tried before the single kana
//! し, since the two romanize differently. Characters outside the kana
//! blocks (kanji, ASCII, punctuation) pass through untouched.

#[cfg(test)]
mod tests;

/// Two-kana digraphs. Tried before the single-character table.
#[rustfmt::skip]
static DIGRAPHS: &[(&str, &str, &str)] = &[
    ("きゃ", "キャ", "kya"), ("きゅ", "キュ", "kyu"), ("きょ", "キョ", "kyo"),
    ("しゃ", "シャ", "sha"), ("しゅ", "シュ", "shu"), ("しょ", "ショ", "sho"),
    ("ちゃ", "チャ", "cha"), ("ちゅ", "チュ", "chu"), ("ちょ", "チョ", "cho"),
    ("にゃ", "ニャ", "nya"), ("にゅ", "ニュ", "nyu"), ("にょ", "ニョ", "nyo"),
    ("ひゃ", "ヒャ", "hya"), ("ひゅ", "ヒュ", "hyu"), ("ひょ", "ヒョ", "hyo"),
    ("みゃ", "ミャ", "mya"), ("みゅ", "ミュ", "myu"), ("みょ", "ミョ", "myo"),
    ("りゃ", "リャ", "rya"), ("りゅ", "リュ", "ryu"), ("りょ", "リョ", "ryo"),
    ("ぎゃ", "ギャ", "gya"), ("ぎゅ", "ギュ", "gyu"), ("ぎょ", "ギョ", "gyo"),
    ("じゃ", "ジャ", "ja"),  ("じゅ", "ジュ", "ju"),  ("じょ", "ジョ", "jo"),
    ("びゃ", "ビャ", "bya"), ("びゅ", "ビュ", "byu"), ("びょ", "ビョ", "byo"),
    ("ぴゃ", "ピャ", "pya"), ("ぴゅ", "ピュ", "pyu"), ("ぴょ", "ピョ", "pyo"),
    ("ふぁ", "ファ", "fa"),  ("ふぃ", "フィ", "fi"),  ("ふぇ", "フェ", "fe"),
    ("ふぉ", "フォ", "fo"),
];

/// Single kana.
#[rustfmt::skip]
static MONOGRAPHS: &[(&str, &str, &str)] = &[
    ("あ", "ア", "a"),  ("い", "イ", "i"),  ("う", "ウ", "u"),  ("え", "エ", "e"),  ("お", "オ", "o"),
    ("か", "カ", "ka"), ("き", "キ", "ki"), ("く", "ク", "ku"), ("け", "ケ", "ke"), ("こ", "コ", "ko"),
    ("さ", "サ", "sa"), ("し", "シ", "shi"), ("す", "ス", "su"), ("せ", "セ", "se"), ("そ", "ソ", "so"),
    ("た", "タ", "ta"), ("ち", "チ", "chi"), ("つ", "ツ", "tsu"), ("て", "テ", "te"), ("と", "ト", "to"),
    ("な", "ナ", "na"), ("に", "ニ", "ni"), ("ぬ", "ヌ", "nu"), ("ね", "ネ", "ne"), ("の", "ノ", "no"),
    ("は", "ハ", "ha"), ("ひ", "ヒ", "hi"), ("ふ", "フ", "fu"), ("へ", "ヘ", "he"), ("ほ", "ホ", "ho"),
    ("ま", "マ", "ma"), ("み", "ミ", "mi"), ("む", "ム", "mu"), ("め", "メ", "me"), ("も", "モ", "mo"),
    ("や", "ヤ", "ya"), ("ゆ", "ユ", "yu"), ("よ", "ヨ", "yo"),
    ("ら", "ラ", "ra"), ("り", "リ", "ri"), ("る", "ル", "ru"), ("れ", "レ", "re"), ("ろ", "ロ", "ro"),
    ("わ", "ワ", "wa"), ("を", "ヲ", "wo"), ("ん", "ン", "n"),
    ("が", "ガ", "ga"), ("ぎ", "ギ", "gi"), ("ぐ", "グ", "gu"), ("げ", "ゲ", "ge"), ("ご", "ゴ", "go"),
    ("ざ", "ザ", "za"), ("じ", "ジ", "ji"), ("ず", "ズ", "zu"), ("ぜ", "ゼ", "ze"), ("ぞ", "ゾ", "zo"),
    ("だ", "ダ", "da"), ("ぢ", "ヂ", "ji"), ("づ", "ヅ", "zu"), ("で", "デ", "de"), ("ど", "ド", "do"),
    ("ば", "バ", "ba"), ("び", "ビ", "bi"), ("ぶ", "ブ", "bu"), ("べ", "ベ", "be"), ("ぼ", "ボ", "bo"),
    ("ぱ", "パ", "pa"), ("ぴ", "ピ", "pi"), ("ぷ", "プ", "pu"), ("ぺ", "ペ", "pe"), ("ぽ", "ポ", "po"),
    ("ゔ", "ヴ", "vu"),
    ("ぁ", "ァ", "a"),  ("ぃ", "ィ", "i"),  ("ぅ", "ゥ", "u"),  ("ぇ", "ェ", "e"),  ("ぉ", "ォ", "o"),
    ("ゃ", "ャ", "ya"), ("ゅ", "ュ", "yu"), ("ょ", "ョ", "yo"),
];

/// Alternate Latin spellings accepted when converting into kana.
static ALIASES: &[(&str, &str)] = &[
    ("si", "し"),
    ("ti", "ち"),
    ("tu", "つ"),
    ("hu", "ふ"),
    ("zi", "じ"),
    ("sya", "しゃ"),
    ("syu", "しゅ"),
    ("syo", "しょ"),
    ("tya", "ちゃ"),
    ("tyu", "ちゅ"),
    ("tyo", "ちょ"),
    ("jya", "じゃ"),
    ("jyu", "じゅ"),
    ("jyo", "じょ"),
];

/// Match the longest kana sequence at the start of `rest`, returning
/// its romanization and the matched byte length.
fn match_kana(rest: &str) -> Option<(&'static str, usize)> {
    for (hira, kata, romaji) in DIGRAPHS {
        if rest.starts_with(hira) {
            return Some((romaji, hira.len()));
        }

        if rest.starts_with(kata) {
            return Some((romaji, kata.len()));
        }
    }

    for (hira, kata, romaji) in MONOGRAPHS {
        if rest.starts_with(hira) {
            return Some((romaji, hira.len()));
        }

        if rest.starts_with(kata) {
            return Some((romaji, kata.len()));
        }
    }

    None
}

/// Romanize every kana run in the input, passing other characters
/// through verbatim. Never fails; empty input yields an empty string.
pub fn to_romaji(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        // The gemination marker doubles the first consonant of the
        // following syllable. Nothing is emitted for the marker itself
        // when no consonant follows.
        if matches!(c, 'っ' | 'ッ') {
            rest = &rest[c.len_utf8()..];

            if let Some((romaji, _)) = match_kana(rest) {
                if let Some(first) = romaji.chars().next() {
                    if !matches!(first, 'a' | 'e' | 'i' | 'o' | 'u') {
                        out.push(first);
                    }
                }
            }

            continue;
        }

        // The katakana long-vowel mark repeats the last emitted vowel.
        if c == 'ー' {
            rest = &rest[c.len_utf8()..];

            if let Some(v) = out
                .chars()
                .rev()
                .find(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
            {
                out.push(v);
            }

            continue;
        }

        if let Some((romaji, len)) = match_kana(rest) {
            out.push_str(romaji);
            rest = &rest[len..];
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// Match the longest Latin sequence (up to four characters) at the
/// start of `rest`, returning the hiragana it spells.
fn match_romaji(rest: &str) -> Option<(&'static str, usize)> {
    for len in (1..=4).rev() {
        let Some(prefix) = rest.get(..len) else {
            continue;
        };

        for (hira, _, romaji) in DIGRAPHS.iter().chain(MONOGRAPHS) {
            if *romaji == prefix {
                return Some((hira, len));
            }
        }

        for (romaji, hira) in ALIASES {
            if *romaji == prefix {
                return Some((hira, len));
            }
        }
    }

    None
}

/// Convert a Latin-alphabet spelling into hiragana. Case-insensitive;
/// unrecognized characters pass through verbatim.
pub fn to_hiragana(input: &str) -> String {
    let romaji = input.to_lowercase();
    let mut out = String::new();
    let mut rest = romaji.as_str();

    while let Some(c) = rest.chars().next() {
        let bytes = rest.as_bytes();

        // A doubled consonant spells the gemination marker. The
        // syllabic n is excluded so that spellings like "onna" work.
        if bytes.len() >= 2
            && bytes[0] == bytes[1]
            && bytes[0].is_ascii_alphabetic()
            && !matches!(bytes[0], b'a' | b'e' | b'i' | b'o' | b'u' | b'n')
        {
            out.push('っ');
            rest = &rest[1..];
            continue;
        }

        // An n before a consonant other than y, or at the end of the
        // input, is the syllabic ん.
        if bytes[0] == b'n' {
            let standalone = match bytes.get(1) {
                None => true,
                Some(b) => {
                    b.is_ascii_alphabetic() && !matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
                }
            };

            if standalone {
                out.push('ん');
                rest = &rest[1..];
                continue;
            }
        }

        if let Some((hira, len)) = match_romaji(rest) {
            out.push_str(hira);
            rest = &rest[len..];
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}
