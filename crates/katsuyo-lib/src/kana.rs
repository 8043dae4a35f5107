//! Japanese script classification and the kanji/reading fragment pair
//! used to assemble conjugated forms.

use core::fmt;

use crate::concat::Concat;

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum Class {
    // Upper kana.
    U,
    // Lower kana used for composite syllables (small ゃゅょ and っ).
    L,
    // Punctuation or marks inside the kana blocks.
    P,
    // Not kana.
    X,
}

mod tables {
    use super::Class::*;

    pub(super) static HIRA_B: usize = 0x3040;

    #[rustfmt::skip]
    pub(super) static HIRA_T: [super::Class; 0x60] = [
        /*U+304x*/
        /*　*/ X, /*ぁ*/ L, /*あ*/ U, /*ぃ*/ L, /*い*/ U, /*ぅ*/ L, /*う*/ U, /*ぇ*/ L,
        /*え*/ U, /*ぉ*/ L, /*お*/ U, /*か*/ U, /*が*/ U, /*き*/ U, /*ぎ*/ U, /*く*/ U,
        /*U+305x*/
        /*ぐ*/ U, /*け*/ U, /*げ*/ U, /*こ*/ U, /*ご*/ U, /*さ*/ U, /*ざ*/ U, /*し*/ U,
        /*じ*/ U, /*す*/ U, /*ず*/ U, /*せ*/ U, /*ぜ*/ U, /*そ*/ U, /*ぞ*/ U, /*た*/ U,
        /*U+306x*/
        /*だ*/ U, /*ち*/ U, /*ぢ*/ U, /*っ*/ L, /*つ*/ U, /*づ*/ U, /*て*/ U, /*で*/ U,
        /*と*/ U, /*ど*/ U, /*な*/ U, /*に*/ U, /*ぬ*/ U, /*ね*/ U, /*の*/ U, /*は*/ U,
        /*U+307x*/
        /*ば*/ U, /*ぱ*/ U, /*ひ*/ U, /*び*/ U, /*ぴ*/ U, /*ふ*/ U, /*ぶ*/ U, /*ぷ*/ U,
        /*へ*/ U, /*べ*/ U, /*ぺ*/ U, /*ほ*/ U, /*ぼ*/ U, /*ぽ*/ U, /*ま*/ U, /*み*/ U,
        /*U+308x*/
        /*む*/ U, /*め*/ U, /*も*/ U, /*ゃ*/ L, /*や*/ U, /*ゅ*/ L, /*ゆ*/ U, /*ょ*/ L,
        /*よ*/ U, /*ら*/ U, /*り*/ U, /*る*/ U, /*れ*/ U, /*ろ*/ U, /*ゎ*/ L, /*わ*/ U,
        /*U+309x*/
        /*ゐ*/ U, /*ゑ*/ U, /*を*/ U, /*ん*/ U, /*ゔ*/ U, /*ゕ*/ U, /*ゖ*/ U, /*　*/ X,
        /*　*/ X, /*　*/ P, /*　*/ P, /*　*/ P, /*　*/ P, /*ゝ*/ P, /*ゞ*/ P, /*ゟ*/ P,
    ];

    pub(super) static KATA_B: usize = 0x30a0;

    #[rustfmt::skip]
    pub(super) static KATA_T: [super::Class; 0x60] = [
        /*U+30Ax */
        /*゠*/ P, /*ァ*/ L, /*ア*/ U, /*ィ*/ L, /*イ*/ U, /*ゥ*/ L, /*ウ*/ U, /*ェ*/ L,
        /*エ*/ U, /*ォ*/ L, /*オ*/ U, /*カ*/ U, /*ガ*/ U, /*キ*/ U, /*ギ*/ U, /*ク*/ U,
        /*U+30Bx */
        /*グ*/ U, /*ケ*/ U, /*ゲ*/ U, /*コ*/ U, /*ゴ*/ U, /*サ*/ U, /*ザ*/ U, /*シ*/ U,
        /*ジ*/ U, /*ス*/ U, /*ズ*/ U, /*セ*/ U, /*ゼ*/ U, /*ソ*/ U, /*ゾ*/ U, /*タ*/ U,
        /*U+30Cx */
        /*ダ*/ U, /*チ*/ U, /*ヂ*/ U, /*ッ*/ L, /*ツ*/ U, /*ヅ*/ U, /*テ*/ U, /*デ*/ U,
        /*ト*/ U, /*ド*/ U, /*ナ*/ U, /*ニ*/ U, /*ヌ*/ U, /*ネ*/ U, /*ノ*/ U, /*ハ*/ U,
        /*U+30Dx */
        /*バ*/ U, /*パ*/ U, /*ヒ*/ U, /*ビ*/ U, /*ピ*/ U, /*フ*/ U, /*ブ*/ U, /*プ*/ U,
        /*ヘ*/ U, /*ベ*/ U, /*ペ*/ U, /*ホ*/ U, /*ボ*/ U, /*ポ*/ U, /*マ*/ U, /*ミ*/ U,
        /*U+30Ex */
        /*ム*/ U, /*メ*/ U, /*モ*/ U, /*ャ*/ L, /*ヤ*/ U, /*ュ*/ L, /*ユ*/ U, /*ョ*/ L,
        /*ヨ*/ U, /*ラ*/ U, /*リ*/ U, /*ル*/ U, /*レ*/ U, /*ロ*/ U, /*ヮ*/ L, /*ワ*/ U,
        /*U+30Fx */
        /*ヰ*/ U, /*ヱ*/ U, /*ヲ*/ U, /*ン*/ U, /*ヴ*/ U, /*ヵ*/ U, /*ヶ*/ U, /*ヷ*/ U,
        /*ヸ*/ U, /*ヹ*/ U, /*ヺ*/ U, /*・*/ P, /*ー*/ P, /*ヽ*/ P, /*ヾ*/ P, /*ヿ*/ P,
    ];
}

fn get_hiragana(c: char) -> Option<Class> {
    let c = usize::try_from(c as u32).ok()?;
    let c = c.checked_sub(tables::HIRA_B)?;
    Some(*tables::HIRA_T.get(c)?)
}

fn get_katakana(c: char) -> Option<Class> {
    let c = usize::try_from(c as u32).ok()?;
    let c = c.checked_sub(tables::KATA_B)?;
    Some(*tables::KATA_T.get(c)?)
}

/// Test if a character is hiragana.
pub fn is_hiragana(c: char) -> bool {
    matches!(get_hiragana(c), Some(Class::U | Class::L))
}

/// Test if a character is katakana.
///
/// The prolonged sound mark ー counts, since it only occurs inside
/// katakana words.
pub fn is_katakana(c: char) -> bool {
    c == 'ー' || matches!(get_katakana(c), Some(Class::U | Class::L))
}

/// Test if a character is a kanji, including the iteration mark 々.
pub fn is_kanji(c: char) -> bool {
    matches!(c,
        '\u{4e00}'..='\u{9fff}'
        | '\u{3400}'..='\u{4dbf}'
        | '\u{f900}'..='\u{faff}'
        | '々' | '〆')
}

/// Test if a character belongs to any of the scripts a verb may be
/// written in.
pub fn is_japanese(c: char) -> bool {
    is_hiragana(c) || is_katakana(c) || is_kanji(c)
}

/// Fold a katakana character to its hiragana equivalent, leaving
/// everything else untouched. The two blocks are parallel at a fixed
/// offset for the characters we care about.
pub fn to_hiragana_char(c: char) -> char {
    match c {
        'ァ'..='ヶ' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
        c => c,
    }
}

/// A kanji/reading pair assembled out of borrowed fragments with a
/// shared kana suffix.
///
/// The kanji side carries the verb's original script mix, the reading
/// side is as phonetic as the input allows. For most verbs the two
/// only differ in their prefixes (such as 来 versus こ); the
/// conjugation suffix is always kana and shared.
#[derive(Debug, Default, Clone)]
pub struct Fragments<'a> {
    text: Concat<'a, 3>,
    reading: Concat<'a, 3>,
    suffix: Concat<'a, 4>,
}

impl<'a> Fragments<'a> {
    /// Construct a kanji/reading pair with a common suffix.
    pub fn new<A, B, C>(text: A, reading: B, suffix: C) -> Self
    where
        A: IntoIterator<Item = &'a str>,
        B: IntoIterator<Item = &'a str>,
        C: IntoIterator<Item = &'a str>,
    {
        Fragments {
            text: Concat::from_iter(text),
            reading: Concat::from_iter(reading),
            suffix: Concat::from_iter(suffix),
        }
    }

    /// Materialize the surface form in the verb's original script mix.
    pub fn text(&self) -> String {
        format!("{}{}", self.text, self.suffix)
    }

    /// Materialize the phonetic side.
    pub fn reading(&self) -> String {
        format!("{}{}", self.reading, self.suffix)
    }

    /// Test if the pair is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.reading.is_empty() && self.suffix.is_empty()
    }
}

impl fmt::Display for Fragments<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            text,
            reading,
            suffix,
        } = self;

        if text == reading {
            write!(f, "{text}{suffix}")
        } else {
            write!(f, "{text}{suffix} [{reading}{suffix}]")
        }
    }
}
