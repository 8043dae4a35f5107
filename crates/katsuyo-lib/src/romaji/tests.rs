use super::{to_hiragana, to_romaji};

#[test]
fn plain_syllables() {
    assert_eq!(to_romaji("たべる"), "taberu");
    assert_eq!(to_romaji("かく"), "kaku");
    assert_eq!(to_romaji("はなします"), "hanashimasu");
    assert_eq!(to_romaji(""), "");
}

#[test]
fn digraphs_before_single_kana() {
    assert_eq!(to_romaji("しゃしん"), "shashin");
    assert_eq!(to_romaji("きょう"), "kyou");
    assert_eq!(to_romaji("べんきょう"), "benkyou");
    assert_eq!(to_romaji("りょこう"), "ryokou");
    // し alone must still romanize on its own.
    assert_eq!(to_romaji("し"), "shi");
}

#[test]
fn gemination() {
    assert_eq!(to_romaji("きって"), "kitte");
    assert_eq!(to_romaji("がっこう"), "gakkou");
    assert_eq!(to_romaji("いって"), "itte");
    // Digraph after the marker doubles the digraph's first consonant.
    assert_eq!(to_romaji("まっちゃ"), "maccha");
    // Trailing marker emits nothing.
    assert_eq!(to_romaji("あっ"), "a");
}

#[test]
fn long_vowel_mark() {
    assert_eq!(to_romaji("ラーメン"), "raamen");
    assert_eq!(to_romaji("コーヒー"), "koohii");
    assert_eq!(to_romaji("スーパー"), "suupaa");
}

#[test]
fn katakana() {
    assert_eq!(to_romaji("テレビ"), "terebi");
    assert_eq!(to_romaji("シャツ"), "shatsu");
}

#[test]
fn passthrough() {
    assert_eq!(to_romaji("書く"), "書ku");
    assert_eq!(to_romaji("勉強する"), "勉強suru");
    assert_eq!(to_romaji("abc123"), "abc123");
}

#[test]
fn hiragana_from_romaji() {
    assert_eq!(to_hiragana("taberu"), "たべる");
    assert_eq!(to_hiragana("kaku"), "かく");
    assert_eq!(to_hiragana("shashin"), "しゃしん");
    assert_eq!(to_hiragana("kitte"), "きって");
    assert_eq!(to_hiragana("benkyou"), "べんきょう");
    assert_eq!(to_hiragana("onna"), "おんな");
    assert_eq!(to_hiragana("kondo"), "こんど");
    assert_eq!(to_hiragana("hon"), "ほん");
}

#[test]
fn hiragana_from_romaji_aliases() {
    assert_eq!(to_hiragana("si"), "し");
    assert_eq!(to_hiragana("tyo"), "ちょ");
    assert_eq!(to_hiragana("hu"), "ふ");
}

#[test]
fn hiragana_case_insensitive() {
    assert_eq!(to_hiragana("TABERU"), "たべる");
    assert_eq!(to_hiragana("Kaku"), "かく");
}

#[test]
fn round_trip_kana() {
    for word in ["たべる", "かく", "はなす", "べんきょう", "きって"] {
        assert_eq!(to_hiragana(&to_romaji(word)), word);
    }
}
