//! Per-class form generators.
//!
//! Each generator walks the full catalogue in order and pushes one row
//! per form through a `FnMut` sink. Five-grade rows are (vowel-row
//! prefix, suffix literal) pairs relative to the stem; one-grade rows
//! are a single suffix literal; the irregular verbs tabulate their
//! rows outright since no productive rule derives them.

use crate::inflection::godan::Godan;
use crate::inflection::Form;

use Form::*;

/// Five-grade rows. The surface is stem + prefix + suffix.
pub(crate) fn godan(g: &'static Godan, mut r: impl FnMut(&'static str, &'static str, Form)) {
    r("", g.u, PresentPlain);
    r(g.i, "ます", PresentPolite);
    r(g.a, "ない", NegativePlain);
    r(g.i, "ません", NegativePolite);
    r("", g.past, PastPlain);
    r(g.i, "ました", PastPolite);
    r(g.a, "なかった", PastNegativePlain);
    r(g.i, "ませんでした", PastNegativePolite);
    r("", g.te, Te);
    r(g.a, "なくて", TeNegative);
    r(g.te, "いる", ProgressivePlain);
    r(g.te, "います", ProgressivePolite);
    r(g.te, "いない", ProgressiveNegative);
    r(g.te, "いません", ProgressiveNegativePolite);
    r(g.e, "る", PotentialPlain);
    r(g.e, "ます", PotentialPolite);
    r(g.e, "ない", PotentialNegative);
    r(g.e, "ません", PotentialNegativePolite);
    r(g.a, "れる", PassivePlain);
    r(g.a, "れます", PassivePolite);
    r(g.a, "せる", CausativePlain);
    r(g.a, "せます", CausativePolite);
    r(g.a, "せられる", CausativePassivePlain);
    r(g.a, "せられます", CausativePassivePolite);
    r("", g.e, ImperativePlain);
    r(g.u, "な", ImperativeNegative);
    r(g.o, "う", VolitionalPlain);
    r(g.i, "ましょう", VolitionalPolite);
    r(g.e, "ば", ConditionalBa);
    r(g.a, "なければ", ConditionalBaNegative);
    r(g.past, "ら", ConditionalTara);
    r(g.a, "なかったら", ConditionalTaraNegative);
    r(g.i, "たい", Desire);
    r(g.i, "たくない", DesireNegative);
}

/// One-grade rows. The surface is stem + suffix; the stem never
/// changes.
pub(crate) fn ichidan(mut r: impl FnMut(&'static str, Form)) {
    r("る", PresentPlain);
    r("ます", PresentPolite);
    r("ない", NegativePlain);
    r("ません", NegativePolite);
    r("た", PastPlain);
    r("ました", PastPolite);
    r("なかった", PastNegativePlain);
    r("ませんでした", PastNegativePolite);
    r("て", Te);
    r("なくて", TeNegative);
    r("ている", ProgressivePlain);
    r("ています", ProgressivePolite);
    r("ていない", ProgressiveNegative);
    r("ていません", ProgressiveNegativePolite);
    r("られる", PotentialPlain);
    r("られます", PotentialPolite);
    r("られない", PotentialNegative);
    r("られません", PotentialNegativePolite);
    r("られる", PassivePlain);
    r("られます", PassivePolite);
    r("させる", CausativePlain);
    r("させます", CausativePolite);
    r("させられる", CausativePassivePlain);
    r("させられます", CausativePassivePolite);
    r("ろ", ImperativePlain);
    r("るな", ImperativeNegative);
    r("よう", VolitionalPlain);
    r("ましょう", VolitionalPolite);
    r("れば", ConditionalBa);
    r("なければ", ConditionalBaNegative);
    r("たら", ConditionalTara);
    r("なかったら", ConditionalTaraNegative);
    r("たい", Desire);
    r("たくない", DesireNegative);
}

/// The shortened colloquial one-grade potential suffix (ら抜き),
/// exactly one syllable shorter than the traditional られる.
pub(crate) const ICHIDAN_POTENTIAL_COLLOQUIAL: &str = "れる";

/// Do-irregular rows, complete suffixes after the compound prefix.
/// The polite stem し differs from the dictionary stem す, and the
/// potential is the separate word できる rather than a suffixed form.
pub(crate) fn suru(mut r: impl FnMut(&'static str, Form)) {
    r("する", PresentPlain);
    r("します", PresentPolite);
    r("しない", NegativePlain);
    r("しません", NegativePolite);
    r("した", PastPlain);
    r("しました", PastPolite);
    r("しなかった", PastNegativePlain);
    r("しませんでした", PastNegativePolite);
    r("して", Te);
    r("しなくて", TeNegative);
    r("している", ProgressivePlain);
    r("しています", ProgressivePolite);
    r("していない", ProgressiveNegative);
    r("していません", ProgressiveNegativePolite);
    r("できる", PotentialPlain);
    r("できます", PotentialPolite);
    r("できない", PotentialNegative);
    r("できません", PotentialNegativePolite);
    r("される", PassivePlain);
    r("されます", PassivePolite);
    r("させる", CausativePlain);
    r("させます", CausativePolite);
    r("させられる", CausativePassivePlain);
    r("させられます", CausativePassivePolite);
    r("しろ", ImperativePlain);
    r("するな", ImperativeNegative);
    r("しよう", VolitionalPlain);
    r("しましょう", VolitionalPolite);
    r("すれば", ConditionalBa);
    r("しなければ", ConditionalBaNegative);
    r("したら", ConditionalTara);
    r("しなかったら", ConditionalTaraNegative);
    r("したい", Desire);
    r("したくない", DesireNegative);
}

/// Come-irregular rows as (reading prefix, suffix) pairs. The kanji
/// surface is 来 + suffix throughout while the reading of 来 shifts
/// between く, き and こ depending on the form.
pub(crate) fn kuru(mut r: impl FnMut(&'static str, &'static str, Form)) {
    r("く", "る", PresentPlain);
    r("き", "ます", PresentPolite);
    r("こ", "ない", NegativePlain);
    r("き", "ません", NegativePolite);
    r("き", "た", PastPlain);
    r("き", "ました", PastPolite);
    r("こ", "なかった", PastNegativePlain);
    r("き", "ませんでした", PastNegativePolite);
    r("き", "て", Te);
    r("こ", "なくて", TeNegative);
    r("き", "ている", ProgressivePlain);
    r("き", "ています", ProgressivePolite);
    r("き", "ていない", ProgressiveNegative);
    r("き", "ていません", ProgressiveNegativePolite);
    r("こ", "られる", PotentialPlain);
    r("こ", "られます", PotentialPolite);
    r("こ", "られない", PotentialNegative);
    r("こ", "られません", PotentialNegativePolite);
    r("こ", "られる", PassivePlain);
    r("こ", "られます", PassivePolite);
    r("こ", "させる", CausativePlain);
    r("こ", "させます", CausativePolite);
    r("こ", "させられる", CausativePassivePlain);
    r("こ", "させられます", CausativePassivePolite);
    r("こ", "い", ImperativePlain);
    r("く", "るな", ImperativeNegative);
    r("こ", "よう", VolitionalPlain);
    r("き", "ましょう", VolitionalPolite);
    r("く", "れば", ConditionalBa);
    r("こ", "なければ", ConditionalBaNegative);
    r("き", "たら", ConditionalTara);
    r("こ", "なかったら", ConditionalTaraNegative);
    r("き", "たい", Desire);
    r("き", "たくない", DesireNegative);
}

/// Exist-irregular rows as complete surfaces. The only true
/// irregularity is the ない family replacing the あら-based negatives;
/// ありえる and あられる are structural placeholders kept for
/// compatibility. Everything else follows the る-row pattern on the
/// stem あ.
pub(crate) fn aru(mut r: impl FnMut(&'static str, Form)) {
    r("ある", PresentPlain);
    r("あります", PresentPolite);
    r("ない", NegativePlain);
    r("ありません", NegativePolite);
    r("あった", PastPlain);
    r("ありました", PastPolite);
    r("なかった", PastNegativePlain);
    r("ありませんでした", PastNegativePolite);
    r("あって", Te);
    r("なくて", TeNegative);
    r("あっている", ProgressivePlain);
    r("あっています", ProgressivePolite);
    r("あっていない", ProgressiveNegative);
    r("あっていません", ProgressiveNegativePolite);
    r("ありえる", PotentialPlain);
    r("ありえます", PotentialPolite);
    r("ありえない", PotentialNegative);
    r("ありえません", PotentialNegativePolite);
    r("あられる", PassivePlain);
    r("あられます", PassivePolite);
    r("あらせる", CausativePlain);
    r("あらせます", CausativePolite);
    r("あらせられる", CausativePassivePlain);
    r("あらせられます", CausativePassivePolite);
    r("あれ", ImperativePlain);
    r("あるな", ImperativeNegative);
    r("あろう", VolitionalPlain);
    r("ありましょう", VolitionalPolite);
    r("あれば", ConditionalBa);
    r("なければ", ConditionalBaNegative);
    r("あったら", ConditionalTara);
    r("なかったら", ConditionalTaraNegative);
    r("ありたい", Desire);
    r("ありたくない", DesireNegative);
}

/// Honorific rows as suffixes on the stem (the dictionary form minus
/// る). Every ます-family suffix attaches to stem + い instead of the
/// regular り row; all other rows follow the る-row pattern.
pub(crate) fn honorific(mut r: impl FnMut(&'static str, Form)) {
    r("る", PresentPlain);
    r("います", PresentPolite);
    r("らない", NegativePlain);
    r("いません", NegativePolite);
    r("った", PastPlain);
    r("いました", PastPolite);
    r("らなかった", PastNegativePlain);
    r("いませんでした", PastNegativePolite);
    r("って", Te);
    r("らなくて", TeNegative);
    r("っている", ProgressivePlain);
    r("っています", ProgressivePolite);
    r("っていない", ProgressiveNegative);
    r("っていません", ProgressiveNegativePolite);
    r("れる", PotentialPlain);
    r("れます", PotentialPolite);
    r("れない", PotentialNegative);
    r("れません", PotentialNegativePolite);
    r("られる", PassivePlain);
    r("られます", PassivePolite);
    r("らせる", CausativePlain);
    r("らせます", CausativePolite);
    r("らせられる", CausativePassivePlain);
    r("らせられます", CausativePassivePolite);
    r("れ", ImperativePlain);
    r("るな", ImperativeNegative);
    r("ろう", VolitionalPlain);
    r("いましょう", VolitionalPolite);
    r("れば", ConditionalBa);
    r("らなければ", ConditionalBaNegative);
    r("ったら", ConditionalTara);
    r("らなかったら", ConditionalTaraNegative);
    r("りたい", Desire);
    r("りたくない", DesireNegative);
}
