//! Vowel-row substitution tables for the nine five-grade terminals.
//!
//! The te and past columns carry the euphonic sound changes, which are
//! not derivable from the vowel rows and must be tabulated per
//! terminal consonant.

#[derive(Debug, Clone, Copy)]
pub(crate) struct Godan {
    pub(crate) a: &'static str,
    pub(crate) i: &'static str,
    pub(crate) u: &'static str,
    pub(crate) e: &'static str,
    pub(crate) o: &'static str,
    pub(crate) te: &'static str,
    pub(crate) past: &'static str,
}

impl Godan {
    /// Look up the table for a five-grade terminal character.
    pub(crate) fn for_ending(c: char) -> Option<&'static Godan> {
        Some(match c {
            'う' => U,
            'つ' => TSU,
            'る' => RU,
            'く' => KU,
            'ぐ' => GU,
            'む' => MU,
            'ぶ' => BU,
            'ぬ' => NU,
            'す' => SU,
            _ => return None,
        })
    }
}

/// The U table.
pub(crate) static U: &Godan = &Godan {
    a: "わ",
    i: "い",
    u: "う",
    e: "え",
    o: "お",
    te: "って",
    past: "った",
};

/// The TSU table.
pub(crate) static TSU: &Godan = &Godan {
    a: "た",
    i: "ち",
    u: "つ",
    e: "て",
    o: "と",
    te: "って",
    past: "った",
};

/// The RU table.
pub(crate) static RU: &Godan = &Godan {
    a: "ら",
    i: "り",
    u: "る",
    e: "れ",
    o: "ろ",
    te: "って",
    past: "った",
};

/// The KU table.
pub(crate) static KU: &Godan = &Godan {
    a: "か",
    i: "き",
    u: "く",
    e: "け",
    o: "こ",
    te: "いて",
    past: "いた",
};

/// The GU table.
pub(crate) static GU: &Godan = &Godan {
    a: "が",
    i: "ぎ",
    u: "ぐ",
    e: "げ",
    o: "ご",
    te: "いで",
    past: "いだ",
};

/// The MU table.
pub(crate) static MU: &Godan = &Godan {
    a: "ま",
    i: "み",
    u: "む",
    e: "め",
    o: "も",
    te: "んで",
    past: "んだ",
};

/// The BU table.
pub(crate) static BU: &Godan = &Godan {
    a: "ば",
    i: "び",
    u: "ぶ",
    e: "べ",
    o: "ぼ",
    te: "んで",
    past: "んだ",
};

/// The NU table.
pub(crate) static NU: &Godan = &Godan {
    a: "な",
    i: "に",
    u: "ぬ",
    e: "ね",
    o: "の",
    te: "んで",
    past: "んだ",
};

/// The SU table.
pub(crate) static SU: &Godan = &Godan {
    a: "さ",
    i: "し",
    u: "す",
    e: "せ",
    o: "そ",
    te: "して",
    past: "した",
};

/// The table for 行く, which takes the って/った euphonic forms of the
/// う/つ/る group despite its く terminal. Every other column matches
/// the regular KU table.
pub(crate) static IKU: &Godan = &Godan {
    a: "か",
    i: "き",
    u: "く",
    e: "け",
    o: "こ",
    te: "って",
    past: "った",
};
