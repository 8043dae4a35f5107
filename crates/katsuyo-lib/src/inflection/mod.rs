//! The catalogue of conjugated forms and the per-class generators.

pub(crate) mod generate;
pub(crate) mod godan;


pub(crate) use self::godan::Godan;

use serde::{Deserialize, Serialize};

/// Grammatical category a form belongs to. Every category is covered
/// by at least one form in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Present,
    Negative,
    Past,
    PastNegative,
    Te,
    Progressive,
    Potential,
    Passive,
    Causative,
    CausativePassive,
    Imperative,
    Volitional,
    Conditional,
    Desire,
}

impl Category {
    /// All categories, in catalogue order.
    pub const ALL: [Category; 14] = [
        Category::Present,
        Category::Negative,
        Category::Past,
        Category::PastNegative,
        Category::Te,
        Category::Progressive,
        Category::Potential,
        Category::Passive,
        Category::Causative,
        Category::CausativePassive,
        Category::Imperative,
        Category::Volitional,
        Category::Conditional,
        Category::Desire,
    ];
}

/// Politeness register of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Formality {
    Plain,
    Polite,
}

macro_rules! form {
    ($vis:vis enum $name:ident { $({$variant:ident, $id:literal, $category:ident, $formality:ident, $english:literal, $native:literal}),* $(,)? }) => {
        /// A stable identifier for one conjugated form.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            /// The stable string identifier of the form.
            $vis fn id(&self) -> &'static str {
                match self {
                    $($name::$variant => $id,)*
                }
            }

            /// Look a form up by its stable identifier.
            $vis fn from_id(id: &str) -> Option<$name> {
                match id {
                    $($id => Some($name::$variant),)*
                    _ => None,
                }
            }

            /// The category the form belongs to.
            $vis fn category(&self) -> Category {
                match self {
                    $($name::$variant => Category::$category,)*
                }
            }

            /// The politeness register of the form.
            $vis fn formality(&self) -> Formality {
                match self {
                    $($name::$variant => Formality::$formality,)*
                }
            }

            /// English display name.
            $vis fn english(&self) -> &'static str {
                match self {
                    $($name::$variant => $english,)*
                }
            }

            /// Japanese display name.
            $vis fn native(&self) -> &'static str {
                match self {
                    $($name::$variant => $native,)*
                }
            }
        }
    }
}

form! {
    pub enum Form {
        {PresentPlain, "present-plain", Present, Plain, "Present", "辞書形"},
        {PresentPolite, "present-polite", Present, Polite, "Present polite", "ます形"},
        {NegativePlain, "negative-plain", Negative, Plain, "Negative", "ない形"},
        {NegativePolite, "negative-polite", Negative, Polite, "Negative polite", "ません形"},
        {PastPlain, "past-plain", Past, Plain, "Past", "た形"},
        {PastPolite, "past-polite", Past, Polite, "Past polite", "ました形"},
        {PastNegativePlain, "past-negative-plain", PastNegative, Plain, "Past negative", "なかった形"},
        {PastNegativePolite, "past-negative-polite", PastNegative, Polite, "Past negative polite", "ませんでした形"},
        {Te, "te", Te, Plain, "Te form", "て形"},
        {TeNegative, "te-negative", Te, Plain, "Negative te form", "なくて形"},
        {ProgressivePlain, "progressive-plain", Progressive, Plain, "Progressive", "ている形"},
        {ProgressivePolite, "progressive-polite", Progressive, Polite, "Progressive polite", "ています形"},
        {ProgressiveNegative, "progressive-negative", Progressive, Plain, "Progressive negative", "ていない形"},
        {ProgressiveNegativePolite, "progressive-negative-polite", Progressive, Polite, "Progressive negative polite", "ていません形"},
        {PotentialPlain, "potential-plain", Potential, Plain, "Potential", "可能形"},
        {PotentialPolite, "potential-polite", Potential, Polite, "Potential polite", "可能形（丁寧）"},
        {PotentialNegative, "potential-negative", Potential, Plain, "Potential negative", "可能形（否定）"},
        {PotentialNegativePolite, "potential-negative-polite", Potential, Polite, "Potential negative polite", "可能形（丁寧否定）"},
        {PotentialColloquial, "potential-colloquial", Potential, Plain, "Potential (colloquial)", "ら抜き可能形"},
        {PassivePlain, "passive-plain", Passive, Plain, "Passive", "受身形"},
        {PassivePolite, "passive-polite", Passive, Polite, "Passive polite", "受身形（丁寧）"},
        {CausativePlain, "causative-plain", Causative, Plain, "Causative", "使役形"},
        {CausativePolite, "causative-polite", Causative, Polite, "Causative polite", "使役形（丁寧）"},
        {CausativePassivePlain, "causative-passive-plain", CausativePassive, Plain, "Causative passive", "使役受身形"},
        {CausativePassivePolite, "causative-passive-polite", CausativePassive, Polite, "Causative passive polite", "使役受身形（丁寧）"},
        {ImperativePlain, "imperative-plain", Imperative, Plain, "Imperative", "命令形"},
        {ImperativeNegative, "imperative-negative", Imperative, Plain, "Negative imperative", "禁止形"},
        {VolitionalPlain, "volitional-plain", Volitional, Plain, "Volitional", "意向形"},
        {VolitionalPolite, "volitional-polite", Volitional, Polite, "Volitional polite", "ましょう形"},
        {ConditionalBa, "conditional-ba", Conditional, Plain, "Conditional (ば)", "ば形"},
        {ConditionalBaNegative, "conditional-ba-negative", Conditional, Plain, "Negative conditional (ば)", "なければ形"},
        {ConditionalTara, "conditional-tara", Conditional, Plain, "Conditional (たら)", "たら形"},
        {ConditionalTaraNegative, "conditional-tara-negative", Conditional, Plain, "Negative conditional (たら)", "なかったら形"},
        {Desire, "desire-plain", Desire, Plain, "Desire", "たい形"},
        {DesireNegative, "desire-negative", Desire, Plain, "Negative desire", "たくない形"},
    }
}

impl Form {
    /// The fixed catalogue every generator produces, in output order.
    ///
    /// The colloquial one-grade potential is deliberately not part of
    /// the catalogue; it is exposed separately through
    /// [`colloquial_potential`](crate::colloquial_potential).
    pub const CATALOGUE: [Form; 34] = [
        Form::PresentPlain,
        Form::PresentPolite,
        Form::NegativePlain,
        Form::NegativePolite,
        Form::PastPlain,
        Form::PastPolite,
        Form::PastNegativePlain,
        Form::PastNegativePolite,
        Form::Te,
        Form::TeNegative,
        Form::ProgressivePlain,
        Form::ProgressivePolite,
        Form::ProgressiveNegative,
        Form::ProgressiveNegativePolite,
        Form::PotentialPlain,
        Form::PotentialPolite,
        Form::PotentialNegative,
        Form::PotentialNegativePolite,
        Form::PassivePlain,
        Form::PassivePolite,
        Form::CausativePlain,
        Form::CausativePolite,
        Form::CausativePassivePlain,
        Form::CausativePassivePolite,
        Form::ImperativePlain,
        Form::ImperativeNegative,
        Form::VolitionalPlain,
        Form::VolitionalPolite,
        Form::ConditionalBa,
        Form::ConditionalBaNegative,
        Form::ConditionalTara,
        Form::ConditionalTaraNegative,
        Form::Desire,
        Form::DesireNegative,
    ];
}
