//! The conjugation facade: validation, classification, generator
//! dispatch and result assembly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::{classify, IrregularKind, VerbInfo, VerbKind};
use crate::error::ConjugateError;
use crate::inflection::{generate, godan, Category, Form, Formality, Godan};
use crate::kana::{to_hiragana_char, Fragments};
use crate::romaji;

/// One conjugated output form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConjugationForm {
    /// Stable identifier.
    pub form: Form,
    /// English display name.
    pub name: String,
    /// Japanese display name.
    pub native_name: String,
    /// The surface in the verb's original script mix. The field name
    /// is historical; the content may be pure kana.
    pub kanji: String,
    /// Phonetic rendering.
    pub reading: String,
    /// Romanized rendering.
    pub romaji: String,
    /// Politeness register.
    pub formality: Formality,
    /// Grammatical category.
    pub category: Category,
}

/// The aggregate returned to callers: the classified verb, the full
/// ordered form list, and a capture-time timestamp. Serializes
/// losslessly; every field is a structural copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConjugationResult {
    pub verb: VerbInfo,
    pub forms: Vec<ConjugationForm>,
    pub created_at: DateTime<Utc>,
}

impl ConjugationResult {
    /// Point query for a single form.
    pub fn get(&self, form: Form) -> Option<&ConjugationForm> {
        self.forms.iter().find(|f| f.form == form)
    }

    /// Point query by the form's stable string identifier.
    pub fn get_by_id(&self, id: &str) -> Option<&ConjugationForm> {
        let form = Form::from_id(id)?;
        self.get(form)
    }
}

fn build_form(form: Form, pair: &Fragments<'_>) -> ConjugationForm {
    let reading = pair.reading();

    ConjugationForm {
        form,
        name: form.english().to_owned(),
        native_name: form.native().to_owned(),
        kanji: pair.text(),
        romaji: romaji::to_romaji(&reading),
        reading,
        formality: form.formality(),
        category: form.category(),
    }
}

/// The reading with its final character removed, used as the phonetic
/// stem wherever the surface stem may contain kanji.
fn reading_stem(verb: &VerbInfo) -> &str {
    let mut it = verb.reading.chars();
    it.next_back();
    it.as_str()
}

fn generate_forms(verb: &VerbInfo) -> Vec<ConjugationForm> {
    let mut forms = Vec::with_capacity(Form::CATALOGUE.len());
    let stem = verb.stem.as_str();
    let prefix = verb.compound_prefix.as_deref().unwrap_or_default();

    match (verb.kind, verb.irregular) {
        (VerbKind::Godan, _) => {
            let last = verb
                .ending
                .chars()
                .next_back()
                .map(to_hiragana_char)
                .and_then(Godan::for_ending);

            let Some(g) = last else {
                return forms;
            };

            let r_stem = reading_stem(verb);

            generate::godan(g, |p, suffix, form| {
                forms.push(build_form(form, &Fragments::new([stem], [r_stem], [p, suffix])));
            });
        }
        (VerbKind::Ichidan, _) => {
            let r_stem = reading_stem(verb);

            generate::ichidan(|suffix, form| {
                forms.push(build_form(form, &Fragments::new([stem], [r_stem], [suffix])));
            });
        }
        (VerbKind::Irregular, Some(IrregularKind::Suru)) => {
            generate::suru(|suffix, form| {
                forms.push(build_form(form, &Fragments::new([prefix], [prefix], [suffix])));
            });
        }
        (VerbKind::Irregular, Some(IrregularKind::Kuru)) => {
            // The kanji spelling keeps 来 on the surface while the
            // reading of 来 shifts per form; the kana spelling is
            // purely phonetic on both sides.
            let kanji_spelling = verb.dictionary_form.ends_with("来る");

            generate::kuru(|rp, suffix, form| {
                let pair = if kanji_spelling {
                    Fragments::new([prefix, "来"], [prefix, rp], [suffix])
                } else {
                    Fragments::new([prefix, rp], [prefix, rp], [suffix])
                };

                forms.push(build_form(form, &pair));
            });
        }
        (VerbKind::Irregular, Some(IrregularKind::Aru)) => {
            generate::aru(|surface, form| {
                forms.push(build_form(form, &Fragments::new([""], [""], [surface])));
            });
        }
        (VerbKind::Irregular, Some(IrregularKind::Iku)) => {
            let r_stem = reading_stem(verb);

            generate::godan(godan::IKU, |p, suffix, form| {
                forms.push(build_form(form, &Fragments::new([stem], [r_stem], [p, suffix])));
            });
        }
        (VerbKind::Irregular, Some(IrregularKind::Honorific)) => {
            generate::honorific(|suffix, form| {
                forms.push(build_form(form, &Fragments::new([stem], [stem], [suffix])));
            });
        }
        (VerbKind::Irregular, None) => {}
    }

    forms
}

/// Check the generator output against the fixed catalogue. Violations
/// are internal bugs, never user-input problems.
fn check_forms(verb: &VerbInfo, forms: &[ConjugationForm]) -> Result<(), ConjugateError> {
    if forms.len() != Form::CATALOGUE.len() {
        return Err(ConjugateError::ConjugationFailed(format!(
            "expected {} forms for {}, produced {}",
            Form::CATALOGUE.len(),
            verb.dictionary_form,
            forms.len()
        )));
    }

    for (produced, expected) in forms.iter().zip(Form::CATALOGUE) {
        if produced.form != expected {
            return Err(ConjugateError::ConjugationFailed(format!(
                "form {} out of catalogue order for {}",
                produced.form.id(),
                verb.dictionary_form
            )));
        }

        if produced.kanji.is_empty() || produced.reading.is_empty() || produced.romaji.is_empty() {
            return Err(ConjugateError::ConjugationFailed(format!(
                "empty rendering for {} of {}",
                produced.form.id(),
                verb.dictionary_form
            )));
        }
    }

    Ok(())
}

/// Conjugate the given dictionary-form verb into the full catalogue of
/// forms.
///
/// Pure except for the capture-time timestamp: repeated calls for the
/// same input produce identical forms regardless of interleaved calls
/// for other inputs.
pub fn conjugate(input: &str) -> Result<ConjugationResult, ConjugateError> {
    let verb = classify(input)?;
    let forms = generate_forms(&verb);

    if let Err(e) = check_forms(&verb, &forms) {
        tracing::warn!("{e}");
        return Err(e);
    }

    Ok(ConjugationResult {
        verb,
        forms,
        created_at: Utc::now(),
    })
}

/// The shortened colloquial potential (ら抜き) of a one-grade verb:
/// the same stem as the traditional potential with a suffix one
/// syllable shorter. Not part of the fixed catalogue; `None` for any
/// other verb class.
pub fn colloquial_potential(verb: &VerbInfo) -> Option<ConjugationForm> {
    if verb.kind != VerbKind::Ichidan {
        return None;
    }

    let pair = Fragments::new(
        [verb.stem.as_str()],
        [reading_stem(verb)],
        [generate::ICHIDAN_POTENTIAL_COLLOQUIAL],
    );

    Some(build_form(Form::PotentialColloquial, &pair))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_invariant() {
        // Non-compound: stem + ending reassembles the dictionary form.
        for verb in ["書く", "食べる", "行く", "ある", "する", "来る", "くださる"] {
            let result = conjugate(verb).unwrap();
            assert_eq!(
                format!("{}{}", result.verb.stem, result.verb.ending),
                verb
            );
            assert_eq!(result.verb.compound_prefix, None);
        }

        // Compound: prefix + ending reassembles the dictionary form,
        // and the ending is the irregular base itself.
        for (verb, prefix, ending) in [
            ("勉強する", "勉強", "する"),
            ("持ってくる", "持って", "くる"),
            ("電話する", "電話", "する"),
        ] {
            let result = conjugate(verb).unwrap();
            assert_eq!(result.verb.compound_prefix.as_deref(), Some(prefix));
            assert_eq!(result.verb.ending, ending);
            assert_eq!(
                format!("{prefix}{ending}"),
                result.verb.dictionary_form
            );
        }
    }

    #[test]
    fn lookup_by_identifier() {
        let result = conjugate("書く").unwrap();
        assert_eq!(result.get_by_id("te").unwrap().kanji, "書いて");
        assert_eq!(result.get_by_id("potential-plain").unwrap().kanji, "書ける");
        assert!(result.get_by_id("no-such-form").is_none());
        assert_eq!(result.get(Form::PastPlain).unwrap().kanji, "書いた");
    }

    #[test]
    fn serialization_round_trip() {
        for verb in ["書く", "食べる", "勉強する", "来る", "ある"] {
            let result = conjugate(verb).unwrap();
            let json = serde_json::to_string(&result).unwrap();
            let back: ConjugationResult = serde_json::from_str(&json).unwrap();
            assert_eq!(result, back, "{verb}");
        }
    }

    #[test]
    fn error_messages() {
        // Every error kind renders a human-readable message.
        assert!(!ConjugateError::EmptyInput.to_string().is_empty());
        assert!(ConjugateError::InvalidCharacters('!')
            .to_string()
            .contains('!'));
        assert!(ConjugateError::UnknownVerb("きれい".into())
            .to_string()
            .contains("きれい"));
        assert!(!ConjugateError::AmbiguousVerb("x".into())
            .to_string()
            .is_empty());
        assert!(!ConjugateError::ConjugationFailed("bug".into())
            .to_string()
            .is_empty());
    }
}
