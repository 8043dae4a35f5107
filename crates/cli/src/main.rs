use anyhow::{bail, Context, Result};
use clap::Parser;
use lib::{colloquial_potential, conjugate, Formality, VerbKind};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "katsuyo", about = "Conjugate a Japanese verb given in dictionary form")]
struct Args {
    /// The verb to conjugate, in dictionary form. Kana, kanji or a mix.
    verb: String,
    /// Print a single form by its identifier (such as "te" or
    /// "potential-plain") instead of the full table.
    #[arg(long, value_name = "id")]
    form: Option<String>,
    /// Only print polite forms.
    #[arg(long)]
    polite: bool,
    /// Print the full result as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    let result =
        conjugate(&args.verb).with_context(|| format!("Cannot conjugate `{}`", args.verb))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if let Some(id) = &args.form {
        let Some(form) = result.get_by_id(id) else {
            bail!("No such form `{id}`");
        };

        println!("{} ({}) {}", form.kanji, form.reading, form.romaji);
        return Ok(());
    }

    let verb = &result.verb;

    println!(
        "{} ({}) {} [{:?}]",
        verb.dictionary_form, verb.reading, verb.romaji, verb.kind
    );

    if let Some(prefix) = &verb.compound_prefix {
        println!("compound prefix: {prefix}");
    }

    for form in &result.forms {
        if args.polite && form.formality != Formality::Polite {
            continue;
        }

        println!(
            "{:<28} {} ({}) {}",
            form.form.id(),
            form.kanji,
            form.reading,
            form.romaji
        );
    }

    // The one-grade class has a second potential in colloquial use.
    if verb.kind == VerbKind::Ichidan && !args.polite {
        if let Some(form) = colloquial_potential(verb) {
            println!(
                "{:<28} {} ({}) {}",
                form.form.id(),
                form.kanji,
                form.reading,
                form.romaji
            );
        }
    }

    Ok(())
}
