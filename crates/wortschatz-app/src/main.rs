use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wortschatz_config::Config;
use wortschatz_types::DictionaryEntry;
use wortschatz_wiktionary::{WiktionaryClient, featured_words, fetch_word, random_words, search_words};

#[derive(Parser)]
#[command(name = "wortschatz")]
#[command(about = "German vocabulary lookup backed by de.wiktionary.org")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for words matching a query
    Search { query: String },
    /// Look up a single word
    Word { word: String },
    /// Print the featured word list
    Featured,
    /// Discover words by searching random common stems
    Random {
        #[arg(long, default_value_t = 20)]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let config = Config::new();
    let client = WiktionaryClient::new(
        &config.wiktionary,
        Duration::from_secs(config.timeout_seconds),
    )?;
    tracing::debug!("querying {}", config.wiktionary.api_url);

    match args.command {
        Command::Search { query } => {
            let entries = search_words(&client, &query).await;
            if entries.is_empty() {
                println!("Keine Treffer für {query:?}.");
            }
            for entry in &entries {
                print_entry(entry);
            }
        }
        Command::Word { word } => match fetch_word(&client, &word).await {
            Some(entry) => print_entry(&entry),
            None => println!("Kein Eintrag für {word:?} gefunden."),
        },
        Command::Featured => {
            for word in featured_words() {
                println!("{word}");
            }
        }
        Command::Random { count } => {
            for word in random_words(&client, count).await {
                println!("{word}");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();
}

fn print_entry(entry: &DictionaryEntry) {
    let word = &entry.word;

    println!("{} ({}, {})", word.word, word.word_type, word.category);
    println!("  Silben: {}  Schwierigkeit: {}/5", word.pronunciation, word.difficulty);

    if let Some(genus) = word.genus {
        let plural = word.plural.as_deref().unwrap_or("—");
        println!("  Genus: {}  Plural: {}", genus.as_str(), plural);
    }
    if let Some(conjugation) = &word.conjugation {
        println!(
            "  Konjugation: {} · {} · {} ({})",
            conjugation.present_third,
            conjugation.past_simple,
            conjugation.past_participle,
            conjugation.auxiliary
        );
    }

    for definition in &entry.definitions {
        println!("  {}. {}", definition.order, definition.text);
    }
    for example in &entry.examples {
        println!("  > {}  [{}]", example.text, example.highlighted_word);
    }
    if !word.synonyms.is_empty() {
        println!("  Synonyme: {}", word.synonyms.join(", "));
    }
    if !word.antonyms.is_empty() {
        println!("  Gegenwörter: {}", word.antonyms.join(", "));
    }
    println!();
}
