//! Seedphrase CLI - generate BIP-39 mnemonics and derive seeds

use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::{debug, info};

use seedphrase::{
    config::Config,
    create_seed, logging,
    mnemonic::{Language, Strength},
};

/// What to run
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Generate fresh mnemonics
    Generate(GenerateArgs),
    /// Derive the seed of an existing phrase
    Seed {
        /// Phrase words, already joined
        phrase: String,
        /// Seed passphrase
        passphrase: String,
    },
    /// List languages and where each wordlist comes from
    Languages,
    /// Print usage
    Help,
}

/// Options for `generate`
#[derive(Debug, PartialEq, Eq)]
struct GenerateArgs {
    /// Language override
    language: Option<Language>,
    /// Strength override
    strength: Option<Strength>,
    /// Number of mnemonics to print
    count: usize,
    /// Passphrase used when printing seeds
    passphrase: String,
    /// Print the derived seed under each mnemonic
    show_seed: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            language: None,
            strength: None,
            count: 1,
            passphrase: String::new(),
            show_seed: false,
        }
    }
}

/// Parsed command line
#[derive(Debug, PartialEq, Eq)]
struct Cli {
    /// Explicit config file
    config_path: Option<PathBuf>,
    /// Selected command
    command: Command,
}

fn next_value<'a>(args: &mut impl Iterator<Item = &'a String>, flag: &str) -> anyhow::Result<&'a String> {
    args.next().with_context(|| format!("{flag} requires a value"))
}

fn parse_args(args: &[String]) -> anyhow::Result<Cli> {
    let mut config_path = None;
    let mut positional = Vec::new();
    let mut generate = GenerateArgs::default();
    // First flag seen that only `generate` understands
    let mut generate_flag = None;
    let mut passphrase_flag = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--language" | "-l" | "--strength" | "-s" | "--count" | "-n" | "--seed" => {
                generate_flag.get_or_insert(arg.as_str());
            }
            "--passphrase" | "-p" => {
                passphrase_flag.get_or_insert(arg.as_str());
            }
            _ => {}
        }
        match arg.as_str() {
            "--config" | "-c" => config_path = Some(PathBuf::from(next_value(&mut iter, arg)?)),
            "--language" | "-l" => generate.language = Some(next_value(&mut iter, arg)?.parse()?),
            "--strength" | "-s" => {
                let bits: usize = next_value(&mut iter, arg)?
                    .parse()
                    .context("--strength must be a number of bits")?;
                generate.strength = Some(Strength::from_bits(bits)?);
            }
            "--count" | "-n" => {
                generate.count = next_value(&mut iter, arg)?
                    .parse()
                    .context("--count must be a positive number")?;
            }
            "--passphrase" | "-p" => generate.passphrase.clone_from(next_value(&mut iter, arg)?),
            "--seed" => generate.show_seed = true,
            "--help" | "-h" => positional.insert(0, "help"),
            flag if flag.starts_with('-') => bail!("unknown option: {flag}"),
            word => positional.push(word),
        }
    }

    let command = match positional.split_first() {
        None | Some((&"help", _)) => Command::Help,
        Some((&"generate", [])) => Command::Generate(generate),
        Some((&"languages", [])) => Command::Languages,
        Some((&"seed", [])) => bail!("seed requires a mnemonic phrase"),
        Some((&"seed", words)) => Command::Seed {
            phrase: words.join(" "),
            passphrase: generate.passphrase,
        },
        Some((cmd, _)) => bail!("unexpected arguments for {cmd}"),
    };

    match &command {
        Command::Seed { .. } => {
            if let Some(flag) = generate_flag {
                bail!("{flag} is not valid for seed");
            }
        }
        Command::Languages => {
            if let Some(flag) = generate_flag.or(passphrase_flag) {
                bail!("{flag} is not valid for languages");
            }
        }
        Command::Generate(_) | Command::Help => {}
    }

    Ok(Cli { config_path, command })
}

fn print_help() {
    println!("Seedphrase v{} - BIP-39 mnemonics and seeds", seedphrase::VERSION);
    println!();
    println!("Usage: seedphrase [--config FILE] <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate           Generate new mnemonic(s)");
    println!("    -l, --language   Wordlist language (default: english)");
    println!("    -s, --strength   Entropy bits: 128, 160, 192, 224, 256 (default: 128)");
    println!("    -n, --count      Number of mnemonics (default: 1)");
    println!("        --seed       Also print the derived seed");
    println!("    -p, --passphrase Passphrase for --seed");
    println!("  seed <words...>    Print the seed of a mnemonic");
    println!("    -p, --passphrase Seed passphrase (default: empty)");
    println!("  languages          List supported languages");
    println!("  help               Show this help");
    println!();
    println!("Environment: SEEDPHRASE_LANGUAGE, SEEDPHRASE_STRENGTH,");
    println!("             SEEDPHRASE_WORDLIST_DIR, SEEDPHRASE_LOG");
}

fn run_generate(mut config: Config, args: GenerateArgs) -> anyhow::Result<()> {
    if let Some(language) = args.language {
        config.language = language;
    }
    if let Some(strength) = args.strength {
        config.strength = strength;
    }
    if args.count == 0 {
        bail!("--count must be at least 1");
    }

    let encoder = config
        .encoder()
        .with_context(|| format!("cannot load {} wordlist", config.language))?;

    info!(
        language = %config.language,
        bits = config.strength.bits(),
        count = args.count,
        "generating mnemonics"
    );

    for i in 1..=args.count {
        let phrase = encoder.generate(config.strength)?;
        if args.count > 1 {
            println!("# {i}");
        }
        println!("{phrase}");
        if args.show_seed {
            println!("{}", create_seed(&phrase, &args.passphrase).to_hex());
        }
    }
    Ok(())
}

fn run_languages(config: &Config) {
    let registry = config.registry();
    for language in Language::ALL {
        match registry.override_path(language) {
            Some(path) => println!("{:<20} {}", language.as_str(), path.display()),
            None => println!("{:<20} built-in", language.as_str()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    let config = match &cli.config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::load_default()?,
    }
    .apply_env()?;

    logging::init(&config.log_filter)?;
    debug!(config = ?config, "loaded configuration");

    match cli.command {
        Command::Help => print_help(),
        Command::Languages => run_languages(&config),
        Command::Generate(args) => run_generate(config, args)?,
        Command::Seed { phrase, passphrase } => {
            println!("{}", create_seed(&phrase, &passphrase).to_hex());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_parse_generate() {
        let cli = parse_args(&args(&[
            "generate", "--language", "Japanese", "-s", "256", "-n", "3", "--seed",
        ]))
        .unwrap();
        assert_eq!(cli.config_path, None);
        assert_eq!(
            cli.command,
            Command::Generate(GenerateArgs {
                language: Some(Language::Japanese),
                strength: Some(Strength::Bits256),
                count: 3,
                passphrase: String::new(),
                show_seed: true,
            })
        );
    }

    #[test]
    fn test_parse_seed() {
        let cli = parse_args(&args(&[
            "--config", "/etc/seedphrase.json", "seed", "legal", "winner", "-p", "TREZOR",
        ]))
        .unwrap();
        assert_eq!(cli.config_path, Some(PathBuf::from("/etc/seedphrase.json")));
        assert_eq!(
            cli.command,
            Command::Seed {
                phrase: "legal winner".to_string(),
                passphrase: "TREZOR".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_help_and_languages() {
        assert_eq!(parse_args(&[]).unwrap().command, Command::Help);
        assert_eq!(parse_args(&args(&["generate", "-h"])).unwrap().command, Command::Help);
        assert_eq!(parse_args(&args(&["languages"])).unwrap().command, Command::Languages);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["generate", "--strength", "100"])).is_err());
        assert!(parse_args(&args(&["generate", "--language", "invalid"])).is_err());
        assert!(parse_args(&args(&["generate", "--count"])).is_err());
        assert!(parse_args(&args(&["generate", "--bogus"])).is_err());
        assert!(parse_args(&args(&["seed"])).is_err());
        assert!(parse_args(&args(&["generate", "extra"])).is_err());
        assert!(parse_args(&args(&["frobnicate"])).is_err());
    }

    #[test]
    fn test_generate_flags_rejected_elsewhere() {
        let cases: [&[&str]; 4] = [&["--count", "2"], &["-l", "french"], &["--strength", "256"], &["--seed"]];
        for flag in cases {
            let mut seed = args(&["seed", "legal", "winner"]);
            seed.extend(args(flag));
            let err = parse_args(&seed).unwrap_err();
            assert!(err.to_string().contains("not valid for seed"), "{err}");

            let mut languages = args(&["languages"]);
            languages.extend(args(flag));
            let err = parse_args(&languages).unwrap_err();
            assert!(err.to_string().contains("not valid for languages"), "{err}");
        }

        let err = parse_args(&args(&["languages", "-p", "secret"])).unwrap_err();
        assert_eq!(err.to_string(), "-p is not valid for languages");

        // Still accepted where they apply
        assert!(parse_args(&args(&["generate", "-n", "2", "-p", "x", "--seed"])).is_ok());
        assert!(parse_args(&args(&["seed", "legal", "-p", "x"])).is_ok());
        assert_eq!(parse_args(&args(&["seed", "-n", "2", "-h"])).unwrap().command, Command::Help);
    }
}
