use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameshelf_igdb::{
    config_path, credential_sources, save_to_file, CredentialSource, Credentials,
};
use gameshelf_steam::steam_key_source;

fn mask_value(s: &str) -> String {
    // Character prefix, not a byte slice: credentials can start with
    // multibyte characters.
    let prefix: String = s.chars().take(2).collect();
    if s.chars().count() <= 2 {
        "****".to_string()
    } else {
        format!("{}****", prefix)
    }
}

/// Show current credentials and their sources.
pub(crate) fn run_config_show() {
    let path = config_path();
    let sources = credential_sources();

    println!(
        "{}",
        "GameShelf Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();

    match &path {
        Some(p) if p.exists() => {
            println!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            println!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            println!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    println!();

    let creds = Credentials::load().ok();

    let fields: &[(&str, &CredentialSource, Option<String>, bool)] = &[
        (
            "igdb client_id",
            &sources.client_id,
            creds.as_ref().map(|c| c.client_id.clone()),
            false,
        ),
        (
            "igdb client_secret",
            &sources.client_secret,
            creds.as_ref().map(|c| c.client_secret.clone()),
            true,
        ),
    ];

    for (name, source, value, is_secret) in fields {
        let source_str = format!("({})", source);
        let shown = match (source, value) {
            (CredentialSource::Missing, _) | (_, None) => None,
            (_, Some(v)) if *is_secret => Some(mask_value(v)),
            (_, Some(v)) => Some(v.clone()),
        };
        match shown {
            Some(v) => println!(
                "  {} {} {}",
                format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
                v,
                source_str.if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => println!(
                "  {} {} {}",
                format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
                "not set".if_supports_color(Stdout, |t| t.yellow()),
                source_str.if_supports_color(Stdout, |t| t.dimmed()),
            ),
        }
    }

    println!(
        "  {} {}",
        "steam api_key:".if_supports_color(Stdout, |t| t.cyan()),
        format!("({})", steam_key_source()).if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Interactively set up IGDB credentials.
pub(crate) fn run_config_setup() {
    println!(
        "{}",
        "IGDB Credential Setup".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();
    println!("  Create a Twitch application at https://dev.twitch.tv/console/apps");
    println!("  and paste its client id and secret below.");
    println!();

    let existing = Credentials::load().ok();

    let client_id = read_line("Client ID", existing.as_ref().map(|c| c.client_id.as_str()));
    let client_secret = read_line(
        "Client Secret",
        existing.as_ref().map(|c| c.client_secret.as_str()),
    );

    let creds = Credentials {
        client_id,
        client_secret,
    };

    match save_to_file(&creds) {
        Ok(path) => {
            println!();
            println!(
                "  {} {}",
                "Saved to".if_supports_color(Stdout, |t| t.green()),
                path.display(),
            );
            println!(
                "  {}",
                "Set GAMESHELF_STEAM_API_KEY or add [steam] api_key for Steam imports."
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        Err(e) => {
            eprintln!("{}", e.if_supports_color(Stdout, |t| t.red()));
            std::process::exit(1);
        }
    }
}

/// Print the config file path.
pub(crate) fn run_config_path() {
    match config_path() {
        Some(p) => println!("{}", p.display()),
        None => {
            eprintln!("Could not determine config directory");
            std::process::exit(1);
        }
    }
}

fn read_line(prompt: &str, default: Option<&str>) -> String {
    loop {
        if let Some(def) = default {
            print!("  {} [{}]: ", prompt, mask_value(def));
        } else {
            print!("  {}: ", prompt);
        }
        let _ = std::io::stdout().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err() {
            eprintln!("Failed to read input");
            std::process::exit(1);
        }
        let trimmed = input.trim().to_string();

        if trimmed.is_empty() {
            if let Some(def) = default {
                return def.to_string();
            }
            println!(
                "    {}",
                "This field is required.".if_supports_color(Stdout, |t| t.yellow()),
            );
            continue;
        }
        return trimmed;
    }
}
