use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameshelf_core::{clean_title, name_variants, score_candidate, MIN_MATCH_SCORE};
use gameshelf_igdb::{Credentials, IgdbClient};

/// Run the search command: query the catalog once and print scored
/// candidates for the given name.
pub(crate) fn run_search(query: &str) {
    let creds = match Credentials::load() {
        Ok(creds) => creds,
        Err(e) => {
            eprintln!("{}", e.if_supports_color(Stdout, |t| t.red()));
            std::process::exit(1);
        }
    };

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    rt.block_on(async {
        let client = match IgdbClient::new(&creds).await {
            Ok(client) => client,
            Err(e) => {
                eprintln!("{}", e.if_supports_color(Stdout, |t| t.red()));
                std::process::exit(1);
            }
        };

        let cleaned = clean_title(query);
        let variants = name_variants(query);

        let candidates = match client.search(&cleaned).await {
            Ok(candidates) => candidates,
            Err(e) => {
                eprintln!("{}", e.if_supports_color(Stdout, |t| t.red()));
                std::process::exit(1);
            }
        };

        if candidates.is_empty() {
            println!("No results for {:?}", cleaned);
            return;
        }

        let mut scored: Vec<_> = candidates
            .into_iter()
            .map(|c| {
                let score = score_candidate(&c, &variants, None);
                (c, score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        println!(
            "{} {:?}",
            "Results for".if_supports_color(Stdout, |t| t.bold()),
            cleaned,
        );
        println!();

        for (candidate, score) in &scored {
            let year = candidate
                .release_year()
                .map_or("????".to_string(), |y| y.to_string());
            let marker = if *score >= MIN_MATCH_SCORE {
                "\u{2713}"
            } else {
                " "
            };
            println!(
                "  {} {:>3}  {} ({})  {}",
                marker.if_supports_color(Stdout, |t| t.green()),
                score,
                candidate.name.if_supports_color(Stdout, |t| t.cyan()),
                year,
                format!("id {}", candidate.id).if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    });
}
