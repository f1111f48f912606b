use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameshelf_core::EnrichedEntry;
use gameshelf_igdb::{Credentials, IgdbClient};
use gameshelf_import::sources::SteamLibrary;
use gameshelf_import::{
    run_import, ChannelSink, FixedPacer, ImportEvent, ImportOptions, ImportStage, MatchCache,
};
use gameshelf_steam::{steam_api_key, SteamClient};

/// Run the import command.
pub(crate) fn run_import_command(steam_id: &str, limit: Option<usize>, json: bool) {
    let creds = match Credentials::load() {
        Ok(creds) => creds,
        Err(e) => {
            eprintln!("{}", e.if_supports_color(Stdout, |t| t.red()));
            std::process::exit(1);
        }
    };
    let api_key = match steam_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("{}", e.if_supports_color(Stdout, |t| t.red()));
            std::process::exit(1);
        }
    };

    log::debug!("Importing library for steam id {}", steam_id);
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    rt.block_on(async {
        let spinner = auth_spinner();
        let catalog = match IgdbClient::new(&creds).await {
            Ok(client) => client,
            Err(e) => {
                spinner.finish_and_clear();
                eprintln!("{}", e.if_supports_color(Stdout, |t| t.red()));
                std::process::exit(1);
            }
        };
        spinner.finish_and_clear();

        let steam = match SteamClient::new(api_key) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("{}", e.if_supports_color(Stdout, |t| t.red()));
                std::process::exit(1);
            }
        };
        let library = SteamLibrary::new(steam, steam_id.to_string());
        let cache = MatchCache::new();
        let options = ImportOptions {
            limit,
            ..ImportOptions::default()
        };

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        // The sink is owned by the import future; dropping it when the
        // import finishes is what terminates the render loop below.
        let import = async {
            let sink = ChannelSink::new(tx);
            run_import(&library, &catalog, &cache, &FixedPacer, &sink, &options).await
        };

        let render = async move {
            let quiet = json;
            let mut bar: Option<ProgressBar> = None;
            let fetch = fetch_spinner(quiet);

            while let Some(event) = rx.recv().await {
                // Terminal stages tear the progress display down no
                // matter which event carried them.
                if matches!(event.stage(), ImportStage::Complete | ImportStage::Failed) {
                    fetch.finish_and_clear();
                    if let Some(bar) = bar.take() {
                        bar.finish_and_clear();
                    }
                    continue;
                }

                match event {
                    ImportEvent::FetchStarted => {}
                    ImportEvent::FetchComplete { total } => {
                        fetch.finish_and_clear();
                        if !quiet {
                            bar = Some(match_bar(total));
                        }
                    }
                    ImportEvent::EntryMatched {
                        title,
                        catalog_name,
                        score,
                        ..
                    } => {
                        if let Some(bar) = &bar {
                            bar.println(format!(
                                "  {} {} -> {} ({})",
                                "\u{2713}".if_supports_color(Stdout, |t| t.green()),
                                title,
                                catalog_name.if_supports_color(Stdout, |t| t.cyan()),
                                score,
                            ));
                        }
                    }
                    ImportEvent::EntryUnmatched { title, .. } => {
                        if let Some(bar) = &bar {
                            bar.println(format!(
                                "  {} {} {}",
                                "\u{2717}".if_supports_color(Stdout, |t| t.yellow()),
                                title,
                                "(no match)".if_supports_color(Stdout, |t| t.dimmed()),
                            ));
                        }
                    }
                    ImportEvent::BatchComplete {
                        current, message, ..
                    } => {
                        if let Some(bar) = &bar {
                            bar.set_position(current as u64);
                            bar.set_message(message);
                        }
                    }
                    ImportEvent::Complete { .. } | ImportEvent::Failed { .. } => {}
                }
            }
        };

        let (result, ()) = tokio::join!(import, render);

        match result {
            Ok(entries) if json => print_json(&entries),
            Ok(entries) => print_summary(&entries),
            Err(e) => {
                eprintln!("{}", e.if_supports_color(Stdout, |t| t.red()));
                std::process::exit(1);
            }
        }
    });
}

fn auth_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_message("Authenticating with IGDB...");
    pb
}

fn fetch_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_message("Fetching Steam library...");
    pb
}

fn match_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::with_template("  [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("static pattern")
            .progress_chars("=> "),
    );
    pb
}

fn print_json(entries: &[EnrichedEntry]) {
    match serde_json::to_string_pretty(entries) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("Failed to serialize results: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_summary(entries: &[EnrichedEntry]) {
    let matched = entries.iter().filter(|e| e.is_matched()).count();

    println!();
    println!(
        "{} {} of {} games matched",
        "Import complete:".if_supports_color(Stdout, |t| t.bold()),
        matched.if_supports_color(Stdout, |t| t.green()),
        entries.len(),
    );

    let unmatched: Vec<&EnrichedEntry> = entries.iter().filter(|e| !e.is_matched()).collect();
    if !unmatched.is_empty() {
        println!();
        println!("{}", "Unmatched:".if_supports_color(Stdout, |t| t.yellow()));
        for entry in unmatched {
            println!(
                "  {}",
                entry.entry.title.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
}
