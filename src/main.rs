mod catalog;
mod command;
mod config;
mod error;
mod playback_manager;
mod playlist_manager;
mod render;
mod session;
mod video;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use catalog::Catalog;
use command::Command;
use config::Config;
use log::{error, info, warn};
use session::Session;

fn log_level_from_env() -> log::LevelFilter {
    match std::env::var("VIDCONSOLE_LOG").ok().as_deref() {
        Some("off") => log::LevelFilter::Off,
        Some("error") => log::LevelFilter::Error,
        Some("warn") => log::LevelFilter::Warn,
        Some("debug") => log::LevelFilter::Debug,
        Some("trace") => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    }
}

fn load_or_create_config() -> Config {
    let Some(config_dir) = dirs::config_dir() else {
        warn!("No user config directory found. Using default configuration");
        return Config::default();
    };
    let config_file = config_dir.join("vidconsole.toml");

    if !config_file.exists() {
        let default_config = Config::default();
        info!(
            "Config file not found. Creating default config. path={}",
            config_file.display()
        );
        match toml::to_string(&default_config) {
            Ok(content) => {
                if let Err(err) = std::fs::write(&config_file, content) {
                    warn!("Failed to write default config: {}", err);
                }
            }
            Err(err) => warn!("Failed to serialize default config: {}", err),
        }
        return default_config;
    }

    match std::fs::read_to_string(&config_file) {
        Ok(content) => match toml::from_str::<Config>(&content) {
            Ok(config) => config,
            Err(err) => {
                error!("Failed to parse {}: {}", config_file.display(), err);
                Config::default()
            }
        },
        Err(err) => {
            error!("Failed to read {}: {}", config_file.display(), err);
            Config::default()
        }
    }
}

enum SearchKind<'a> {
    Title(&'a str),
    Tag(&'a str),
}

fn run_search<I>(
    session: &mut Session,
    config: &Config,
    input: &mut I,
    kind: SearchKind,
) -> std::io::Result<()>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let (term, matches) = match kind {
        SearchKind::Title(term) => (term, session.catalog.search_titles(term)),
        SearchKind::Tag(tag) => (tag, session.catalog.search_tag(tag)),
    };
    if matches.is_empty() {
        println!("{}", render::no_search_results(term));
        return Ok(());
    }
    println!("{}", render::search_results(term, &matches));
    if !config.ui.offer_play_after_search {
        return Ok(());
    }
    let video_ids: Vec<String> = matches
        .iter()
        .map(|video| video.video_id.clone())
        .collect();

    println!("{}", render::search_play_prompt());
    let Some(line) = input.next() else {
        return Ok(());
    };
    let answer = line?;
    match answer.trim().parse::<usize>() {
        Ok(number) if (1..=video_ids.len()).contains(&number) => {
            match session.playback.play(&session.catalog, &video_ids[number - 1]) {
                Ok(started) => println!("{}", render::play_started(&session.catalog, &started)),
                Err(err) => println!("{}", render::play_error(&err)),
            }
        }
        _ => println!("{}", render::search_play_declined()),
    }
    Ok(())
}

fn dispatch<I>(
    session: &mut Session,
    config: &Config,
    command: Command,
    input: &mut I,
) -> std::io::Result<()>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    match command {
        Command::NumberOfVideos => println!("{}", render::number_of_videos(&session.catalog)),
        Command::ShowAllVideos => println!("{}", render::all_videos(&session.catalog)),
        Command::Play { video_id } => {
            match session.playback.play(&session.catalog, &video_id) {
                Ok(started) => println!("{}", render::play_started(&session.catalog, &started)),
                Err(err) => println!("{}", render::play_error(&err)),
            }
        }
        Command::PlayRandom => match session.playback.play_random(&session.catalog) {
            Ok(started) => println!("{}", render::play_started(&session.catalog, &started)),
            Err(err) => println!("{}", render::play_error(&err)),
        },
        Command::Stop => match session.playback.stop() {
            Ok(video_id) => println!("{}", render::video_stopped(&session.catalog, &video_id)),
            Err(err) => println!("{}", render::stop_error(&err)),
        },
        Command::Pause => match session.playback.pause() {
            Ok(video_id) => println!("{}", render::video_paused(&session.catalog, &video_id)),
            Err(err) => println!("{}", render::pause_error(&session.catalog, &err)),
        },
        Command::Continue => match session.playback.resume() {
            Ok(video_id) => println!("{}", render::video_continued(&session.catalog, &video_id)),
            Err(err) => println!("{}", render::continue_error(&err)),
        },
        Command::ShowPlaying => {
            let current = session.playback.current();
            println!("{}", render::now_playing(&session.catalog, current.as_ref()));
        }
        Command::CreatePlaylist { name } => match session.playlists.create(&name) {
            Ok(()) => println!("{}", render::playlist_created(&name)),
            Err(err) => println!("{}", render::create_playlist_error(&err)),
        },
        Command::AddToPlaylist { name, video_id } => {
            match session.playlists.add_video(&name, &video_id, &session.catalog) {
                Ok(()) => println!("{}", render::video_added(&session.catalog, &name, &video_id)),
                Err(err) => println!("{}", render::add_to_playlist_error(&name, &err)),
            }
        }
        Command::RemoveFromPlaylist { name, video_id } => {
            match session
                .playlists
                .remove_video(&name, &video_id, &session.catalog)
            {
                Ok(()) => {
                    println!("{}", render::video_removed(&session.catalog, &name, &video_id))
                }
                Err(err) => println!("{}", render::remove_from_playlist_error(&name, &err)),
            }
        }
        Command::ClearPlaylist { name } => match session.playlists.clear(&name) {
            Ok(()) => println!("{}", render::playlist_cleared(&name)),
            Err(err) => println!("{}", render::clear_playlist_error(&name, &err)),
        },
        Command::DeletePlaylist { name } => match session.playlists.delete(&name) {
            Ok(()) => println!("{}", render::playlist_deleted(&name)),
            Err(err) => println!("{}", render::delete_playlist_error(&name, &err)),
        },
        Command::ShowAllPlaylists => {
            println!("{}", render::all_playlists(&session.playlists.list_all()));
        }
        Command::ShowPlaylist { name } => match session.playlists.list_videos(&name) {
            Ok(video_ids) => {
                let listing = render::playlist_videos(&session.catalog, &name, video_ids);
                println!("{}", listing);
            }
            Err(err) => println!("{}", render::show_playlist_error(&name, &err)),
        },
        Command::SearchVideos { term } => {
            run_search(session, config, input, SearchKind::Title(&term))?;
        }
        Command::SearchVideosWithTag { tag } => {
            run_search(session, config, input, SearchKind::Tag(&tag))?;
        }
        Command::Help => println!("{}", render::help_text()),
        // Exit is handled by the loop before dispatch.
        Command::Exit => {}
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut clog = colog::default_builder();
    clog.filter(None, log_level_from_env());
    clog.init();

    let config = load_or_create_config();

    // CLI argument overrides the configured catalog path.
    let catalog_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.library.catalog_path.clone());
    let catalog = match &catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    info!("{} videos in the catalog", catalog.len());

    let mut session = Session::new(catalog);

    println!("Hello and welcome to the video console! Type HELP for a list of commands.");
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", config.ui.prompt);
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match command::parse(&line) {
            Ok(Command::Exit) => break,
            Ok(parsed) => dispatch(&mut session, &config, parsed, &mut lines)?,
            Err(err) => println!("{}", render::parse_error(&err)),
        }
    }
    info!("Session ended");
    Ok(())
}
