//! Console command grammar and parser.
//!
//! Command words are case-insensitive; arguments are whitespace-separated
//! and taken verbatim. Arity is checked here so the dispatch code only ever
//! sees complete commands.

/// One parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, video_id: String },
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowAllPlaylists,
    ShowPlaylist { name: String },
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty command line")]
    Empty,
    #[error("unknown command {0}")]
    UnknownCommand(String),
    #[error("{command} takes {expected} argument(s)")]
    WrongArgumentCount { command: String, expected: usize },
}

fn one_arg(command: &str, args: &[&str]) -> Result<String, ParseError> {
    if args.len() != 1 {
        return Err(ParseError::WrongArgumentCount {
            command: command.to_string(),
            expected: 1,
        });
    }
    Ok(args[0].to_string())
}

fn two_args(command: &str, args: &[&str]) -> Result<(String, String), ParseError> {
    if args.len() != 2 {
        return Err(ParseError::WrongArgumentCount {
            command: command.to_string(),
            expected: 2,
        });
    }
    Ok((args[0].to_string(), args[1].to_string()))
}

fn no_args(command: &str, args: &[&str], parsed: Command) -> Result<Command, ParseError> {
    if !args.is_empty() {
        return Err(ParseError::WrongArgumentCount {
            command: command.to_string(),
            expected: 0,
        });
    }
    Ok(parsed)
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let mut parts = line.split_whitespace();
    let word = parts.next().ok_or(ParseError::Empty)?;
    let args: Vec<&str> = parts.collect();
    let command = word.to_uppercase();
    match command.as_str() {
        "NUMBER_OF_VIDEOS" => no_args(&command, &args, Command::NumberOfVideos),
        "SHOW_ALL_VIDEOS" => no_args(&command, &args, Command::ShowAllVideos),
        "PLAY" => Ok(Command::Play {
            video_id: one_arg(&command, &args)?,
        }),
        "PLAY_RANDOM" => no_args(&command, &args, Command::PlayRandom),
        "STOP" => no_args(&command, &args, Command::Stop),
        "PAUSE" => no_args(&command, &args, Command::Pause),
        "CONTINUE" => no_args(&command, &args, Command::Continue),
        "SHOW_PLAYING" => no_args(&command, &args, Command::ShowPlaying),
        "CREATE_PLAYLIST" => Ok(Command::CreatePlaylist {
            name: one_arg(&command, &args)?,
        }),
        "ADD_TO_PLAYLIST" => {
            let (name, video_id) = two_args(&command, &args)?;
            Ok(Command::AddToPlaylist { name, video_id })
        }
        "REMOVE_FROM_PLAYLIST" => {
            let (name, video_id) = two_args(&command, &args)?;
            Ok(Command::RemoveFromPlaylist { name, video_id })
        }
        "CLEAR_PLAYLIST" => Ok(Command::ClearPlaylist {
            name: one_arg(&command, &args)?,
        }),
        "DELETE_PLAYLIST" => Ok(Command::DeletePlaylist {
            name: one_arg(&command, &args)?,
        }),
        "SHOW_ALL_PLAYLISTS" => no_args(&command, &args, Command::ShowAllPlaylists),
        "SHOW_PLAYLIST" => Ok(Command::ShowPlaylist {
            name: one_arg(&command, &args)?,
        }),
        "SEARCH_VIDEOS" => Ok(Command::SearchVideos {
            term: one_arg(&command, &args)?,
        }),
        "SEARCH_VIDEOS_WITH_TAG" => Ok(Command::SearchVideosWithTag {
            tag: one_arg(&command, &args)?,
        }),
        "HELP" => no_args(&command, &args, Command::Help),
        "EXIT" => no_args(&command, &args, Command::Exit),
        _ => Err(ParseError::UnknownCommand(word.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, Command, ParseError};

    #[test]
    fn test_parse_no_argument_commands() {
        assert_eq!(parse("NUMBER_OF_VIDEOS"), Ok(Command::NumberOfVideos));
        assert_eq!(parse("STOP"), Ok(Command::Stop));
        assert_eq!(parse("EXIT"), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_is_case_insensitive_on_command_word() {
        assert_eq!(
            parse("play amazing_cats_video_id"),
            Ok(Command::Play {
                video_id: "amazing_cats_video_id".to_string(),
            })
        );
        assert_eq!(parse("Show_Playing"), Ok(Command::ShowPlaying));
    }

    #[test]
    fn test_parse_preserves_argument_casing() {
        assert_eq!(
            parse("CREATE_PLAYLIST My_List"),
            Ok(Command::CreatePlaylist {
                name: "My_List".to_string(),
            })
        );
        assert_eq!(
            parse("add_to_playlist My_List some_video_id"),
            Ok(Command::AddToPlaylist {
                name: "My_List".to_string(),
                video_id: "some_video_id".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert_eq!(
            parse("PLAY"),
            Err(ParseError::WrongArgumentCount {
                command: "PLAY".to_string(),
                expected: 1,
            })
        );
        assert_eq!(
            parse("ADD_TO_PLAYLIST only_one"),
            Err(ParseError::WrongArgumentCount {
                command: "ADD_TO_PLAYLIST".to_string(),
                expected: 2,
            })
        );
        assert_eq!(
            parse("STOP now"),
            Err(ParseError::WrongArgumentCount {
                command: "STOP".to_string(),
                expected: 0,
            })
        );
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert_eq!(
            parse("REWIND"),
            Err(ParseError::UnknownCommand("REWIND".to_string()))
        );
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(parse(""), Err(ParseError::Empty));
    }
}
