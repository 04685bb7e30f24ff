// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, Flags};
use iced_reel::playlist::{read_playlist_file, VideoRef};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: iced_reel [OPTIONS] <VIDEO>...

Options:
  --playlist <FILE>   Read video paths from FILE (one per line, # comments)
  --data-dir <DIR>    Store the resume file under DIR
  -h, --help          Print this help
";

fn main() -> ExitCode {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let playlist_file: Option<PathBuf> = match args.opt_value_from_str("--playlist") {
        Ok(value) => value,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };
    let data_dir: Option<String> = match args.opt_value_from_str("--data-dir") {
        Ok(value) => value,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let mut videos: Vec<VideoRef> = Vec::new();
    if let Some(path) = playlist_file {
        match read_playlist_file(&path) {
            Ok(entries) => videos.extend(entries),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    for arg in args.finish() {
        match arg.into_string() {
            Ok(s) => videos.push(VideoRef::from_path(PathBuf::from(s))),
            Err(raw) => {
                eprintln!("error: argument {raw:?} is not valid UTF-8");
                return ExitCode::from(2);
            }
        }
    }

    if videos.is_empty() {
        eprint!("{USAGE}");
        return ExitCode::from(2);
    }

    match app::run(Flags { videos, data_dir }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
