use clap::{value_t, App, Arg};
use savdsk::{ConvertOptions, DEFAULT_SAV_EXTENSION, TOTAL_SECTORS};
use savdsk_tool_lib::{convert_all, Direction};
use std::path::PathBuf;
use std::process::exit;

fn main() {
    savdsk_tool_lib::log::init();

    let arguments = App::new("dsk2sav")
        .version("0.1.0")
        .about("This program converts 2DD raw disk images into MSX-Player .sav files.")
        .arg(
            Arg::with_name("files")
                .required(true)
                .multiple(true)
                .takes_value(true)
                .value_name("filenames")
                .help("The raw images to convert"),
        )
        .arg(
            Arg::with_name("skip")
                .long("skip")
                .takes_value(true)
                .value_name("num")
                .default_value("1")
                .help("Number of leading sectors to leave out"),
        )
        .arg(
            Arg::with_name("ext")
                .long("ext")
                .takes_value(true)
                .value_name(".ext")
                .default_value(DEFAULT_SAV_EXTENSION)
                .help("Change the output file extension"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .takes_value(false)
                .help("Do not print per sector progress"),
        )
        .get_matches();

    let skip = value_t!(arguments, "skip", usize).unwrap_or_else(|e| e.exit());

    if skip > TOTAL_SECTORS {
        eprintln!("Error: --skip must be at most {}", TOTAL_SECTORS);
        exit(1);
    }

    let extension = match arguments.value_of("ext") {
        Some(e) => e,
        None => DEFAULT_SAV_EXTENSION,
    };

    let files: Vec<PathBuf> = match arguments.values_of("files") {
        Some(vals) => vals.map(PathBuf::from).collect(),
        None => {
            eprintln!("At least one image is required.");
            exit(1);
        }
    };

    let options = ConvertOptions::new(skip, extension);
    let failures = convert_all(
        &files,
        Direction::DskToSav,
        &options,
        arguments.is_present("quiet"),
    );

    if failures != 0 {
        exit(1);
    }
}
