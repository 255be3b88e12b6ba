use clap::{App, Arg};
use savdsk::{ConvertOptions, DEFAULT_DSK_EXTENSION};
use savdsk_tool_lib::{convert_all, Direction};
use std::path::PathBuf;
use std::process::exit;

fn main() {
    savdsk_tool_lib::log::init();

    let arguments = App::new("sav2dsk")
        .version("0.1.0")
        .about("This program converts MSX-Player .sav files into 2DD raw disk images.")
        .arg(
            Arg::with_name("files")
                .required(true)
                .multiple(true)
                .takes_value(true)
                .value_name("filenames")
                .help("The sav files to convert"),
        )
        .arg(
            Arg::with_name("ext")
                .long("ext")
                .takes_value(true)
                .value_name(".ext")
                .default_value(DEFAULT_DSK_EXTENSION)
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

    let extension = match arguments.value_of("ext") {
        Some(e) => e,
        None => DEFAULT_DSK_EXTENSION,
    };

    let files: Vec<PathBuf> = match arguments.values_of("files") {
        Some(vals) => vals.map(PathBuf::from).collect(),
        None => {
            eprintln!("At least one sav file is required.");
            exit(1);
        }
    };

    let options = ConvertOptions::for_dsk().with_extension(extension);
    let failures = convert_all(
        &files,
        Direction::SavToDsk,
        &options,
        arguments.is_present("quiet"),
    );

    if failures != 0 {
        exit(1);
    }
}
