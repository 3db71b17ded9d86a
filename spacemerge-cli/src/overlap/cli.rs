use clap::{Arg, ArgAction, Command, arg};

pub const OVERLAP_CMD: &str = "overlap";

pub fn create_overlap_cli() -> Command {
    Command::new(OVERLAP_CMD)
        .about("Check whether two spaces overlap or touch.")
        .arg(
            Arg::new("first")
                .required(false)
                .allow_hyphen_values(true)
                .help("First space as <start>,<size> (default: 6,3)"),
        )
        .arg(
            Arg::new("second")
                .required(false)
                .allow_hyphen_values(true)
                .help("Second space as <start>,<size> (default: 10,8)"),
        )
        .arg(
            arg!(-c --config <TOML>)
                .required(false)
                .help("TOML file with [first] and [second] spaces"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the result as JSON"),
        )
}
