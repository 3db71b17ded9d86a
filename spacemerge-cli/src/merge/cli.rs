use clap::{Arg, ArgAction, Command, arg};

pub const MERGE_CMD: &str = "merge";

pub fn create_merge_cli() -> Command {
    Command::new(MERGE_CMD)
        .about("Check whether two spaces overlap and print their merged space.")
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
