use std::io::{self, Write};
use std::process;
use log::{error, LevelFilter};

use antarctic_kit::utils::logger::Logger;
use antarctic_kit::commands::{build_cli, AntarcticKitCommandFactory, CommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };

    let logger = match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
            // Command summaries go to the same file as the log records
            match Logger::new(log_file) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(1);
                }
            }
        },
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_env("RUST_LOG")
                .init();
            Logger::disabled()
        },
    };

    let factory = AntarcticKitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = command.execute(&mut out).and_then(|_| out.flush().map_err(Into::into)) {
                error!("Command execution error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            process::exit(1);
        }
    };
}
