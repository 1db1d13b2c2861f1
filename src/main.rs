use env_logger::Env;
use log::debug;
use std::{env, io, process};

use outcodes::{run, Config};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = match Config::from_args(env::args()) {
        Ok(config) => config,
        Err(err) => {
            println!("{}", err);
            process::exit(1);
        }
    };

    if let Err(err) = run(&config, io::stdout()) {
        // printed directly so it shows whatever RUST_LOG says
        eprintln!("{}", err);
        debug!("{:?}", err);
        process::exit(1);
    }
}
