use std::process::exit;

use contact_book::prelude::run_app;

fn main() {
    env_logger::init();

    if let Err(err) = run_app() {
        log::error!("{err:?}");
        eprintln!("Error: {err}");
        exit(1);
    }
}
