//! tombot's entry point.

use tombot::{
    cli::{get_args, run},
    error::default_error_handler,
    logger::init_logger,
};

fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}
