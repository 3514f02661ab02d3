use clap::Parser;

mod commands;
mod core;

use crate::core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "bru2postman")]
#[command(about = "Convert a Bruno collection (.bru files) into a Postman v2.1 collection")]
#[command(version = crate::core::version::app_version())]
struct Args {
    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,

    #[command(flatten)]
    convert: commands::convert::ConvertArgs,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    bru_lib::core::logger::Logger::init(args.debug);
    commands::convert::execute_convert(&args.convert)
}
