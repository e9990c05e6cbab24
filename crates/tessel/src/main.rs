use clap::Parser;

mod cli;
mod workers;

fn main() {
    if let Err(err) = cli::App::parse().run() {
        eprintln!("{} {err:#}", console::style("error:").red().bold());
        std::process::exit(1);
    }
}
