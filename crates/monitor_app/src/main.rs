mod platform;

use clap::Parser;

fn main() {
    let options = platform::Options::parse();
    if let Err(err) = platform::run_app(options) {
        eprintln!("monitor_app failed: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  Caused by: {cause}");
        }
        std::process::exit(1);
    }
}
