//! drivelog main entrypoint.

use drivelog::run;
use drivelog::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(format!("{}", e));
        std::process::exit(1);
    }
}
