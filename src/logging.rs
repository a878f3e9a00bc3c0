//! Console logging via the `log` facade.

use log::Level;

pub fn init(level: Level) {
    wasm_logger::init(wasm_logger::Config::new(level));
}
