//! Entry point for the WASM application

pub fn main() {
    classdocs_frontend::start();
}
