#[cfg(not(target_arch = "wasm32"))]
mod cli;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::run()
}

// The wasm32 build ships the library bundle only.
#[cfg(target_arch = "wasm32")]
fn main() {}
