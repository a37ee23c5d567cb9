use std::path::Path;

use tessera_core::config;

use super::fail;

/// Creates `~/.config/tessera/config.toml` with every option commented.
///
/// An existing file is left untouched.
pub fn execute() {
    let Some(dir) = config::config_dir() else {
        fail("could not determine home directory.");
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        fail(format!("could not create {}: {e}", dir.display()));
    }

    write_if_missing(&dir.join("config.toml"), &config::template());
}

fn write_if_missing(path: &Path, content: &str) {
    if path.exists() {
        println!("Already exists: {}", path.display());
        return;
    }

    match std::fs::write(path, content) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => fail(format!("could not write {}: {e}", path.display())),
    }
}
