mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

use std::ffi::OsString;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

use crate::settings::Settings;

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<OsString>) -> i32 {
    let flags = match parse(args) {
        Ok(flags) => flags,
        Err(e) => e.exit(),
    };
    quiet::set(flags.quiet);

    let saved = Settings::load_from_file().unwrap_or_else(|e| {
        prompts::settings_unreadable(&e);
        Settings::default()
    });

    match Context::new(flags, saved).and_then(|mut ctx| ctx.run()) {
        Ok(()) => 0,
        Err(e) => {
            prompts::error(&format!("Error: {e}"));
            e.exit_code()
        }
    }
}
