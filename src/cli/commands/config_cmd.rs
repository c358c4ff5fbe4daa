//! config command - Show the effective configuration

use anyhow::{Context as _, Result};

use super::Context;

/// Print the effective configuration as TOML.
///
/// Defaults and command-line overrides are applied, so the output shows
/// exactly what the other commands will use.
pub fn show(ctx: &Context) -> Result<()> {
    let rendered = ctx
        .config
        .to_effective_toml()
        .context("Failed to render config")?;

    match ctx.config.path() {
        Some(path) => println!("# loaded from {}", path.display()),
        None => println!("# no config file found; showing defaults"),
    }
    print!("{}", rendered);
    Ok(())
}
