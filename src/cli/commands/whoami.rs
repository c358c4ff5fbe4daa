//! whoami command - Sign in and show the current account

use anyhow::Result;

use super::{block_on, signed_in_engine, Context};
use crate::ui::output;

/// Sign in and print the account.
pub fn whoami(ctx: &Context) -> Result<()> {
    block_on(whoami_async(ctx))
}

async fn whoami_async(ctx: &Context) -> Result<()> {
    let engine = signed_in_engine(ctx).await?;
    let session = engine.session();

    if let Some(account) = session.current() {
        println!("{} <{}>", account.name, account.email);
        output::print(format!("role: {}", account.role), ctx.verbosity);
    }
    Ok(())
}
