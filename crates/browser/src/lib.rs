//! Terminal browser for the startup directory.
//!
//! Loads the catalog once, then reads commands line by line, applies them to
//! the filter state and prints the resulting page.

pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

use std::future::Future;
use std::io::Write;

use catalog::Catalog;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub use command::Command;
pub use config::Config;
pub use error::{BrowserError, CommandError, Result};
pub use session::{Flow, Session};

/// Loads the catalog named by `config`.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    Ok(Catalog::load(&config.startups_path, &config.categories_path)?)
}

/// Runs an interactive session until `quit`, end of input, or `shutdown` resolves.
///
/// The first page is shown before any input is read.
pub async fn run_session<R, W>(
    catalog: &Catalog,
    config: &Config,
    input: R,
    out: &mut W,
    shutdown: impl Future<Output = ()>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = Session::new(catalog, config.page_size);
    session.show(out)?;
    out.flush()?;

    // Split on raw bytes so a line that is not valid UTF-8 is reported like
    // any other bad input instead of ending the session.
    let mut lines = input.split(b'\n');
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            line = lines.next_segment() => line?,
            () = &mut shutdown => {
                tracing::info!("shutdown requested, leaving session");
                break;
            }
        };

        let Some(line) = line else {
            tracing::debug!("end of input");
            break;
        };

        let line = String::from_utf8_lossy(&line);
        let flow = session.handle_line(&line, out)?;
        out.flush()?;
        if flow == Flow::Quit {
            break;
        }
    }

    Ok(())
}
