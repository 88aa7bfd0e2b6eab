//! Interactive session: owns the filter state and drives the pipeline.

use std::io::Write;

use catalog::{Catalog, DatasetSource};
use query::{CachedPipeline, FilterChange, FilterState, PageSize, QueryPipeline};

use crate::Result;
use crate::command::{Command, HELP};
use crate::render::{render_categories, render_view};

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A browsing session over one catalog.
pub struct Session<'a> {
    catalog: &'a Catalog,
    pipeline: CachedPipeline<'a>,
    state: FilterState,
}

impl<'a> Session<'a> {
    /// Starts a session on page 1 with no filters.
    pub fn new(catalog: &'a Catalog, page_size: PageSize) -> Self {
        Self {
            catalog,
            pipeline: CachedPipeline::new(QueryPipeline::new(catalog, page_size)),
            state: FilterState::new(),
        }
    }

    /// Returns the current filter state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Renders the current page.
    pub fn show(&mut self, out: &mut impl Write) -> Result<()> {
        let view = self.pipeline.run(&self.state);

        // Keep the stored page in range so next/prev step from what is shown.
        self.state.page = view.page as i64;

        render_view(out, &view, &self.state, self.catalog.categories())?;
        Ok(())
    }

    /// Handles one parsed command, writing any output to `out`.
    #[tracing::instrument(level = "debug", skip(self, out))]
    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        match command {
            Command::Change(change) => self.change(change, out)?,
            Command::ToggleSort => {
                let order = self.state.sort.toggled();
                self.change(FilterChange::Sort(order), out)?;
            }
            Command::NextPage => {
                let page = self.state.page.saturating_add(1);
                self.change(FilterChange::Page(page), out)?;
            }
            Command::PreviousPage => {
                let page = self.state.page.saturating_sub(1);
                self.change(FilterChange::Page(page), out)?;
            }
            Command::Categories => {
                render_categories(out, self.pipeline.pipeline().used_categories())?;
            }
            Command::Show => self.show(out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Parses and handles one input line. Invalid lines are reported, not fatal.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        match Command::parse(line) {
            Ok(Some(command)) => self.handle(command, out),
            Ok(None) => Ok(Flow::Continue),
            Err(err) => {
                tracing::debug!(error = %err, "rejected input line");
                writeln!(out, "error: {err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn change(&mut self, change: FilterChange, out: &mut impl Write) -> Result<()> {
        self.state = std::mem::take(&mut self.state).apply(change);
        self.show(out)
    }
}
