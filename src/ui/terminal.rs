//! Line-oriented rendering surface for terminals and pipes.

use std::io::{self, Write};

use crate::catalog::Movie;
use crate::ui::render::{ListKind, RenderSurface};

const MAX_STARS: u8 = 5;

/// Writes each presentation change as plain lines.
///
/// The loading indicator is only printed when its visibility changes.
pub struct TerminalSurface<W> {
    out: W,
    loading: bool,
}

impl<W: Write + Send + 'static> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            loading: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines(&mut self, lines: &[String]) {
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(self.out, "{line}"))
            .and_then(|()| self.out.flush());
        if let Err(err) = result {
            tracing::warn!(error = %err, "Failed to write to terminal");
        }
    }
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + 'static> RenderSurface for TerminalSurface<W> {
    fn show_loading(&mut self, visible: bool) {
        if visible == self.loading {
            return;
        }
        self.loading = visible;
        if visible {
            self.write_lines(&["Loading...".to_string()]);
        }
    }

    fn show_error(&mut self, message: &str) {
        self.write_lines(&[format!("! {message}")]);
    }

    fn show_empty(&mut self) {
        self.write_lines(&["No movies found".to_string()]);
    }

    fn show_list(&mut self, kind: ListKind, items: &[Movie]) {
        let lines = match kind {
            ListKind::Normal => normal_lines(items),
            ListKind::Search => search_lines(items),
        };
        self.write_lines(&lines);
    }
}

fn normal_lines(items: &[Movie]) -> Vec<String> {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(format!("Movies ({})", items.len()));
    lines.extend(
        items
            .iter()
            .map(|movie| format!("  {} {}  {}", movie.year, movie.title, stars(movie.rating))),
    );
    lines
}

/// Search results arrive grouped by year; each group gets a header.
fn search_lines(items: &[Movie]) -> Vec<String> {
    let mut lines = vec![format!("Search results ({})", items.len())];
    let mut year = None;
    for movie in items {
        if year != Some(movie.year) {
            year = Some(movie.year);
            lines.push(format!("-- {} --", movie.year));
        }
        lines.push(format!("  {}  {}", movie.title, stars(movie.rating)));
    }
    lines
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_STARS));
    let empty = usize::from(MAX_STARS) - filled;
    format!("{}{}", "*".repeat(filled), ".".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(surface: TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn loading_printed_once_per_change() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.show_loading(false);
        surface.show_loading(true);
        surface.show_loading(true);
        surface.show_loading(false);
        surface.show_loading(true);
        assert_eq!(output(surface), "Loading...\nLoading...\n");
    }

    #[test]
    fn normal_list_lines() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.show_list(ListKind::Normal, &[Movie::new("Up", 2009, 4)]);
        assert_eq!(output(surface), "Movies (1)\n  2009 Up  ****.\n");
    }

    #[test]
    fn search_list_groups_by_year() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.show_list(
            ListKind::Search,
            &[
                Movie::new("Knight A", 2010, 5),
                Movie::new("Knight B", 2010, 7),
                Movie::new("Knight C", 2008, 0),
            ],
        );
        assert_eq!(
            output(surface),
            "Search results (3)\n-- 2010 --\n  Knight A  *****\n  Knight B  *****\n-- 2008 --\n  Knight C  .....\n"
        );
    }

    #[test]
    fn error_and_empty_lines() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.show_error("Couldn't load movies");
        surface.show_empty();
        assert_eq!(output(surface), "! Couldn't load movies\nNo movies found\n");
    }
}
