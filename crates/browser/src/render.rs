//! Plain-text rendering of directory views.

use std::io::{self, Write};

use catalog::{Category, Startup};
use query::{DirectoryView, FilterState};

/// Writes one page of results with a summary line and page indicator.
pub fn render_view(
    out: &mut impl Write,
    view: &DirectoryView<'_>,
    state: &FilterState,
    categories: &[Category],
) -> io::Result<()> {
    writeln!(
        out,
        "{} of {} startups | search: {:?} | category: {} | sort: {}",
        view.filtered_count,
        view.total_count,
        state.search.trim(),
        state.category,
        state.sort
    )?;

    if view.is_empty() {
        if state.has_filters() {
            writeln!(out, "  No startups found. Type 'clear' to reset filters.")?;
        } else {
            writeln!(out, "  The directory is empty.")?;
        }
    }

    for startup in &view.startups {
        writeln!(out, "  {}", card_line(startup, categories))?;
    }

    writeln!(out, "Page {} of {}", view.page, view.total_pages)
}

/// Writes the category list offered as filter choices.
pub fn render_categories(out: &mut impl Write, used: &[&Category]) -> io::Result<()> {
    writeln!(out, "  all")?;
    for category in used {
        if category.display_name() == category.id.as_str() {
            writeln!(out, "  {}", category.id)?;
        } else {
            writeln!(out, "  {} ({})", category.id, category.display_name())?;
        }
    }
    Ok(())
}

fn card_line(startup: &Startup, categories: &[Category]) -> String {
    let mut line = format!("{} ({})", startup.name, startup.founded_year);

    let labels: Vec<&str> = startup
        .category_ids
        .iter()
        .filter_map(|id| categories.iter().find(|c| &c.id == id))
        .map(Category::display_name)
        .collect();
    if !labels.is_empty() {
        line.push_str(&format!(" [{}]", labels.join(", ")));
    }

    if let Some(description) = startup.attribute_str("description") {
        line.push_str(" - ");
        line.push_str(description);
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use query::{PageSize, QueryPipeline};

    fn render(startups: &[Startup], categories: &[Category], state: &FilterState) -> String {
        let pipeline = QueryPipeline::from_parts(startups, categories, PageSize::new(2).unwrap());
        let view = pipeline.run(state);
        let mut out = Vec::new();
        render_view(&mut out, &view, state, categories).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_card_line_with_labels_and_description() {
        let categories = vec![Category::new("ai").with_attribute("name", "AI")];
        let startup = Startup::new("Acme", 2019)
            .with_categories(["ai", "ghost"])
            .with_attribute("description", "Robots");

        assert_eq!(card_line(&startup, &categories), "Acme (2019) [AI] - Robots");
    }

    #[test]
    fn test_render_page() {
        let startups = vec![
            Startup::new("Acme", 2019),
            Startup::new("Bex", 2021),
            Startup::new("Acorn", 2019),
        ];
        let text = render(&startups, &[], &FilterState::new());

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "3 of 3 startups | search: \"\" | category: all | sort: desc",
                "  Bex (2021)",
                "  Acme (2019)",
                "Page 1 of 2",
            ]
        );
    }

    #[test]
    fn test_render_empty_result() {
        let startups = vec![Startup::new("Acme", 2019)];
        let text = render(&startups, &[], &FilterState::new().search("zzz"));

        assert!(text.contains("No startups found. Type 'clear'"));
        assert!(text.ends_with("Page 1 of 1\n"));
    }

    #[test]
    fn test_render_empty_catalog_does_not_offer_clear() {
        let text = render(&[], &[], &FilterState::new());

        assert_eq!(
            text,
            "0 of 0 startups | search: \"\" | category: all | sort: desc\n  \
             The directory is empty.\n\
             Page 1 of 1\n"
        );
    }

    #[test]
    fn test_render_categories() {
        let ai = Category::new("ai").with_attribute("name", "Artificial Intelligence");
        let fin = Category::new("fin");
        let mut out = Vec::new();
        render_categories(&mut out, &[&ai, &fin]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "  all\n  ai (Artificial Intelligence)\n  fin\n"
        );
    }
}
