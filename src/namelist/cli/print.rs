use chrono::{DateTime, Utc};
use colored::Colorize;
use namelist::model::Item;
use namelist::names::NameList;
use namelist::store::StorageBackend;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TIME_WIDTH: usize = 16;
const INDEX_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

pub fn print_messages(messages: &[Message]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Renders the current page of `list` followed by a summary footer.
pub fn print_page<B: StorageBackend>(list: &NameList<B>, line_width: usize) {
    if !list.query().is_empty() {
        println!(
            "{} \"{}\" ({} of {})",
            "Filter:".dimmed(),
            list.query(),
            list.filtered_names().len(),
            list.items().len()
        );
    }

    let entries = list.page_entries();
    if entries.is_empty() {
        println!("No names found.");
    } else {
        for (position, item) in entries {
            println!("{}", format_row(position + 1, item, line_width));
        }
    }

    println!();
    println!("{}", footer(list).dimmed());
}

fn format_row(display_index: usize, item: &Item, line_width: usize) -> String {
    let idx_str = format!("{:>width$}. ", display_index, width = INDEX_WIDTH);
    let checkbox = if item.completed { "[x] " } else { "[ ] " };
    let time_ago = format_time_ago(item.created_at());

    let fixed_width = idx_str.width() + checkbox.width() + TIME_WIDTH;
    let available = line_width.saturating_sub(fixed_width);
    let title_display = truncate_to_width(&item.title, available);
    let padding = available.saturating_sub(title_display.width());

    let (checkbox, title) = if item.completed {
        (checkbox.green(), title_display.dimmed().strikethrough())
    } else {
        (checkbox.normal(), title_display.normal())
    };

    format!(
        "{}{}{}{}{}",
        idx_str.yellow(),
        checkbox,
        title,
        " ".repeat(padding),
        time_ago.dimmed()
    )
}

fn footer<B: StorageBackend>(list: &NameList<B>) -> String {
    format!(
        "Page {}/{} · {} per page · {} remaining · {} done",
        list.current_page(),
        list.total_pages().max(1),
        list.items_per_page(),
        list.incomplete_count(),
        list.complete_count()
    )
}

pub fn print_per_page_options(options: &[usize], current: usize) {
    let rendered: Vec<String> = options
        .iter()
        .map(|n| {
            if *n == current {
                format!("[{}]", n).bold().to_string()
            } else {
                n.to_string()
            }
        })
        .collect();
    println!("Per page: {}", rendered.join(" "));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: Option<DateTime<Utc>>) -> String {
    let Some(timestamp) = timestamp else {
        return " ".repeat(TIME_WIDTH);
    };
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use namelist::store::memory::MemBackend;

    #[test]
    fn short_titles_are_untouched() {
        assert_eq!(truncate_to_width("Alice", 10), "Alice");
    }

    #[test]
    fn long_titles_get_an_ellipsis() {
        let out = truncate_to_width("abcdefghij", 5);
        assert_eq!(out, "abcd…");
        assert_eq!(out.width(), 5);
    }

    #[test]
    fn wide_characters_count_double() {
        let out = truncate_to_width("日本語テキスト", 6);
        assert!(out.width() <= 6);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn row_keeps_index_and_title() {
        colored::control::set_override(false);
        let item = Item::new(Utc::now().timestamp_millis(), "Buy milk");
        let row = format_row(3, &item, 80);
        assert!(row.starts_with("   3. [ ] Buy milk"));
    }

    #[test]
    fn footer_reports_counts() {
        let mut list = NameList::load(MemBackend::new());
        list.add("Alice").unwrap();
        list.add("Bob").unwrap();
        let bob = list.items()[0].id;
        list.complete(bob).unwrap();

        assert_eq!(
            footer(&list),
            "Page 1/1 · 5 per page · 1 remaining · 1 done"
        );
    }
}
