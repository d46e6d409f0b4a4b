use chrono::{DateTime, Utc};
use colored::Colorize;
use memopad::api::{CmdMessage, MessageLevel};
use memopad::model::Note;
use memopad::presenter::ListEntry;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TIME_WIDTH: usize = 14;
const ACTIVE_MARKER: &str = "▸";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_note(note: &Note) {
    println!("{}", note.title.bold());
    println!("--------------------------------");
    println!("{}", note.content);
}

pub(crate) fn print_list(entries: &[ListEntry], label_width: usize) {
    if entries.is_empty() {
        println!("No notes found.");
        return;
    }

    for (i, entry) in entries.iter().enumerate() {
        let marker = if entry.active { ACTIVE_MARKER } else { " " };
        let idx_str = format!("{}. ", i + 1);

        let label = truncate_to_width(&entry.label, label_width);
        let padding = label_width.saturating_sub(label.width());
        let label_display = if entry.active {
            label.bold().to_string()
        } else {
            label
        };

        let time_ago = format_time_ago(entry.created_at);

        println!(
            "{} {}{}{}  {}",
            marker.green(),
            idx_str,
            label_display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
