//! # Rendering
//!
//! Every function here turns a `CmdResult` into the text printed on stdout.
//! Layout math (widths, truncation, padding) is Unicode-aware; color goes
//! through `colored`, which switches itself off when stdout is not a terminal.

use colored::Colorize;
use siftapp::api::{CmdMessage, CmdResult, MessageLevel};
use siftapp::model::{Item, ResultSummary};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const INDENT: &str = "  ";

pub fn messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn filter(result: &CmdResult) -> String {
    let mut out = items(&result.listed_items);
    if let Some(summary) = &result.summary {
        out.push('\n');
        out.push_str(&format!("{}\n", counter_line(summary).bold()));
    }
    out.push_str(&messages(&result.messages));
    out
}

pub fn replay(result: &CmdResult) -> String {
    let trigger_width = result
        .frames
        .iter()
        .map(|frame| frame.trigger.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for frame in &result.frames {
        let padding = trigger_width.saturating_sub(frame.trigger.width());
        out.push_str(&format!(
            "{}{:>6}ms  {}{}  {}\n",
            INDENT,
            frame.at_ms.to_string().yellow(),
            frame.trigger,
            " ".repeat(padding),
            counter_line(&frame.summary).dimmed()
        ));
    }
    if let Some(summary) = &result.summary {
        out.push_str(&format!(
            "\nvisible: {}\n",
            summary.visible_ids.join(", ").bold()
        ));
    }
    out.push_str(&messages(&result.messages));
    out
}

pub fn presets(result: &CmdResult) -> String {
    let name_width = result
        .presets
        .iter()
        .map(|preset| preset.name.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for preset in &result.presets {
        let padding = name_width.saturating_sub(preset.name.width());
        out.push_str(&format!(
            "{}{}{}  {:>4}ms  {}\n",
            INDENT,
            preset.name.bold(),
            " ".repeat(padding),
            preset.debounce_ms,
            preset.description
        ));
        let detail = format!(
            "{} | {}{}",
            preset.collection,
            preset.controls.join(" "),
            preset
                .counter
                .as_ref()
                .map(|counter| format!(" | \"{}\"", counter))
                .unwrap_or_default()
        );
        let indent = INDENT.width() * 2 + name_width;
        out.push_str(&format!(
            "{}{}\n",
            " ".repeat(indent),
            truncate_to_width(&detail, LINE_WIDTH.saturating_sub(indent)).dimmed()
        ));
    }
    out
}

pub fn saved(result: &CmdResult) -> String {
    let mut out = String::new();
    for id in &result.saved_ids {
        out.push_str(&format!("{}{}\n", INDENT, id));
    }
    out.push_str(&messages(&result.messages));
    out
}

pub fn config(result: &CmdResult) -> anyhow::Result<String> {
    let mut out = match &result.config {
        Some(config) => serde_json::to_string_pretty(config)?,
        None => String::new(),
    };
    out.push('\n');
    Ok(out)
}

fn items(items: &[Item]) -> String {
    if items.is_empty() {
        return format!("{}\n", "No items visible.".dimmed());
    }

    let id_width = items.iter().map(|item| item.id.width()).max().unwrap_or(0);
    let available = LINE_WIDTH.saturating_sub(INDENT.width() * 2 + id_width);

    let mut out = String::new();
    for item in items {
        let attrs = item
            .attrs
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("  ");
        let padding = id_width.saturating_sub(item.id.width());
        out.push_str(&format!(
            "{}{}{}{}{}\n",
            INDENT,
            " ".repeat(padding),
            item.id.yellow(),
            INDENT,
            truncate_to_width(&attrs, available)
        ));
    }
    out
}

/// The page's own counter text, or "shown of total" when it has none.
fn counter_line(summary: &ResultSummary) -> String {
    summary
        .counter_text
        .clone()
        .unwrap_or_else(|| format!("{} of {} visible", summary.visible(), summary.total))
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
