//! Replaying timed event scripts.
//!
//! A script is a JSON array of steps, each stamped with a millisecond offset:
//!
//! ```json
//! [
//!   { "at_ms": 0,   "event": "input",  "control": "#property-search", "value": "p" },
//!   { "at_ms": 120, "event": "input",  "control": "#property-search", "value": "pe" },
//!   { "at_ms": 900, "event": "change", "control": "#zone-filter", "value": "The Pearl" },
//!   { "at_ms": 1500, "event": "clear" }
//! ]
//! ```
//!
//! Steps run in offset order against one [`AttributeFilter`]. Debounce timers
//! that come due between steps fire at their own deadline, and timers still
//! pending after the last step fire at the end. Every recompute becomes a
//! [`ReplayFrame`].

use crate::commands::{CmdMessage, CmdResult, ReplayFrame};
use crate::component::{AttributeFilter, FilterConfig};
use crate::error::Result;
use crate::model::ResultSummary;
use crate::page::{ItemProvider, ItemView};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ScriptEvent {
    Input { control: String, value: String },
    Change { control: String, value: String },
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptStep {
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: ScriptEvent,
}

pub fn parse_script(content: &str) -> Result<Vec<ScriptStep>> {
    Ok(serde_json::from_str(content)?)
}

pub fn load_script<P: AsRef<Path>>(path: P) -> Result<Vec<ScriptStep>> {
    let content = fs::read_to_string(path)?;
    parse_script(&content)
}

pub fn run<P: ItemProvider + ItemView>(
    page: P,
    config: FilterConfig,
    mut steps: Vec<ScriptStep>,
    today: Option<NaiveDate>,
) -> Result<CmdResult> {
    steps.sort_by_key(|step| step.at_ms);

    let mut filter = AttributeFilter::configure(page, config);
    if let Some(today) = today {
        filter = filter.with_reference_date(today);
    }

    let start = Instant::now();
    let mut frames = Vec::new();
    let mut result = CmdResult::default();

    for step in &steps {
        let at = start + Duration::from_millis(step.at_ms);
        fire_due(&mut filter, start, Some(at), &mut frames)?;

        let (trigger, outcome) = match &step.event {
            ScriptEvent::Input { control, value } => {
                (format!("input {}", control), filter.input(control, value, at)?)
            }
            ScriptEvent::Change { control, value } => {
                (format!("change {}", control), filter.change(control, value)?)
            }
            ScriptEvent::Clear => ("clear".to_string(), Some(filter.clear()?)),
        };

        match (&step.event, outcome) {
            (_, Some(summary)) => frames.push(frame(step.at_ms, trigger, summary)),
            (ScriptEvent::Input { control, .. } | ScriptEvent::Change { control, .. }, None)
                if !filter.is_wired(control) =>
            {
                result.add_message(CmdMessage::warning(format!(
                    "Control {} is not on this page; event at {}ms ignored",
                    control, step.at_ms
                )));
            }
            _ => {}
        }
    }

    fire_due(&mut filter, start, None, &mut frames)?;

    let summary = filter.summary().clone();
    result.add_message(CmdMessage::info(format!(
        "{} recompute(s) over {} step(s)",
        filter.recompute_count(),
        steps.len()
    )));
    Ok(result.with_frames(frames).with_summary(summary))
}

/// Fire pending timers in deadline order, up to `limit` (or all of them).
fn fire_due<P: ItemProvider + ItemView>(
    filter: &mut AttributeFilter<P>,
    start: Instant,
    limit: Option<Instant>,
    frames: &mut Vec<ReplayFrame>,
) -> Result<()> {
    while let Some(deadline) = filter.next_deadline() {
        if limit.is_some_and(|limit| deadline > limit) {
            break;
        }
        let at_ms = deadline.duration_since(start).as_millis() as u64;
        for summary in filter.advance(deadline)? {
            frames.push(frame(at_ms, "debounce".to_string(), summary));
        }
    }
    Ok(())
}

fn frame(at_ms: u64, trigger: String, summary: ResultSummary) -> ReplayFrame {
    ReplayFrame {
        at_ms,
        trigger,
        summary,
    }
}
