//! # Debounced Attribute Filter
//!
//! [`AttributeFilter`] keeps the visible subset of one item collection in sync
//! with a set of filter controls, and reports a live count.
//!
//! ## Lifecycle
//!
//! ```text
//!   configure(page, config)           wires the controls that exist on the page
//!        │
//!        ├── input(text control)  ──► arm debounce ──► advance(now) ──► recompute
//!        ├── input/change(select) ─────────────────────────────────────► recompute
//!        └── clear() ──────────────────────────────────────────────────► recompute
//! ```
//!
//! A recompute reads the full collection from the [`ItemProvider`], evaluates
//! every control for every item, writes each item's visibility to the
//! [`ItemView`], then writes the counter text. Nothing is patched
//! incrementally, so recomputing twice with the same state is a no-op.
//!
//! ## Missing Elements
//!
//! Controls and counters absent from the page are dropped at configure time
//! and events addressed to them are ignored. This is how one preset serves
//! pages that render only some of its controls.
//!
//! ## Time
//!
//! The filter never reads a clock. Callers pass the event time to
//! [`AttributeFilter::input`] and the current time to
//! [`AttributeFilter::advance`]; [`AttributeFilter::next_deadline`] tells an
//! event loop when to wake up.

use crate::debounce::Debouncer;
use crate::error::Result;
use crate::filter::{is_visible, ControlSpec, FilterState};
use crate::model::ResultSummary;
use crate::page::{ItemProvider, ItemView};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Counter element and the text written to it.
///
/// `{count}` expands to the number of visible items, `{s}` to `"s"` unless
/// the count is exactly one, and `{query}` to the trimmed search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSpec {
    pub selector: String,
    pub template: String,
    /// Used instead of `template` when nothing is visible
    pub zero_template: Option<String>,
    /// Write an empty counter while no control constrains the collection
    pub blank_when_unfiltered: bool,
}

impl CounterSpec {
    pub fn new(selector: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            template: template.into(),
            zero_template: None,
            blank_when_unfiltered: false,
        }
    }

    pub fn with_zero_template(mut self, template: impl Into<String>) -> Self {
        self.zero_template = Some(template.into());
        self
    }

    pub fn blank_when_unfiltered(mut self) -> Self {
        self.blank_when_unfiltered = true;
        self
    }

    pub fn render(&self, count: usize, query: &str) -> String {
        let template = match &self.zero_template {
            Some(zero) if count == 0 => zero,
            _ => &self.template,
        };
        let plural = if count == 1 { "" } else { "s" };
        template
            .replace("{count}", &count.to_string())
            .replace("{s}", plural)
            .replace("{query}", query.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Quiet period before a text control triggers a recompute
    pub debounce: Duration,
    pub counter: Option<CounterSpec>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            counter: None,
        }
    }
}

/// Everything needed to wire controls to one item collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub item_selector: String,
    pub controls: Vec<ControlSpec>,
    pub options: FilterOptions,
}

impl FilterConfig {
    pub fn new(item_selector: impl Into<String>) -> Self {
        Self {
            item_selector: item_selector.into(),
            controls: Vec::new(),
            options: FilterOptions::default(),
        }
    }

    pub fn with_control(mut self, control: ControlSpec) -> Self {
        self.controls.push(control);
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.options.debounce = debounce;
        self
    }

    pub fn with_counter(mut self, selector: impl Into<String>, template: impl Into<String>) -> Self {
        self.options.counter = Some(CounterSpec::new(selector, template));
        self
    }

    pub fn with_counter_spec(mut self, counter: CounterSpec) -> Self {
        self.options.counter = Some(counter);
        self
    }

    pub fn control(&self, selector: &str) -> Option<&ControlSpec> {
        self.controls.iter().find(|c| c.selector == selector)
    }

    /// The first text control, which is what a bare search query is typed into.
    pub fn search_control(&self) -> Option<&ControlSpec> {
        self.controls.iter().find(|c| c.is_debounced())
    }
}

/// One filter instance bound to one page.
pub struct AttributeFilter<P> {
    page: P,
    item_selector: String,
    controls: Vec<ControlSpec>,
    counter: Option<CounterSpec>,
    state: FilterState,
    debouncers: BTreeMap<String, Debouncer>,
    today: NaiveDate,
    last: ResultSummary,
    recomputes: usize,
}

impl<P: ItemProvider + ItemView> AttributeFilter<P> {
    /// Wire `config` to `page`. Controls and counters the page lacks are skipped.
    ///
    /// No recompute happens here: the page keeps its rendered state until the
    /// first event (or an explicit [`Self::recompute`]).
    pub fn configure(page: P, config: FilterConfig) -> Self {
        let FilterConfig {
            item_selector,
            controls,
            options,
        } = config;

        let controls: Vec<ControlSpec> = controls
            .into_iter()
            .filter(|control| {
                let present = page.has_element(&control.selector);
                if !present {
                    debug!(control = %control.selector, "control not on page, skipping");
                }
                present
            })
            .collect();

        let counter = options.counter.filter(|counter| {
            let present = page.has_element(&counter.selector);
            if !present {
                debug!(counter = %counter.selector, "counter not on page, skipping");
            }
            present
        });

        let debouncers = controls
            .iter()
            .filter(|control| control.is_debounced())
            .map(|control| (control.selector.clone(), Debouncer::new(options.debounce)))
            .collect();

        debug!(
            collection = %item_selector,
            controls = controls.len(),
            counter = counter.is_some(),
            "configured attribute filter"
        );

        Self {
            page,
            item_selector,
            controls,
            counter,
            state: FilterState::new(),
            debouncers,
            today: Local::now().date_naive(),
            last: ResultSummary::default(),
            recomputes: 0,
        }
    }

    /// Override the reference date used by date windows.
    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// An input event: the control's value changed at `at`.
    ///
    /// Text controls update their value and (re)arm their debounce timer; the
    /// recompute happens in a later [`Self::advance`]. Other controls apply
    /// immediately, as a change event would.
    pub fn input(&mut self, selector: &str, value: &str, at: Instant) -> Result<Option<ResultSummary>> {
        let Some(debouncer) = self.debouncers.get_mut(selector) else {
            return self.change(selector, value);
        };
        debouncer.arm(at);
        self.state.set(selector, value);
        trace!(control = selector, value, "debounced input");
        Ok(None)
    }

    /// A change event: set the control's value and recompute immediately.
    ///
    /// Any pending debounce on the same control is cancelled.
    pub fn change(&mut self, selector: &str, value: &str) -> Result<Option<ResultSummary>> {
        if !self.is_wired(selector) {
            trace!(control = selector, "event for unwired control ignored");
            return Ok(None);
        }
        if let Some(debouncer) = self.debouncers.get_mut(selector) {
            debouncer.cancel();
        }
        self.state.set(selector, value);
        self.recompute().map(Some)
    }

    /// Fire every debounce timer due at `now`, in deadline order.
    ///
    /// Each fired timer causes exactly one recompute.
    pub fn advance(&mut self, now: Instant) -> Result<Vec<ResultSummary>> {
        let mut due: Vec<(Instant, String)> = self
            .debouncers
            .iter()
            .filter_map(|(selector, debouncer)| {
                debouncer
                    .deadline()
                    .filter(|deadline| *deadline <= now)
                    .map(|deadline| (deadline, selector.clone()))
            })
            .collect();
        due.sort();

        let mut fired = Vec::with_capacity(due.len());
        for (_, selector) in due {
            let ready = self
                .debouncers
                .get_mut(&selector)
                .is_some_and(|debouncer| debouncer.poll(now));
            if ready {
                trace!(control = %selector, "debounce fired");
                fired.push(self.recompute()?);
            }
        }
        Ok(fired)
    }

    /// Fire all pending timers now. Returns `None` when nothing was pending.
    pub fn flush(&mut self) -> Result<Option<ResultSummary>> {
        let mut pending = false;
        for debouncer in self.debouncers.values_mut() {
            pending |= debouncer.flush();
        }
        if pending {
            self.recompute().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Earliest pending debounce deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncers.values().filter_map(Debouncer::deadline).min()
    }

    /// Reset every control to empty (and every select to "any") and recompute.
    pub fn clear(&mut self) -> Result<ResultSummary> {
        for debouncer in self.debouncers.values_mut() {
            debouncer.cancel();
        }
        self.state.clear();
        self.recompute()
    }

    /// Evaluate every item against the current state and render the result.
    pub fn recompute(&mut self) -> Result<ResultSummary> {
        let items = self.page.items(&self.item_selector)?;

        let mut visible_ids = Vec::new();
        for item in &items {
            let visible = is_visible(item, &self.controls, &self.state, self.today);
            self.page.set_visible(&self.item_selector, &item.id, visible);
            if visible {
                visible_ids.push(item.id.clone());
            }
        }

        let unfiltered = self
            .controls
            .iter()
            .all(|control| control.is_unconstrained(self.state.get(&control.selector)));
        let query = self
            .controls
            .iter()
            .find(|control| control.is_debounced())
            .map(|control| self.state.get(&control.selector))
            .unwrap_or("");

        let counter_text = self.counter.as_ref().map(|counter| {
            let text = if unfiltered && counter.blank_when_unfiltered {
                String::new()
            } else {
                counter.render(visible_ids.len(), query)
            };
            self.page.set_text(&counter.selector, &text);
            text
        });

        self.recomputes += 1;
        debug!(
            collection = %self.item_selector,
            visible = visible_ids.len(),
            total = items.len(),
            "recomputed filter"
        );

        self.last = ResultSummary {
            visible_ids,
            total: items.len(),
            counter_text,
        };
        Ok(self.last.clone())
    }

    pub fn is_wired(&self, selector: &str) -> bool {
        self.controls.iter().any(|c| c.selector == selector)
    }

    pub fn value(&self, selector: &str) -> &str {
        self.state.get(selector)
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// The wired controls (those present on the page).
    pub fn controls(&self) -> &[ControlSpec] {
        &self.controls
    }

    pub fn has_counter(&self) -> bool {
        self.counter.is_some()
    }

    /// Result of the most recent recompute.
    pub fn summary(&self) -> &ResultSummary {
        &self.last
    }

    pub fn recompute_count(&self) -> usize {
        self.recomputes
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn into_page(self) -> P {
        self.page
    }
}
