use crate::commands::{CmdMessage, CmdResult};
use crate::component::{AttributeFilter, FilterConfig};
use crate::error::Result;
use crate::page::{ItemProvider, ItemView};
use chrono::NaiveDate;

/// One-shot filtering: apply a query and a set of select values, recompute, and
/// list what stays visible.
///
/// There is no typing here, so the query is applied as a change event and no
/// debounce is involved. Controls the page lacks are reported as warnings and
/// otherwise ignored.
pub fn run<P: ItemProvider + ItemView>(
    page: P,
    config: FilterConfig,
    query: Option<&str>,
    selections: &[(String, String)],
    today: Option<NaiveDate>,
) -> Result<CmdResult> {
    let search_selector = config.search_control().map(|c| c.selector.clone());
    let item_selector = config.item_selector.clone();

    let mut filter = AttributeFilter::configure(page, config);
    if let Some(today) = today {
        filter = filter.with_reference_date(today);
    }

    let mut result = CmdResult::default();

    if let Some(query) = query {
        match search_selector.filter(|selector| filter.is_wired(selector)) {
            Some(selector) => {
                filter.change(&selector, query)?;
            }
            None => result.add_message(CmdMessage::warning(
                "No search box on this page; query ignored",
            )),
        }
    }

    for (selector, value) in selections {
        if filter.change(selector, value)?.is_none() {
            result.add_message(CmdMessage::warning(format!(
                "Control {} is not on this page; ignored",
                selector
            )));
        }
    }

    if filter.recompute_count() == 0 {
        filter.recompute()?;
    }

    let summary = filter.summary().clone();
    let visible = filter
        .page()
        .items(&item_selector)?
        .into_iter()
        .filter(|item| summary.is_visible(&item.id))
        .collect();

    Ok(result.with_summary(summary).with_listed_items(visible))
}
