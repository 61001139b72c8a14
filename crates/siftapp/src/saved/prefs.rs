use super::KeyValueStore;
use crate::error::{Result, SiftError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const PORTFOLIO_VIEW: &str = "portfolio_view";

/// Layout of the client portfolio page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioView {
    #[default]
    Grid,
    List,
}

impl fmt::Display for PortfolioView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortfolioView::Grid => write!(f, "grid"),
            PortfolioView::List => write!(f, "list"),
        }
    }
}

impl FromStr for PortfolioView {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "grid" => Ok(PortfolioView::Grid),
            "list" => Ok(PortfolioView::List),
            other => Err(SiftError::Api(format!(
                "Invalid portfolio view '{}': expected grid or list",
                other
            ))),
        }
    }
}

/// Stored view, falling back to grid when unset or unrecognized.
pub fn portfolio_view<S: KeyValueStore>(store: &S) -> Result<PortfolioView> {
    Ok(store
        .get(PORTFOLIO_VIEW)?
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default())
}

pub fn set_portfolio_view<S: KeyValueStore>(store: &mut S, view: PortfolioView) -> Result<()> {
    store.set(PORTFOLIO_VIEW, &view.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saved::memory::MemoryStorage;

    #[test]
    fn defaults_to_grid() {
        let store = MemoryStorage::new();
        assert_eq!(portfolio_view(&store).unwrap(), PortfolioView::Grid);
    }

    #[test]
    fn set_and_read_back() {
        let mut store = MemoryStorage::new();
        set_portfolio_view(&mut store, PortfolioView::List).unwrap();
        assert_eq!(portfolio_view(&store).unwrap(), PortfolioView::List);
        assert_eq!(store.get(PORTFOLIO_VIEW).unwrap().as_deref(), Some("list"));
    }

    #[test]
    fn unrecognized_value_falls_back() {
        let mut store = MemoryStorage::new();
        store.set(PORTFOLIO_VIEW, "masonry").unwrap();
        assert_eq!(portfolio_view(&store).unwrap(), PortfolioView::Grid);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("table".parse::<PortfolioView>().is_err());
        assert_eq!("list".parse::<PortfolioView>().unwrap(), PortfolioView::List);
    }
}
