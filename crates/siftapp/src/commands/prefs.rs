use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::saved::prefs::{self, PortfolioView};
use crate::saved::KeyValueStore;

pub fn show_portfolio_view<S: KeyValueStore>(store: &S) -> Result<CmdResult> {
    let view = prefs::portfolio_view(store)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("portfolio-view = {}", view)));
    Ok(result)
}

pub fn set_portfolio_view<S: KeyValueStore>(store: &mut S, view: PortfolioView) -> Result<CmdResult> {
    prefs::set_portfolio_view(store, view)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("portfolio-view set to {}", view)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saved::memory::MemoryStorage;

    #[test]
    fn show_default() {
        let store = MemoryStorage::new();
        let result = show_portfolio_view(&store).unwrap();
        assert_eq!(result.messages[0].content, "portfolio-view = grid");
    }

    #[test]
    fn set_then_show() {
        let mut store = MemoryStorage::new();
        set_portfolio_view(&mut store, PortfolioView::List).unwrap();
        let result = show_portfolio_view(&store).unwrap();
        assert_eq!(result.messages[0].content, "portfolio-view = list");
    }
}
