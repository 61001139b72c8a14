use crate::commands::CmdResult;
use crate::config::SiftConfig;
use crate::error::Result;

pub fn run(config: &SiftConfig) -> Result<CmdResult> {
    Ok(CmdResult::default().with_config(config.clone()))
}
