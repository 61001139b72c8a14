use crate::commands::{CmdResult, PresetInfo};
use crate::error::Result;
use crate::presets::{self, Preset};

fn describe(preset: &Preset) -> PresetInfo {
    let config = &preset.config;
    PresetInfo {
        name: preset.name.to_string(),
        description: preset.description.to_string(),
        collection: config.item_selector.clone(),
        controls: config.controls.iter().map(|c| c.selector.clone()).collect(),
        debounce_ms: config.options.debounce.as_millis() as u64,
        counter: config.options.counter.as_ref().map(|c| c.template.clone()),
    }
}

pub fn run() -> Result<CmdResult> {
    let listed = presets::all().iter().map(describe).collect();
    Ok(CmdResult::default().with_presets(listed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_preset() {
        let result = run().unwrap();
        assert_eq!(result.presets.len(), presets::all().len());

        let property = &result.presets[0];
        assert_eq!(property.name, "property-search");
        assert_eq!(property.collection, ".property-card");
        assert_eq!(property.debounce_ms, 500);
        assert_eq!(property.counter.as_deref(), Some("{count} properties found"));
        assert_eq!(property.controls[0], "#property-search");
    }
}
