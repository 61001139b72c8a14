//! # Presets
//!
//! Ready-made [`FilterConfig`]s for the listings of the property-management
//! site. Each preset only names selectors, fields, thresholds and counter
//! text; the behavior is the same [`AttributeFilter`](crate::component::AttributeFilter)
//! everywhere.
//!
//! | Preset | Collection | Debounce |
//! |--------|------------|----------|
//! | `property-search` | `.property-card` | 500 ms |
//! | `portion-filters` | `.portion-item` | n/a |
//! | `tenant-search` | `.tenant-item` | 300 ms |
//! | `job-search` | `.job-card` | 300 ms |
//! | `contact-search` | `.contact-item` | 300 ms |
//! | `help-search` | `.help-article` | 300 ms |
//! | `inquiry-filters` | `.inquiry-row` | n/a |
//! | `application-filters` | `.application-item` | n/a |

use crate::component::{CounterSpec, FilterConfig};
use crate::error::{Result, SiftError};
use crate::filter::{BucketSpec, ControlSpec};
use once_cell::sync::Lazy;
use std::time::Duration;

const PEOPLE_DEBOUNCE: Duration = Duration::from_millis(300);
const PROPERTY_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub config: FilterConfig,
}

static PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![
        Preset {
            name: "property-search",
            description: "Property cards by name/zone, zone, price range and bedrooms",
            config: FilterConfig::new(".property-card")
                .with_control(ControlSpec::text("#property-search", ["property-name", "zone"]))
                .with_control(ControlSpec::select("#zone-filter", "zone"))
                .with_control(ControlSpec::bucket(
                    "#price-filter",
                    "price",
                    BucketSpec::price_ranges(),
                ))
                .with_control(ControlSpec::select("#bedroom-filter", "bedrooms"))
                .with_debounce(PROPERTY_DEBOUNCE)
                .with_counter("#results-count", "{count} properties found"),
        },
        Preset {
            name: "portion-filters",
            description: "Portions of a client property by status and bedrooms",
            config: FilterConfig::new(".portion-item")
                .with_control(ControlSpec::select("#portion-status-filter", "status"))
                .with_control(ControlSpec::select("#portion-bedroom-filter", "bedrooms"))
                .with_counter("#portion-count", "{count} portions"),
        },
        Preset {
            name: "tenant-search",
            description: "Tenants by name or portion number",
            config: FilterConfig::new(".tenant-item")
                .with_control(ControlSpec::text(
                    "#tenant-search",
                    ["tenant-name", "portion-number"],
                ))
                .with_debounce(PEOPLE_DEBOUNCE),
        },
        Preset {
            name: "job-search",
            description: "Maintenance jobs by text, location and service type",
            config: FilterConfig::new(".job-card")
                .with_control(ControlSpec::text(
                    "#job-search",
                    ["job-title", "job-description", "job-location"],
                ))
                .with_control(ControlSpec::select("#location-filter", "job-location"))
                .with_control(ControlSpec::select("#service-type-filter", "service-type"))
                .with_debounce(PEOPLE_DEBOUNCE)
                .with_counter("#job-count", "{count} jobs available"),
        },
        Preset {
            name: "contact-search",
            description: "Realtor contacts by name, email or phone",
            config: FilterConfig::new(".contact-item")
                .with_control(ControlSpec::text(
                    "#contact-search",
                    ["contact-name", "contact-email", "contact-phone"],
                ))
                .with_debounce(PEOPLE_DEBOUNCE)
                .with_counter("#contact-count", "{count} contacts"),
        },
        Preset {
            name: "help-search",
            description: "Help articles by title, content or tags, and category",
            config: FilterConfig::new(".help-article")
                .with_control(ControlSpec::text("#help-search", ["title", "content", "tags"]))
                .with_control(
                    ControlSpec::select("[data-category]", "category").with_any_value("all"),
                )
                .with_debounce(PEOPLE_DEBOUNCE)
                .with_counter_spec(
                    CounterSpec::new("#search-results", "Found {count} article{s} for \"{query}\"")
                        .with_zero_template("No results found for \"{query}\"")
                        .blank_when_unfiltered(),
                ),
        },
        Preset {
            name: "inquiry-filters",
            description: "Realtor inquiries by status and date window",
            config: FilterConfig::new(".inquiry-row")
                .with_control(ControlSpec::select("#inquiry-status-filter", "status"))
                .with_control(ControlSpec::date_window("#inquiry-date-filter", "date"))
                .with_counter("#inquiry-count", "{count} inquiries"),
        },
        Preset {
            name: "application-filters",
            description: "Workman job applications by status",
            config: FilterConfig::new(".application-item")
                .with_control(ControlSpec::select("#application-status-filter", "status"))
                .with_counter("#application-count", "{count} applications"),
        },
    ]
});

pub fn all() -> &'static [Preset] {
    &PRESETS
}

pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

/// The filter configuration of preset `name`, with an optional debounce override.
pub fn config_for(name: &str, debounce_override: Option<Duration>) -> Result<FilterConfig> {
    let preset = find(name).ok_or_else(|| SiftError::UnknownPreset(name.to_string()))?;
    let config = preset.config.clone();
    Ok(match debounce_override {
        Some(debounce) => config.with_debounce(debounce),
        None => config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::AttributeFilter;
    use crate::model::Item;
    use crate::page::memory::MemoryPage;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = all().iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn property_search_uses_longer_debounce() {
        let config = config_for("property-search", None).unwrap();
        assert_eq!(config.options.debounce, Duration::from_millis(500));
        assert_eq!(config.controls.len(), 4);
    }

    #[test]
    fn people_searches_use_300ms() {
        for name in ["tenant-search", "job-search", "contact-search", "help-search"] {
            let config = config_for(name, None).unwrap();
            assert_eq!(config.options.debounce, PEOPLE_DEBOUNCE, "{}", name);
            assert!(config.search_control().is_some(), "{}", name);
        }
    }

    #[test]
    fn select_only_presets_have_no_search_control() {
        assert!(config_for("portion-filters", None).unwrap().search_control().is_none());
        assert!(config_for("inquiry-filters", None).unwrap().search_control().is_none());
        assert!(config_for("application-filters", None).unwrap().search_control().is_none());
    }

    #[test]
    fn debounce_override_applies() {
        let config = config_for("job-search", Some(Duration::from_millis(50))).unwrap();
        assert_eq!(config.options.debounce, Duration::from_millis(50));
    }

    #[test]
    fn tenant_search_has_no_counter() {
        assert!(config_for("tenant-search", None).unwrap().options.counter.is_none());
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = config_for("villa-search", None).unwrap_err();
        assert!(matches!(err, SiftError::UnknownPreset(name) if name == "villa-search"));
    }

    fn filter_for(preset: &str, page: MemoryPage) -> AttributeFilter<MemoryPage> {
        AttributeFilter::configure(page, config_for(preset, None).unwrap())
    }

    #[test]
    fn application_filters_by_status() {
        let page = MemoryPage::new()
            .with_elements(["#application-status-filter", "#application-count"])
            .with_items(
                ".application-item",
                vec![
                    Item::new("a1").with_attr("status", "pending"),
                    Item::new("a2").with_attr("status", "accepted"),
                    Item::new("a3").with_attr("status", "pending"),
                ],
            );
        let mut filter = filter_for("application-filters", page);

        let summary = filter.change("#application-status-filter", "pending").unwrap().unwrap();
        assert_eq!(summary.visible_ids, vec!["a1", "a3"]);
        assert_eq!(filter.page().text("#application-count"), Some("2 applications"));

        let summary = filter.change("#application-status-filter", "").unwrap().unwrap();
        assert_eq!(summary.visible(), 3);
    }

    #[test]
    fn help_search_counter_follows_query() {
        let page = MemoryPage::new()
            .with_elements(["#help-search", "#search-results"])
            .with_items(
                ".help-article",
                vec![
                    Item::new("h1").with_attr("title", "Renewing a lease"),
                    Item::new("h2").with_attr("title", "Paying rent online"),
                ],
            );
        let mut filter = filter_for("help-search", page);

        filter.change("#help-search", "lease").unwrap();
        assert_eq!(
            filter.page().text("#search-results"),
            Some("Found 1 article for \"lease\"")
        );

        filter.change("#help-search", "parking").unwrap();
        assert_eq!(
            filter.page().text("#search-results"),
            Some("No results found for \"parking\"")
        );

        let summary = filter.change("#help-search", "  ").unwrap().unwrap();
        assert_eq!(summary.visible(), 2);
        assert_eq!(filter.page().text("#search-results"), Some(""));
    }
}
