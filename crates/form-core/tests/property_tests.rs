use form_core::resolve;
use form_meta::defaults::builtin_config;
use form_meta::{FormConfig, ResourceType};
use form_test_utils::fixtures::SMALL_FORM;
use proptest::prelude::*;
use std::sync::LazyLock;

static SMALL: LazyLock<FormConfig> = LazyLock::new(|| FormConfig::parse(SMALL_FORM).unwrap());
static BUILTIN: LazyLock<FormConfig> = LazyLock::new(|| builtin_config().unwrap());

/// Keys no table mentions: neither fixture uses upper-case families.
fn unconfigured_type() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z]{0,10}(-[a-zA-Z0-9]{1,10})?"
}

fn configured_type(config: &'static FormConfig) -> impl Strategy<Value = ResourceType> {
    let types: Vec<ResourceType> = config.resource_types().into_iter().cloned().collect();
    prop::sample::select(types)
}

proptest! {
    #[test]
    fn test_unconfigured_types_get_the_base_layout(key in unconfigured_type()) {
        let layout = resolve(&key.as_str().into(), &SMALL).unwrap();
        let baseline = resolve(&"image-map".into(), &SMALL).unwrap();

        prop_assert_eq!(layout.pages, baseline.pages);
        prop_assert_eq!(layout.required_fields, baseline.required_fields);
    }

    #[test]
    fn test_resolution_is_idempotent(resource_type in configured_type(&BUILTIN)) {
        let first = resolve(&resource_type, &BUILTIN).unwrap();
        let second = resolve(&resource_type, &BUILTIN).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_sibling_sections_stay_unique(resource_type in configured_type(&SMALL)) {
        let layout = resolve(&resource_type, &SMALL).unwrap();
        for page in &layout.pages {
            let mut ids: Vec<_> = page.children.iter().map(|s| s.section.as_str()).collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), before);
        }
    }

    #[test]
    fn test_required_fields_have_no_duplicates(resource_type in configured_type(&BUILTIN)) {
        let layout = resolve(&resource_type, &BUILTIN).unwrap();
        let mut required = layout.required_fields.clone();
        required.sort();
        required.dedup();
        prop_assert_eq!(required.len(), layout.required_fields.len());
    }
}
