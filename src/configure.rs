use crate::types::laptop::Laptop;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Selected option index per configurable component; `None` keeps the base component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigState {
    pub processor: Option<usize>,
    pub display: Option<usize>,
    pub gpu: Option<usize>,
    pub ram: Option<usize>,
    pub storage: Option<usize>,
}

impl ConfigState {
    pub fn is_base(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ComponentCategory {
    Processor,
    Display,
    Gpu,
    Ram,
    Storage,
}

pub fn option_count(laptop: &Laptop, category: ComponentCategory) -> usize {
    match category {
        ComponentCategory::Processor => laptop.processor_options.len(),
        ComponentCategory::Display => laptop.display_options.len(),
        ComponentCategory::Gpu => laptop.gpu_options.len(),
        ComponentCategory::Ram => laptop.ram_options.len(),
        ComponentCategory::Storage => laptop.storage_options.len(),
    }
}

/// Display names of the options in `category`, in index order.
pub fn option_names(laptop: &Laptop, category: ComponentCategory) -> Vec<String> {
    match category {
        ComponentCategory::Processor => laptop
            .processor_options
            .iter()
            .map(|processor| processor.name.clone())
            .collect(),
        ComponentCategory::Display => laptop.display_options.iter().map(|d| d.name()).collect(),
        ComponentCategory::Gpu => laptop
            .gpu_options
            .iter()
            .map(|gpu| gpu.name.clone())
            .collect(),
        ComponentCategory::Ram => laptop.ram_options.iter().map(|ram| ram.name()).collect(),
        ComponentCategory::Storage => laptop
            .storage_options
            .iter()
            .map(|storage| storage.name())
            .collect(),
    }
}

pub fn has_config_options(laptop: &Laptop) -> bool {
    !(laptop.processor_options.is_empty()
        && laptop.display_options.is_empty()
        && laptop.gpu_options.is_empty()
        && laptop.ram_options.is_empty()
        && laptop.storage_options.is_empty())
}

fn pick<T: Clone>(base: &T, options: &[T], index: Option<usize>) -> T {
    index
        .and_then(|index| options.get(index))
        .unwrap_or(base)
        .clone()
}

/// New model with the selected options swapped in. Missing or out-of-range
/// indices keep the base component. The input is never modified.
pub fn build_configured_model(laptop: &Laptop, state: &ConfigState) -> Laptop {
    let mut configured = laptop.clone();
    configured.processor = pick(&laptop.processor, &laptop.processor_options, state.processor);
    configured.display = pick(&laptop.display, &laptop.display_options, state.display);
    configured.gpu = pick(&laptop.gpu, &laptop.gpu_options, state.gpu);
    configured.ram = pick(&laptop.ram, &laptop.ram_options, state.ram);
    configured.storage = pick(&laptop.storage, &laptop.storage_options, state.storage);
    configured
}

/// Human-readable list of the components that differ from the base configuration.
pub fn describe_changes(base: &Laptop, configured: &Laptop) -> Vec<String> {
    let mut changes = Vec::new();
    if base.processor != configured.processor {
        changes.push(format!("processor: {}", configured.processor.name));
    }
    if base.display != configured.display {
        changes.push(format!("display: {}", configured.display.name()));
    }
    if base.gpu != configured.gpu {
        changes.push(format!("gpu: {}", configured.gpu.name));
    }
    if base.ram != configured.ram {
        changes.push(format!("ram: {}", configured.ram.name()));
    }
    if base.storage != configured.storage {
        changes.push(format!("storage: {}", configured.storage.name()));
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::laptop;
    use crate::types::laptop::{Processor, Ram};
    use strum::IntoEnumIterator;

    fn configurable() -> Laptop {
        let mut model = laptop("cfg", "X1");
        model.processor_options = vec![
            Processor {
                name: "Option CPU 0".to_string(),
                cores: 12,
                threads: 14,
                tdp_watts: None,
            },
            Processor {
                name: "Option CPU 1".to_string(),
                cores: 16,
                threads: 22,
                tdp_watts: Some(45),
            },
        ];
        model.ram_options = vec![Ram {
            size_gb: 64,
            kind: "LPDDR5x".to_string(),
            speed_mts: 7500,
            soldered: true,
        }];
        model
    }

    #[test]
    fn valid_indices_substitute_options() {
        let base = configurable();
        let state = ConfigState {
            processor: Some(1),
            ram: Some(0),
            ..ConfigState::default()
        };
        let configured = build_configured_model(&base, &state);
        assert_eq!(configured.processor.name, "Option CPU 1");
        assert_eq!(configured.ram.size_gb, 64);
        assert_eq!(configured.display, base.display);
        assert_eq!(base.processor.name, "Test CPU");
    }

    #[test]
    fn out_of_range_and_missing_indices_keep_base() {
        let base = configurable();
        let state = ConfigState {
            processor: Some(7),
            display: Some(0),
            gpu: None,
            ram: Some(usize::MAX),
            storage: Some(0),
        };
        let configured = build_configured_model(&base, &state);
        assert_eq!(configured, base);
    }

    #[test]
    fn base_state_is_identity() {
        let base = configurable();
        let configured = build_configured_model(&base, &ConfigState::default());
        assert_eq!(configured, base);
        assert!(ConfigState::default().is_base());
    }

    #[test]
    fn has_options_detects_any_category() {
        let mut model = laptop("plain", "X1");
        assert!(!has_config_options(&model));
        for category in ComponentCategory::iter() {
            assert_eq!(option_count(&model, category), 0);
        }
        model.storage_options.push(model.storage.clone());
        assert!(has_config_options(&model));
        assert_eq!(option_count(&model, ComponentCategory::Storage), 1);
    }

    #[test]
    fn option_names_follow_index_order() {
        let model = configurable();
        assert_eq!(
            option_names(&model, ComponentCategory::Processor),
            vec!["Option CPU 0".to_string(), "Option CPU 1".to_string()]
        );
        for category in ComponentCategory::iter() {
            assert_eq!(
                option_names(&model, category).len(),
                option_count(&model, category)
            );
        }
    }

    #[test]
    fn describe_changes_lists_swapped_components() {
        let base = configurable();
        let configured = build_configured_model(
            &base,
            &ConfigState {
                processor: Some(0),
                ..ConfigState::default()
            },
        );
        assert_eq!(
            describe_changes(&base, &configured),
            vec!["processor: Option CPU 0".to_string()]
        );
    }
}
