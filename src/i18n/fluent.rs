// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for (locale, content) in load_resources(i18n_dir) {
            let res = FluentResource::try_new(content).expect("Failed to parse FTL file.");
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Keep formatted output free of Unicode isolation marks so
            // interpolated values render verbatim in widgets.
            bundle.set_use_isolating(false);
            bundle.add_resource(res).expect("Failed to add resource.");
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Formats a message with named arguments (e.g. `{ $reason }`).
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(name.to_string(), value.to_string());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Collects `(locale, ftl-source)` pairs, preferring an on-disk directory
/// over the embedded resources when one is supplied.
fn load_resources(i18n_dir: Option<String>) -> Vec<(LanguageIdentifier, String)> {
    if let Some(dir) = i18n_dir {
        if let Ok(entries) = std::fs::read_dir(&dir) {
            let mut resources = Vec::new();
            for entry in entries.flatten() {
                let file_name = entry.file_name();
                let file_name = file_name.to_string_lossy();
                if let Some(locale_str) = file_name.strip_suffix(".ftl") {
                    if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                        if let Ok(content) = std::fs::read_to_string(entry.path()) {
                            resources.push((locale, content));
                        }
                    }
                }
            }
            if !resources.is_empty() {
                return resources;
            }
        }
    }

    let mut resources = Vec::new();
    for file in Asset::iter() {
        let filename = file.as_ref();
        if let Some(locale_str) = filename.strip_suffix(".ftl") {
            if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                if let Some(content) = Asset::get(filename) {
                    resources.push((
                        locale,
                        String::from_utf8_lossy(content.data.as_ref()).to_string(),
                    ));
                }
            }
        }
    }
    resources
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
