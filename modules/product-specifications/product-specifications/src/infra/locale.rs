use crate::domain::ports::LocaleProvider;

/// Default locale taken from module configuration.
#[derive(Debug, Clone)]
pub struct ConfiguredLocaleProvider {
    locale: String,
}

impl ConfiguredLocaleProvider {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

impl LocaleProvider for ConfiguredLocaleProvider {
    fn default_locale(&self) -> String {
        self.locale.clone()
    }
}
