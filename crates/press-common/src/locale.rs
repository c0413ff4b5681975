/// Supported display languages and their message bundles.
///
/// The locale is always resolved per request and passed down explicitly;
/// there is no process-wide "current locale".
use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Utc};
use serde_json::Value;
use tracing::warn;

pub const LOCALE_COOKIE: &str = "locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Locale code understood by the CMS.
    pub fn cms_code(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Fr => "fr",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Cookie value if it names a supported locale, otherwise the default.
    pub fn resolve(cookie: Option<&str>) -> Self {
        cookie
            .map(str::trim)
            .and_then(Self::from_code)
            .unwrap_or_default()
    }

    pub fn messages(self) -> &'static Messages {
        static EN: OnceLock<Messages> = OnceLock::new();
        static FR: OnceLock<Messages> = OnceLock::new();
        match self {
            Locale::En => EN.get_or_init(|| Messages::parse(self, include_str!("../messages/en.json"))),
            Locale::Fr => FR.get_or_init(|| Messages::parse(self, include_str!("../messages/fr.json"))),
        }
    }

    /// Long date, e.g. "March 15, 2024" or "15 mars 2024".
    pub fn format_date(self, date: &DateTime<Utc>) -> String {
        const EN_MONTHS: [&str; 12] = [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ];
        const FR_MONTHS: [&str; 12] = [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
            "septembre", "octobre", "novembre", "décembre",
        ];
        let month = date.month0() as usize;
        match self {
            Locale::En => format!("{} {}, {}", EN_MONTHS[month], date.day(), date.year()),
            Locale::Fr => format!("{} {} {}", date.day(), FR_MONTHS[month], date.year()),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A nested JSON message bundle addressed by dotted keys.
#[derive(Debug)]
pub struct Messages {
    locale: Locale,
    root: Value,
}

impl Messages {
    fn parse(locale: Locale, raw: &str) -> Self {
        let root = serde_json::from_str(raw).unwrap_or_else(|e| {
            warn!(locale = %locale, error = %e, "message bundle is not valid JSON");
            Value::Null
        });
        Self { locale, root }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Message for `key`, or the key itself when missing.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).map(str::to_string).unwrap_or_else(|| {
            warn!(locale = %self.locale, key, "missing message");
            key.to_string()
        })
    }

    /// Message for `key` with `{name}` placeholders replaced.
    pub fn t_with(&self, key: &str, args: &[(&str, &dyn fmt::Display)]) -> String {
        let mut text = self.t(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), &value.to_string());
        }
        text
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        key.split('.')
            .try_fold(&self.root, |node, part| node.get(part))?
            .as_str()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn resolve_falls_back_to_default() {
        assert_eq!(Locale::resolve(Some("fr")), Locale::Fr);
        assert_eq!(Locale::resolve(Some(" en ")), Locale::En);
        assert_eq!(Locale::resolve(Some("de")), Locale::En);
        assert_eq!(Locale::resolve(Some("")), Locale::En);
        assert_eq!(Locale::resolve(None), Locale::En);
    }

    #[test]
    fn bundles_share_keys() {
        for key in [
            "home.title",
            "pressRoom.search.placeholder",
            "pressRoom.results.filtered",
            "pressKit.assetCategories.Brand Guidelines.title",
            "error.title",
        ] {
            for locale in Locale::ALL {
                assert_ne!(locale.messages().t(key), key, "{locale} is missing {key}");
            }
        }
    }

    #[test]
    fn interpolates_placeholders() {
        let msg = Locale::En
            .messages()
            .t_with("pressRoom.results.filtered", &[("filtered", &2), ("total", &5)]);
        assert_eq!(msg, "Showing 2 of 5 press releases");
    }

    #[test]
    fn missing_key_renders_as_key() {
        assert_eq!(Locale::Fr.messages().t("does.not.exist"), "does.not.exist");
    }

    #[test]
    fn formats_long_dates_per_locale() {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        assert_eq!(Locale::En.format_date(&date), "March 15, 2024");
        assert_eq!(Locale::Fr.format_date(&date), "15 mars 2024");
    }
}
