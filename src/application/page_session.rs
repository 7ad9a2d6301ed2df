// Page session - widget state of one landing page view
use crate::application::token_source::TokenSource;
use crate::domain::catalog::{DEFAULT_SERIES, FAQ, SERIES};
use crate::domain::selection::SelectableGroup;
use crate::domain::toggle::{ConsoleFeature, ConsoleToggles};
use serde::Deserialize;

/// Widget state as carried in a URL query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageQuery {
    pub series: Option<String>,
    pub faq: Option<String>,
    pub ar: Option<String>,
    pub clean: Option<String>,
    pub feed: Option<String>,
    pub meta: Option<String>,
}

fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

impl PageQuery {
    fn flag(&self, feature: ConsoleFeature) -> Option<&str> {
        match feature {
            ConsoleFeature::ArView => self.ar.as_deref(),
            ConsoleFeature::AutoClean => self.clean.as_deref(),
            ConsoleFeature::SmartFeed => self.feed.as_deref(),
            ConsoleFeature::MetaverseSync => self.meta.as_deref(),
        }
    }

    fn set_flag(&mut self, feature: ConsoleFeature, value: bool) {
        let encoded = Some(if value { "1" } else { "0" }.to_string());
        match feature {
            ConsoleFeature::ArView => self.ar = encoded,
            ConsoleFeature::AutoClean => self.clean = encoded,
            ConsoleFeature::SmartFeed => self.feed = encoded,
            ConsoleFeature::MetaverseSync => self.meta = encoded,
        }
    }

    /// Render as `?key=value&...`, skipping unset keys.
    pub fn to_query_string(&self) -> String {
        let pairs = [
            ("series", &self.series),
            ("faq", &self.faq),
            ("ar", &self.ar),
            ("clean", &self.clean),
            ("feed", &self.feed),
            ("meta", &self.meta),
        ];
        let encoded: Vec<String> = pairs
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_ref()
                    .map(|v| format!("{}={}", key, urlencoding::encode(v)))
            })
            .collect();
        if encoded.is_empty() {
            String::new()
        } else {
            format!("?{}", encoded.join("&"))
        }
    }
}

/// State owned by a single rendering of the landing page.
///
/// Each widget owns its own state; nothing here is shared between sessions.
#[derive(Debug)]
pub struct PageSession {
    pub series: SelectableGroup<String>,
    pub faq: SelectableGroup<String>,
    pub console: ConsoleToggles,
    token: Option<String>,
}

impl Default for PageSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSession {
    pub fn new() -> Self {
        let series = SelectableGroup::tabs(Some(DEFAULT_SERIES.to_string()))
            .with_items(SERIES.iter().map(|s| s.id.to_string()))
            .on_change(|id: Option<&String>| tracing::debug!(series = ?id, "product series changed"));
        let faq = SelectableGroup::accordion(None)
            .with_items(FAQ.iter().map(|f| f.id.to_string()))
            .on_change(|id: Option<&String>| tracing::debug!(faq = ?id, "faq item toggled"));

        Self {
            series,
            faq,
            console: ConsoleToggles::default(),
            token: None,
        }
    }

    /// Rebuild a session by replaying the selections named in `query`.
    ///
    /// Unknown identifiers are accepted as-is; unreadable switch values keep
    /// their defaults.
    pub fn from_query(query: &PageQuery) -> Self {
        let mut session = Self::new();
        if let Some(series) = &query.series {
            session.series.select(series.clone());
        }
        if let Some(faq) = &query.faq {
            session.faq.select(faq.clone());
        }
        for feature in ConsoleFeature::ALL {
            if let Some(value) = parse_flag(query.flag(feature)) {
                session.console.set(feature, value);
            }
        }
        session
    }

    pub fn to_query(&self) -> PageQuery {
        let mut query = PageQuery {
            series: self.series.active().cloned(),
            faq: self.faq.active().cloned(),
            ..PageQuery::default()
        };
        for feature in ConsoleFeature::ALL {
            query.set_flag(feature, self.console.get(feature));
        }
        query
    }

    /// Query for the page after the series tab `id` is clicked.
    pub fn link_for_series(&self, id: &str) -> PageQuery {
        PageQuery {
            series: self.series.preview(&id.to_string()),
            ..self.to_query()
        }
    }

    /// Query for the page after the FAQ header `id` is clicked.
    pub fn link_for_faq(&self, id: &str) -> PageQuery {
        PageQuery {
            faq: self.faq.preview(&id.to_string()),
            ..self.to_query()
        }
    }

    /// Query for the page after the console switch for `feature` is clicked.
    pub fn link_for_switch(&self, feature: ConsoleFeature) -> PageQuery {
        let mut query = self.to_query();
        query.set_flag(feature, self.console.requested(feature));
        query
    }

    /// Fetch the assistant token once. On failure the token stays unset.
    pub async fn bootstrap(&mut self, source: &dyn TokenSource) {
        match source.fetch_token().await {
            Ok(token) => self.token = Some(token),
            Err(e) => {
                tracing::warn!("Assistant token unavailable, continuing without it: {:#}", e);
                self.token = None;
            }
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn assistant_available(&self) -> bool {
        self.token.is_some()
    }
}
