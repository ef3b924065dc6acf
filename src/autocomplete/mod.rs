//! Autocomplete session.
//!
//! An [`AutocompleteSession`] is the single owner of a [`KukuiTrie`] and of the
//! catalog collaborators it was built with. It is constructed explicitly and
//! handed to whatever front end drives it; nothing here is global.
//!
//! Failures in the collaborators never escape the session. A failed name
//! fetch leaves the trie empty, and a failed detail lookup leaves the
//! current card untouched. Both are reported through the session's
//! [`ErrorReporter`].

mod card;
pub mod repl;

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

pub use card::CountryCard;

use crate::catalog::{DetailProvider, NameProvider};
use crate::config::SuggestConfig;
use crate::data_structures::KukuiTrie;
use crate::error::{ErrorContext, ErrorReporter, TracingErrorReporter};

/// The result of one input change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    /// The query actually sent to the trie
    pub query: String,

    /// Matching names, in trie order
    pub items: Vec<String>,

    /// Whether the suggestion list should be shown at all
    pub visible: bool,
}

impl Suggestions {
    /// Returns `true` if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Autocomplete state for one user-facing input.
pub struct AutocompleteSession {
    trie: KukuiTrie,
    names: Arc<dyn NameProvider>,
    details: Arc<dyn DetailProvider>,
    config: SuggestConfig,
    reporter: Arc<dyn ErrorReporter>,
    list_visible: bool,
    current_card: Option<CountryCard>,
}

impl std::fmt::Debug for AutocompleteSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutocompleteSession")
            .field("words", &self.trie.len())
            .field("config", &self.config)
            .field("reporter", &self.reporter)
            .field("list_visible", &self.list_visible)
            .field("current_card", &self.current_card)
            .finish_non_exhaustive()
    }
}

impl AutocompleteSession {
    /// Creates an empty session over separate name and detail providers.
    pub fn new(
        names: Arc<dyn NameProvider>,
        details: Arc<dyn DetailProvider>,
        config: SuggestConfig,
    ) -> Self {
        Self {
            trie: KukuiTrie::new(),
            names,
            details,
            config,
            reporter: Arc::new(TracingErrorReporter),
            list_visible: false,
            current_card: None,
        }
    }

    /// Creates an empty session over a catalog that provides both names and details.
    pub fn from_catalog<C>(catalog: Arc<C>, config: SuggestConfig) -> Self
    where
        C: NameProvider + DetailProvider + 'static,
    {
        Self::new(catalog.clone(), catalog, config)
    }

    /// Replaces the reporter used for degraded failures.
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Fetches every name from the name provider and indexes it.
    ///
    /// # Returns
    ///
    /// The number of distinct names added. A failed fetch is reported and
    /// counts as zero names available.
    #[instrument(skip(self))]
    pub async fn initialize(&mut self) -> usize {
        let names = match self.names.fetch_names().await {
            Ok(names) => names,
            Err(e) => {
                self.reporter.report(
                    ErrorContext::new(e, "catalog")
                        .with_details("fetching country names")
                        .with_span_trace(),
                );
                Vec::new()
            }
        };

        if names.is_empty() {
            warn!("No country names fetched");
            return 0;
        }

        let added = self.populate(names);
        info!(added, total = self.trie.len(), "Autocomplete index populated");
        added
    }

    /// Indexes the given names directly.
    ///
    /// # Returns
    ///
    /// The number of names that were not already indexed.
    pub fn populate<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for name in names {
            if self.trie.insert(name) {
                added += 1;
            }
        }
        added
    }

    /// Handles a change of the input value.
    ///
    /// The input is trimmed (unless disabled), searched in the trie and
    /// truncated to the configured maximum. An empty query skips the search,
    /// hides the list and clears the current card.
    pub fn suggest(&mut self, input: &str) -> Suggestions {
        let query = if self.config.trim_input {
            input.trim()
        } else {
            input
        };

        let visible = !query.is_empty();
        self.list_visible = visible;

        let items: Vec<String> = if !visible {
            self.current_card = None;
            Vec::new()
        } else {
            match self.config.max_suggestions {
                Some(max) => self.trie.search_iter(query).take(max).collect(),
                None => self.trie.search(query),
            }
        };

        debug!(query, matches = items.len(), "Computed suggestions");
        Suggestions {
            query: query.to_string(),
            items,
            visible,
        }
    }

    /// Handles the selection of a suggestion.
    ///
    /// Hides the suggestion list and looks up the details for `name`. On
    /// success the new card replaces the current one and is returned. On
    /// failure the error is reported, the current card is kept and `None`
    /// is returned.
    #[instrument(skip(self))]
    pub async fn select(&mut self, name: &str) -> Option<CountryCard> {
        self.list_visible = false;

        match self.details.fetch_details(name).await {
            Ok(record) => {
                let card = CountryCard::from(&record);
                self.current_card = Some(card.clone());
                Some(card)
            }
            Err(e) => {
                self.reporter.report(
                    ErrorContext::new(e, "catalog")
                        .with_details(format!("fetching details for {name}"))
                        .with_span_trace(),
                );
                None
            }
        }
    }

    /// Hides the suggestion list without touching the current card.
    pub fn dismiss(&mut self) {
        self.list_visible = false;
    }

    /// Returns `true` while the suggestion list is shown.
    pub fn is_list_visible(&self) -> bool {
        self.list_visible
    }

    /// Returns the card of the last successful selection, if any.
    pub fn current_card(&self) -> Option<&CountryCard> {
        self.current_card.as_ref()
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &KukuiTrie {
        &self.trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CountryRecord, MockDetailProvider, MockNameProvider};
    use crate::error::CatalogError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingReporter {
        reported: AtomicUsize,
    }

    impl ErrorReporter for CountingReporter {
        fn report(&self, _context: ErrorContext) {
            self.reported.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn names_returning(names: &'static [&'static str]) -> MockNameProvider {
        let mut provider = MockNameProvider::new();
        provider
            .expect_fetch_names()
            .times(1)
            .returning(move || Ok(names.iter().map(|n| n.to_string()).collect()));
        provider
    }

    fn session(names: MockNameProvider, details: MockDetailProvider) -> AutocompleteSession {
        AutocompleteSession::new(Arc::new(names), Arc::new(details), SuggestConfig::default())
    }

    #[tokio::test]
    async fn test_initialize_indexes_every_name() {
        let mut session = session(
            names_returning(&["Germany", "Georgia", "Ghana", "Germany"]),
            MockDetailProvider::new(),
        );

        assert_eq!(session.initialize().await, 3);
        assert_eq!(session.trie().len(), 3);
        assert_eq!(session.suggest("Ge").items, vec!["Georgia", "Germany"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_degrades_to_empty_index() {
        let mut names = MockNameProvider::new();
        names
            .expect_fetch_names()
            .returning(|| Err(CatalogError::Other("service unavailable".to_string())));

        let reporter = Arc::new(CountingReporter::default());
        let mut session =
            session(names, MockDetailProvider::new()).with_reporter(reporter.clone());

        assert_eq!(session.initialize().await, 0);
        assert!(session.trie().is_empty());
        assert!(session.suggest("G").is_empty());
        assert_eq!(reporter.reported.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_suggest_trims_and_toggles_visibility() {
        let mut session = session(names_returning(&["Chad", "Chile", "China"]), MockDetailProvider::new());
        session.initialize().await;

        let suggestions = session.suggest("  Chi ");
        assert_eq!(suggestions.query, "Chi");
        assert_eq!(suggestions.items, vec!["Chile", "China"]);
        assert!(suggestions.visible);
        assert!(session.is_list_visible());

        let suggestions = session.suggest("   ");
        assert!(!suggestions.visible);
        assert!(!session.is_list_visible());
        assert_eq!(suggestions.query, "");
        assert!(suggestions.items.is_empty());
    }

    #[tokio::test]
    async fn test_empty_input_skips_search_but_keeps_index() {
        let mut session = session(names_returning(&["Chad", "Chile", "China"]), MockDetailProvider::new());
        session.initialize().await;

        for input in ["", " ", "\t\n"] {
            let suggestions = session.suggest(input);
            assert!(suggestions.is_empty(), "input {input:?} produced {:?}", suggestions.items);
            assert!(!suggestions.visible);
        }
        assert_eq!(session.trie().search("").len(), 3);
        assert_eq!(session.suggest("C").items.len(), 3);
    }

    #[tokio::test]
    async fn test_suggest_respects_limit_and_trim_setting() {
        let mut names = MockNameProvider::new();
        names
            .expect_fetch_names()
            .returning(|| Ok(vec![" Niue".to_string(), "Nauru".to_string(), "Nepal".to_string()]));
        let config = SuggestConfig {
            max_suggestions: Some(1),
            trim_input: false,
        };
        let mut session =
            AutocompleteSession::new(Arc::new(names), Arc::new(MockDetailProvider::new()), config);
        session.initialize().await;

        assert_eq!(session.suggest("N").items, vec!["Nauru"]);
        assert_eq!(session.suggest(" N").items, vec![" Niue"]);
    }

    #[tokio::test]
    async fn test_select_sets_card_and_failure_keeps_it() {
        let mut details = MockDetailProvider::new();
        details
            .expect_fetch_details()
            .withf(|name| name == "Ghana")
            .returning(|_| {
                let mut record = CountryRecord::named("Ghana");
                record.capital = vec!["Accra".to_string()];
                record.population = 31_072_945;
                Ok(record)
            });
        details
            .expect_fetch_details()
            .withf(|name| name == "Gondor")
            .returning(|name| Err(CatalogError::NotFound(name.to_string())));

        let reporter = Arc::new(CountingReporter::default());
        let mut session = session(names_returning(&["Ghana"]), details)
            .with_reporter(reporter.clone());
        session.initialize().await;
        session.suggest("Gh");

        let card = session.select("Ghana").await.expect("card for Ghana");
        assert_eq!(card.capital, "Accra");
        assert_eq!(card.population_display(), "31,072,945");
        assert!(!session.is_list_visible());

        assert!(session.select("Gondor").await.is_none());
        assert_eq!(session.current_card().map(|c| c.name.as_str()), Some("Ghana"));
        assert_eq!(reporter.reported.load(Ordering::SeqCst), 1);

        // Clearing the input clears the card
        session.suggest("");
        assert!(session.current_card().is_none());
    }

    #[tokio::test]
    async fn test_dismiss_keeps_card() {
        let mut details = MockDetailProvider::new();
        details
            .expect_fetch_details()
            .returning(|name| Ok(CountryRecord::named(name.to_string())));

        let mut session = session(names_returning(&["Peru"]), details);
        session.initialize().await;
        session.suggest("P");
        session.select("Peru").await;
        session.suggest("Pe");
        assert!(session.is_list_visible());

        session.dismiss();
        assert!(!session.is_list_visible());
        assert!(session.current_card().is_some());
    }
}
