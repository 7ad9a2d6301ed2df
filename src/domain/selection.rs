// Single-selection group - shared state behind tab and accordion widgets

/// Callback fired with the new active identifier after it changes.
pub type ChangeListener<Id> = Box<dyn FnMut(Option<&Id>) + Send>;

/// Tracks which one of a set of sibling items is active.
///
/// A tab strip uses the non-collapsible variant: selecting always activates.
/// An accordion uses the collapsible variant: selecting the open item closes it.
pub struct SelectableGroup<Id> {
    items: Vec<Id>,
    active: Option<Id>,
    collapsible: bool,
    on_change: Option<ChangeListener<Id>>,
}

impl<Id: PartialEq + Clone> SelectableGroup<Id> {
    /// Tab-style group: re-selecting the active item keeps it active.
    pub fn tabs(default: Option<Id>) -> Self {
        Self::new(default, false)
    }

    /// Accordion-style group: re-selecting the active item clears the selection.
    pub fn accordion(default: Option<Id>) -> Self {
        Self::new(default, true)
    }

    pub fn new(default: Option<Id>, collapsible: bool) -> Self {
        Self {
            items: Vec::new(),
            active: default,
            collapsible,
            on_change: None,
        }
    }

    /// Register the sibling items, in display order.
    pub fn with_items(mut self, items: impl IntoIterator<Item = Id>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    pub fn on_change(mut self, listener: impl FnMut(Option<&Id>) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub fn active(&self) -> Option<&Id> {
        self.active.as_ref()
    }

    pub fn is_active(&self, id: &Id) -> bool {
        self.active.as_ref() == Some(id)
    }

    /// True when the active identifier names a registered item.
    ///
    /// An unregistered identifier can still be selected; it simply has no panel.
    pub fn has_panel(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| self.items.contains(active))
    }

    /// The active identifier that `select(id)` would leave behind.
    pub fn preview(&self, id: &Id) -> Option<Id> {
        if self.collapsible && self.is_active(id) {
            None
        } else {
            Some(id.clone())
        }
    }

    pub fn select(&mut self, id: Id) {
        let next = self.preview(&id);
        if next == self.active {
            return;
        }
        self.active = next;
        if let Some(listener) = self.on_change.as_mut() {
            listener(self.active.as_ref());
        }
    }
}

impl<Id: std::fmt::Debug> std::fmt::Debug for SelectableGroup<Id> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectableGroup")
            .field("items", &self.items)
            .field("active", &self.active)
            .field("collapsible", &self.collapsible)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_tabs_last_select_wins() {
        let mut tabs = SelectableGroup::tabs(Some("stardust"));
        for id in ["metascape", "stardust", "stardust", "metascape", "metascape"] {
            tabs.select(id);
        }
        assert_eq!(tabs.active(), Some(&"metascape"));
        assert!(tabs.is_active(&"metascape"));
        assert!(!tabs.is_active(&"stardust"));
    }

    #[test]
    fn test_tabs_reselect_does_not_collapse() {
        let mut tabs = SelectableGroup::tabs(None);
        tabs.select(1);
        tabs.select(1);
        assert_eq!(tabs.active(), Some(&1));
    }

    #[test]
    fn test_accordion_double_select_collapses() {
        let mut faq = SelectableGroup::accordion(None);
        faq.select("q1");
        assert!(faq.is_active(&"q1"));
        faq.select("q1");
        assert_eq!(faq.active(), None);
    }

    #[test]
    fn test_accordion_switches_between_items() {
        let mut faq = SelectableGroup::accordion(None);
        faq.select("q1");
        faq.select("q2");
        assert_eq!(faq.active(), Some(&"q2"));
        assert!(!faq.is_active(&"q1"));
    }

    #[test]
    fn test_unregistered_id_becomes_active_without_panel() {
        let mut tabs = SelectableGroup::tabs(Some("stardust")).with_items(["stardust", "metascape"]);
        assert!(tabs.has_panel());
        tabs.select("nebula");
        assert_eq!(tabs.active(), Some(&"nebula"));
        assert!(!tabs.has_panel());
    }

    #[test]
    fn test_preview_does_not_mutate() {
        let faq = SelectableGroup::accordion(Some("q3"));
        assert_eq!(faq.preview(&"q3"), None);
        assert_eq!(faq.preview(&"q1"), Some("q1"));
        assert_eq!(faq.active(), Some(&"q3"));
    }

    #[test]
    fn test_change_listener_fires_only_on_change() {
        let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::default();
        let sink = seen.clone();
        let mut faq = SelectableGroup::accordion(None)
            .on_change(move |id: Option<&String>| sink.lock().unwrap().push(id.cloned()));

        faq.select("q1".to_string());
        faq.select("q1".to_string());
        faq.select("q2".to_string());

        let mut tabs = SelectableGroup::tabs(Some("a".to_string()));
        tabs.select("a".to_string());

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Some("q1".to_string()), None, Some("q2".to_string())]
        );
    }

    proptest! {
        #[test]
        fn test_tabs_active_is_last_selected(
            default in proptest::option::of(0u8..6),
            picks in proptest::collection::vec(0u8..6, 1..40),
        ) {
            let mut tabs = SelectableGroup::tabs(default);
            for id in &picks {
                tabs.select(*id);
            }
            prop_assert_eq!(tabs.active(), picks.last());
        }

        #[test]
        fn test_accordion_double_select_from_any_state(
            history in proptest::collection::vec(0u8..6, 0..30),
            x in 0u8..6,
        ) {
            let mut faq = SelectableGroup::accordion(None);
            for id in history {
                faq.select(id);
            }
            faq.select(x);
            faq.select(x);
            prop_assert_eq!(faq.active(), None);
        }

        #[test]
        fn test_accordion_select_other_from_any_state(
            history in proptest::collection::vec(0u8..6, 0..30),
            x in 0u8..6,
            y in 0u8..6,
        ) {
            prop_assume!(x != y);
            let mut faq = SelectableGroup::accordion(None);
            for id in history {
                faq.select(id);
            }
            faq.select(x);
            faq.select(y);
            prop_assert_eq!(faq.active(), Some(&y));
        }
    }
}
