// Controlled toggle switch and the console state that owns the switches

/// A two-state switch whose value is owned by its parent.
///
/// The switch only reads `checked` and reports the value it wants next; it
/// never stores or flips anything itself.
pub struct ToggleSwitch<'a> {
    checked: bool,
    on_checked_change: &'a mut dyn FnMut(bool),
}

/// What a switch renders: an ARIA switch with its checked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchView {
    pub role: &'static str,
    pub aria_checked: bool,
}

impl SwitchView {
    pub fn new(checked: bool) -> Self {
        Self {
            role: "switch",
            aria_checked: checked,
        }
    }
}

impl<'a> ToggleSwitch<'a> {
    pub fn new(checked: bool, on_checked_change: &'a mut dyn FnMut(bool)) -> Self {
        Self {
            checked,
            on_checked_change,
        }
    }

    pub fn view(&self) -> SwitchView {
        SwitchView::new(self.checked)
    }

    /// User activation: request the negation of the value last provided.
    pub fn activate(&mut self) {
        (self.on_checked_change)(!self.checked);
    }
}

/// The feature switches on the live console panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleFeature {
    ArView,
    AutoClean,
    SmartFeed,
    MetaverseSync,
}

impl ConsoleFeature {
    pub const ALL: [ConsoleFeature; 4] = [
        ConsoleFeature::ArView,
        ConsoleFeature::AutoClean,
        ConsoleFeature::SmartFeed,
        ConsoleFeature::MetaverseSync,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConsoleFeature::ArView => "AR/第一视角",
            ConsoleFeature::AutoClean => "自主清洁",
            ConsoleFeature::SmartFeed => "智能投喂",
            ConsoleFeature::MetaverseSync => "元宇宙同步",
        }
    }

    /// Query-string key used when the console state travels in a URL.
    pub fn query_key(self) -> &'static str {
        match self {
            ConsoleFeature::ArView => "ar",
            ConsoleFeature::AutoClean => "clean",
            ConsoleFeature::SmartFeed => "feed",
            ConsoleFeature::MetaverseSync => "meta",
        }
    }
}

/// Owner of the console switch values. Every switch starts switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleToggles {
    pub ar_view: bool,
    pub auto_clean: bool,
    pub smart_feed: bool,
    pub metaverse_sync: bool,
}

impl Default for ConsoleToggles {
    fn default() -> Self {
        Self {
            ar_view: true,
            auto_clean: true,
            smart_feed: true,
            metaverse_sync: true,
        }
    }
}

impl ConsoleToggles {
    pub fn get(&self, feature: ConsoleFeature) -> bool {
        match feature {
            ConsoleFeature::ArView => self.ar_view,
            ConsoleFeature::AutoClean => self.auto_clean,
            ConsoleFeature::SmartFeed => self.smart_feed,
            ConsoleFeature::MetaverseSync => self.metaverse_sync,
        }
    }

    pub fn view(&self, feature: ConsoleFeature) -> SwitchView {
        SwitchView::new(self.get(feature))
    }

    pub fn set(&mut self, feature: ConsoleFeature, value: bool) {
        *self.slot(feature) = value;
    }

    /// Route one user activation through the feature's switch and apply
    /// whatever value it reports.
    pub fn activate(&mut self, feature: ConsoleFeature) {
        let checked = self.get(feature);
        let slot = self.slot(feature);
        let mut apply = |value: bool| *slot = value;
        ToggleSwitch::new(checked, &mut apply).activate();
    }

    /// The value this feature's switch would report if activated now.
    pub fn requested(&self, feature: ConsoleFeature) -> bool {
        let mut requested = self.get(feature);
        let mut capture = |value: bool| requested = value;
        ToggleSwitch::new(self.get(feature), &mut capture).activate();
        requested
    }

    fn slot(&mut self, feature: ConsoleFeature) -> &mut bool {
        match feature {
            ConsoleFeature::ArView => &mut self.ar_view,
            ConsoleFeature::AutoClean => &mut self.auto_clean,
            ConsoleFeature::SmartFeed => &mut self.smart_feed,
            ConsoleFeature::MetaverseSync => &mut self.metaverse_sync,
        }
    }
}
