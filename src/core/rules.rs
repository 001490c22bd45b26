//! Window placement rules applied when a new client is managed.
use crate::core::tags::TagMask;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The window properties a rule can match against, as read from a newly
/// mapped window by the engine.
///
/// An empty string stands for "property not set". The engine is expected to
/// substitute its placeholder (dwm uses `"broken"`) before calling in if it
/// wants unreadable properties to be matchable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClientProps {
    /// WM_CLASS class (the second WM_CLASS string)
    pub class: String,
    /// WM_CLASS instance (the first WM_CLASS string)
    pub instance: String,
    /// WM_NAME / _NET_WM_NAME
    pub title: String,
}

impl ClientProps {
    /// Bundle up the (class, instance, title) strings of a new window
    pub fn new(
        class: impl Into<String>,
        instance: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            class: class.into(),
            instance: instance.into(),
            title: title.into(),
        }
    }
}

/// A static window classification rule.
///
/// Pattern fields are optional: `None` is a wildcard. Set patterns match as
/// SUBSTRINGS of the corresponding window property, following dwm's `strstr`
/// convention; exact-equality matching would silently stop matching real
/// applications whose properties carry suffixes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    /// Substring pattern for the window class, None to match any
    pub class: Option<String>,
    /// Substring pattern for the window instance, None to match any
    pub instance: Option<String>,
    /// Substring pattern for the window title, None to match any
    pub title: Option<String>,
    /// Tags to place the window on: the empty mask means "the currently
    /// viewed tags"
    pub tags: TagMask,
    /// Whether the window starts out floating
    pub floating: bool,
    /// Monitor to place the window on, None for no override
    pub monitor: Option<usize>,
}

impl Rule {
    /// A wildcard rule matching every window and overriding nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict this rule to windows whose class contains `pattern`
    pub fn class(mut self, pattern: impl Into<String>) -> Self {
        self.class = Some(pattern.into());
        self
    }

    /// Restrict this rule to windows whose instance contains `pattern`
    pub fn instance(mut self, pattern: impl Into<String>) -> Self {
        self.instance = Some(pattern.into());
        self
    }

    /// Restrict this rule to windows whose title contains `pattern`
    pub fn title(mut self, pattern: impl Into<String>) -> Self {
        self.title = Some(pattern.into());
        self
    }

    /// Place matched windows on the given tags
    pub fn tags(mut self, tags: TagMask) -> Self {
        self.tags = tags;
        self
    }

    /// Float matched windows
    pub fn floating(mut self) -> Self {
        self.floating = true;
        self
    }

    /// Place matched windows on the given monitor
    pub fn monitor(mut self, monitor: usize) -> Self {
        self.monitor = Some(monitor);
        self
    }

    /// True if every set pattern is a substring of the corresponding window
    /// property.
    ///
    /// A rule with no patterns matches every window; a window with all empty
    /// properties matches only such rules (an empty pattern string would too,
    /// but that is a degenerate rule, not a useful one).
    pub fn matches(&self, props: &ClientProps) -> bool {
        let field = |pattern: &Option<String>, prop: &str| match pattern {
            Some(p) => prop.contains(p.as_str()),
            None => true,
        };

        field(&self.class, &props.class)
            && field(&self.instance, &props.instance)
            && field(&self.title, &props.title)
    }
}

/// The placement decision for a newly managed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Tags for the window, or None to place it on the currently viewed tags
    pub tags: Option<TagMask>,
    /// Whether the window starts out floating
    pub floating: bool,
    /// Monitor override, or None for the currently focused monitor
    pub monitor: Option<usize>,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            tags: None,
            floating: false,
            monitor: None,
        }
    }
}

/// The ordered window rule table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rules(Vec<Rule>);

impl Rules {
    /// Construct a rule table from rules in declaration order
    pub fn new(rules: Vec<Rule>) -> Self {
        Self(rules)
    }

    /// The number of rules in the table
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the table has no rules
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the rules in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }

    /// Resolve a new window to its placement.
    ///
    /// Matching does not stop at the first hit: every matching rule
    /// contributes, with tag masks ORed together and floating / monitor taken
    /// from the last matching rule that set them. The accumulated tag mask is
    /// trimmed to `valid` and an empty result means "use the currently viewed
    /// tags". A window matching no rules gets the all-default placement.
    pub fn placement(&self, props: &ClientProps, valid: TagMask) -> Placement {
        let mut placement = Placement::default();
        let mut tags = TagMask::EMPTY;

        for rule in self.0.iter().filter(|r| r.matches(props)) {
            tags |= rule.tags;
            placement.floating = rule.floating;
            if rule.monitor.is_some() {
                placement.monitor = rule.monitor;
            }
        }

        let tags = tags & valid;
        if !tags.is_empty() {
            placement.tags = Some(tags);
        }

        placement
    }
}

impl FromIterator<Rule> for Rules {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
