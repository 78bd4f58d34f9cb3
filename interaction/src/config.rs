//! Per-page interaction configuration.
//!
//! Each page supplies its own allowlist of interactive selectors. Targets are
//! classified by the host with `Element::closest`, so the core only sees the
//! resulting [`TargetKind`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Selectors whose descendants are form inputs. Never treated as selection gestures.
pub const INPUT_SELECTORS: &[&str] = &["input", "textarea", "label", "form"];

/// Selectors interactive on every page.
pub const BASE_INTERACTIVE_SELECTORS: &[&str] = &["button", "a"];

/// How the element under the pointer participates in selection tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetKind {
    /// Background, text, or any element outside the allowlists.
    #[default]
    Plain,
    /// Button, link, or a page-specific hoverable item.
    Interactive,
    /// Form field or anything inside a form.
    Input,
}

impl TargetKind {
    /// Pointer movement over excluded targets never drives parallax.
    #[must_use]
    pub fn is_excluded(self) -> bool {
        !matches!(self, Self::Plain)
    }
}

/// Configuration of one page's interaction session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionConfig {
    /// Page-specific hoverable selectors added to [`BASE_INTERACTIVE_SELECTORS`].
    pub extra_interactive: Vec<String>,
    /// Whether the page wires a hard-freeze signal (form focus).
    pub freeze_on_focus: bool,
}

impl InteractionConfig {
    /// About page: skill badges are hoverable.
    #[must_use]
    pub fn about() -> Self {
        Self { extra_interactive: vec![".skill-item".to_owned()], freeze_on_focus: false }
    }

    /// Projects page: filter buttons and project cards are hoverable.
    #[must_use]
    pub fn projects() -> Self {
        Self {
            extra_interactive: vec![".filter-button".to_owned(), ".project-card".to_owned()],
            freeze_on_focus: false,
        }
    }

    /// Contact page: contact rows are hoverable and form focus freezes parallax.
    #[must_use]
    pub fn contact() -> Self {
        Self { extra_interactive: vec![".contact-item".to_owned()], freeze_on_focus: true }
    }

    /// Comma-joined selector list for a single `closest` query on inputs.
    #[must_use]
    pub fn input_selector(&self) -> String {
        INPUT_SELECTORS.join(", ")
    }

    /// Comma-joined selector list for a single `closest` query on interactive items.
    #[must_use]
    pub fn interactive_selector(&self) -> String {
        BASE_INTERACTIVE_SELECTORS
            .iter()
            .map(|s| (*s).to_owned())
            .chain(self.extra_interactive.iter().cloned())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Classify a target given a predicate answering "does the target or an
    /// ancestor match this selector list". Inputs take precedence.
    pub fn classify<F>(&self, mut matches: F) -> TargetKind
    where
        F: FnMut(&str) -> bool,
    {
        if matches(&self.input_selector()) {
            TargetKind::Input
        } else if matches(&self.interactive_selector()) {
            TargetKind::Interactive
        } else {
            TargetKind::Plain
        }
    }
}
