// Accessibility rules

/// Attribute set on elements that already carry the keyboard-activation listener.
pub const ACTIVATION_MARKER_ATTR: &str = "data-keyboard-activation";

/// An element that may receive a synthesized `aria-label`.
pub trait LabelTarget {
    /// `None` when the element has no `aria-label` attribute at all.
    fn aria_label(&self) -> Option<String>;
    fn visible_text(&self) -> String;
    fn set_aria_label(&self, label: &str);
}

/// Label to add to a button, derived from its visible text.
///
/// Returns `None` when the element is already labelled (even with an empty
/// attribute) or its trimmed text is empty.
#[must_use]
pub fn synthesized_label(existing: Option<&str>, text: &str) -> Option<String> {
    if existing.is_some() {
        return None;
    }
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Label every unlabelled target from its text. Returns how many labels were added.
///
/// Safe to run repeatedly: labelled elements are skipped.
pub fn apply_synthesized_labels<T, I>(targets: I) -> usize
where
    T: LabelTarget,
    I: IntoIterator<Item = T>,
{
    let mut applied = 0;
    for target in targets {
        let existing = target.aria_label();
        if let Some(label) = synthesized_label(existing.as_deref(), &target.visible_text()) {
            target.set_aria_label(&label);
            applied += 1;
        }
    }
    applied
}

/// Enter and Space activate an element like a pointer click.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
