//! UI-side limits of the project form
//!
//! The form record accepts any number of list elements; these limits decide
//! which add/remove controls are enabled and which screenshots are attached.

/// Bounds for an editable list of text rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimits {
    pub min: usize,
    pub max: usize,
}

impl ListLimits {
    pub const fn up_to(max: usize) -> Self {
        Self { min: 1, max }
    }

    pub fn can_append(&self, len: usize) -> bool {
        len < self.max
    }

    pub fn can_remove(&self, len: usize) -> bool {
        len > self.min
    }
}

pub const OBJECTIVES: ListLimits = ListLimits::up_to(5);
pub const FEATURES: ListLimits = ListLimits::up_to(10);
pub const LESSONS_LEARNED: ListLimits = ListLimits::up_to(10);

pub const MAX_SCREENSHOTS: usize = 3;
pub const MAX_SCREENSHOT_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// File picked in the browser, reduced to what the policy looks at
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenshotCandidate {
    pub name: String,
    pub mime: String,
    pub size: f64,
}

impl ScreenshotCandidate {
    pub fn is_acceptable(&self) -> bool {
        self.mime.starts_with("image/") && self.size <= MAX_SCREENSHOT_BYTES
    }
}

/// Outcome of applying the screenshot policy to a batch of picked files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotSelection {
    /// Indexes into the picked batch, in pick order
    pub accepted: Vec<usize>,
    /// Some files were dropped (wrong type, too large or no free slot)
    pub rejected: bool,
}

/// Free screenshot slots given how many are attached or kept already
pub fn remaining_slots(attached: usize) -> usize {
    MAX_SCREENSHOTS.saturating_sub(attached)
}

pub fn select_screenshots(candidates: &[ScreenshotCandidate], attached: usize) -> ScreenshotSelection {
    let accepted: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_acceptable())
        .map(|(i, _)| i)
        .take(remaining_slots(attached))
        .collect();
    let rejected = accepted.len() < candidates.len();
    ScreenshotSelection { accepted, rejected }
}

pub fn rejection_notice(remaining: usize) -> String {
    format!(
        "Only image files under 5MB are accepted. You can add up to {} more images.",
        remaining
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: &str, size: f64) -> ScreenshotCandidate {
        ScreenshotCandidate {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    #[test]
    fn test_list_limits() {
        assert!(OBJECTIVES.can_append(4));
        assert!(!OBJECTIVES.can_append(5));
        assert!(FEATURES.can_append(9));
        assert!(!LESSONS_LEARNED.can_append(10));
        assert!(!FEATURES.can_remove(1));
        assert!(FEATURES.can_remove(2));
    }

    #[test]
    fn test_select_filters_type_and_size() {
        let picked = vec![
            file("a.png", "image/png", 1024.0),
            file("notes.pdf", "application/pdf", 10.0),
            file("huge.jpg", "image/jpeg", MAX_SCREENSHOT_BYTES + 1.0),
            file("b.webp", "image/webp", MAX_SCREENSHOT_BYTES),
        ];
        let selection = select_screenshots(&picked, 0);
        assert_eq!(selection.accepted, vec![0, 3]);
        assert!(selection.rejected);
    }

    #[test]
    fn test_select_respects_free_slots() {
        let picked = vec![
            file("a.png", "image/png", 1.0),
            file("b.png", "image/png", 1.0),
        ];
        let selection = select_screenshots(&picked, 2);
        assert_eq!(selection.accepted, vec![0]);
        assert!(selection.rejected);

        let selection = select_screenshots(&picked, 3);
        assert!(selection.accepted.is_empty());

        let selection = select_screenshots(&picked, 0);
        assert_eq!(selection.accepted, vec![0, 1]);
        assert!(!selection.rejected);
        assert_eq!(remaining_slots(5), 0);
    }
}
