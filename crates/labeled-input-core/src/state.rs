#![forbid(unsafe_code)]

//! Transient interaction state and the visuals derived from it.

use bitflags::bitflags;

/// Wrapper class set while the input has focus.
pub const FOCUS_CLASS: &str = "focus";
/// Wrapper class set while the input holds text.
pub const HAS_VALUE_CLASS: &str = "has-value";

bitflags! {
    /// Interaction flags reflected as classes on the wrapper.
    ///
    /// The two flags are independent: any combination is reachable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct VisualState: u8 {
        const FOCUS = 1 << 0;
        const HAS_VALUE = 1 << 1;
    }
}

impl VisualState {
    /// The wrapper class controlled by a single flag.
    ///
    /// Returns `None` for empty or multi-flag sets.
    #[must_use]
    pub fn class_name(self) -> Option<&'static str> {
        if self == Self::FOCUS {
            Some(FOCUS_CLASS)
        } else if self == Self::HAS_VALUE {
            Some(HAS_VALUE_CLASS)
        } else {
            None
        }
    }

    /// Classes present on the wrapper, in a stable order.
    #[must_use]
    pub fn classes(self) -> Vec<&'static str> {
        self.iter().filter_map(Self::class_name).collect()
    }

    /// Underline thickness drawn by the wrapper's `::after` decoration.
    #[must_use]
    pub fn underline_height(self) -> &'static str {
        if self.is_empty() { "1px" } else { "2px" }
    }

    /// Label pose for this state.
    ///
    /// The label floats while focused or while text is present (the
    /// placeholder is not shown).
    #[must_use]
    pub fn label_pose(self) -> LabelPose {
        if self.is_empty() {
            LabelPose::Resting
        } else {
            LabelPose::Floating
        }
    }
}

/// Where the label sits relative to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelPose {
    /// Overlaying the empty field like a placeholder.
    Resting,
    /// Shrunk and lifted above the field.
    Floating,
}

impl LabelPose {
    /// Transition applied when switching poses.
    pub const TRANSITION: &'static str = "all 0.3s";

    /// CSS `transform` for this pose.
    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Resting => "none",
            Self::Floating => "translateY(-110%) scale(0.8)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_follow_flags() {
        assert!(VisualState::empty().classes().is_empty());
        assert_eq!(VisualState::FOCUS.classes(), vec!["focus"]);
        assert_eq!(VisualState::HAS_VALUE.classes(), vec!["has-value"]);
        assert_eq!(VisualState::all().classes(), vec!["focus", "has-value"]);
    }

    #[test]
    fn underline_thickens_for_either_flag() {
        assert_eq!(VisualState::empty().underline_height(), "1px");
        assert_eq!(VisualState::FOCUS.underline_height(), "2px");
        assert_eq!(VisualState::HAS_VALUE.underline_height(), "2px");
        assert_eq!(VisualState::all().underline_height(), "2px");
    }

    #[test]
    fn label_floats_when_focused_or_filled() {
        assert_eq!(VisualState::empty().label_pose(), LabelPose::Resting);
        assert_eq!(VisualState::FOCUS.label_pose(), LabelPose::Floating);
        assert_eq!(VisualState::HAS_VALUE.label_pose(), LabelPose::Floating);
        assert_eq!(LabelPose::Floating.transform(), "translateY(-110%) scale(0.8)");
    }

    #[test]
    fn class_name_is_only_defined_for_single_flags() {
        assert_eq!(VisualState::empty().class_name(), None);
        assert_eq!(VisualState::all().class_name(), None);
    }
}
