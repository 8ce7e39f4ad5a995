//! Staggered fade/slide-in schedule for the analyzer cards

use serde::{Deserialize, Serialize};

/// Timing and styling for the card entrance animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaggerSchedule {
    /// Extra delay per card index, in milliseconds
    pub step_ms: u32,
    /// Delay before the first card, in milliseconds
    pub offset_ms: u32,
    /// Initial downward offset of each card, in pixels
    pub slide_px: u32,
    pub transition: String,
}

impl Default for StaggerSchedule {
    fn default() -> Self {
        Self {
            step_ms: 200,
            offset_ms: 100,
            slide_px: 30,
            transition: "all 0.6s cubic-bezier(0.4,0,0.2,1)".to_string(),
        }
    }
}

/// Inline style declarations for one animation state
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub opacity: &'static str,
    pub transform: String,
    pub transition: Option<String>,
}

impl CardStyle {
    /// `(property, value)` pairs in the order they should be applied
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("opacity", self.opacity.to_string()),
            ("transform", self.transform.clone()),
        ];
        if let Some(transition) = &self.transition {
            out.push(("transition", transition.clone()));
        }
        out
    }
}

impl StaggerSchedule {
    /// Milliseconds to wait before revealing the card at `index`
    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        index
            .saturating_mul(self.step_ms)
            .saturating_add(self.offset_ms)
    }

    /// Hidden, offset state applied immediately
    pub fn initial_style(&self) -> CardStyle {
        CardStyle {
            opacity: "0",
            transform: format!("translateY({}px)", self.slide_px),
            transition: Some(self.transition.clone()),
        }
    }

    /// Resting state applied once the card's delay elapses
    pub fn final_style(&self) -> CardStyle {
        CardStyle {
            opacity: "1",
            transform: "translateY(0)".to_string(),
            transition: None,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: later cards never start before earlier ones
        #[test]
        fn delays_are_monotonic(step in 0u32..1000, offset in 0u32..1000, index in 0usize..500) {
            let schedule = StaggerSchedule { step_ms: step, offset_ms: offset, ..Default::default() };
            prop_assert!(schedule.delay_for(index) <= schedule.delay_for(index + 1));
            prop_assert_eq!(schedule.delay_for(0), offset);
        }
    }
}
