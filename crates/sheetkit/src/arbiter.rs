//! Scroll/drag arbitration
//!
//! Decides, per event, whether a gesture moves the sheet or scrolls the
//! embedded content, and pins the content scroll position while the sheet is
//! below its tallest height.

/// Arbiter state: the content offset to hold while the sheet is moving
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollArbiter {
    frozen_scroll_offset: f32,
}

impl ScrollArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content offset captured the last time the sheet was fully open
    pub fn frozen_scroll_offset(&self) -> f32 {
        self.frozen_scroll_offset
    }

    /// Does this event drag the sheet?
    ///
    /// Chrome gestures always do. Content gestures do while the sheet is
    /// below `max_height`, or once the content is scrolled to (or past) its
    /// top. With no configured heights only chrome drags.
    pub fn drags_sheet(
        &self,
        visible_offset: f32,
        max_height: Option<f32>,
        content_offset: f32,
        from_chrome: bool,
    ) -> bool {
        if from_chrome {
            return true;
        }
        let Some(max_height) = max_height else {
            return false;
        };
        visible_offset < max_height || content_offset <= 0.0
    }

    /// Handle a content scroll notification
    ///
    /// Returns the offset the content must be forced back to, if any. Below
    /// the tallest height (and outside chrome drags) the content is held at
    /// the frozen offset; at or above it, the frozen offset follows the
    /// content.
    pub fn on_content_scroll(
        &mut self,
        visible_offset: f32,
        max_height: Option<f32>,
        content_offset: f32,
        from_chrome: bool,
    ) -> Option<f32> {
        let max_height = max_height?;

        let correction = (visible_offset < max_height && !from_chrome)
            .then_some(self.frozen_scroll_offset);

        if visible_offset >= max_height {
            self.frozen_scroll_offset = content_offset.max(0.0);
        }

        if let Some(frozen) = correction {
            tracing::trace!(content_offset, frozen, "content scroll pinned");
        }
        correction
    }
}
