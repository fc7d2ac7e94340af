//! Host capability interface
//!
//! The sheet never touches views directly. A host (the native UI layer, or
//! [`HeadlessHost`] in tests) measures content, renders the sheet at an
//! offset, and owns the embedded scroll region.

use crate::config::Appearance;

/// What the sheet needs from the UI layer it is embedded in
pub trait SheetHost {
    /// Full height of the scrollable content
    fn measure_intrinsic_content_height(&self) -> f32;

    /// Height of the header and dragger bar above the scroll region
    fn chrome_height(&self) -> f32 {
        0.0
    }

    /// Render the sheet with its top edge `offset` above the bottom edge
    fn set_visible_offset(&mut self, offset: f32);

    /// Resize the visible part of the scroll region
    fn set_content_viewport_height(&mut self, _height: f32) {}

    /// Current scroll position of the content (0 = top, negative while
    /// bouncing past the top)
    fn content_scroll_offset(&self) -> f32;

    /// Move the content scroll position
    fn set_content_scroll_offset(&mut self, offset: f32, animated: bool);

    /// Apply corner radius, shadow and dragger bar visibility
    fn apply_appearance(&mut self, _appearance: &Appearance) {}
}

/// In-memory host that records everything the sheet asks of it
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    content_height: f32,
    chrome_height: f32,
    content_offset: f32,
    visible_offset: f32,
    viewport_height: f32,
    appearance: Option<Appearance>,
    /// Every offset written, in order
    pub offsets: Vec<f32>,
    /// Every forced content scroll `(offset, animated)`, in order
    pub scroll_writes: Vec<(f32, bool)>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content_height(mut self, height: f32) -> Self {
        self.content_height = height;
        self
    }

    pub fn with_chrome_height(mut self, height: f32) -> Self {
        self.chrome_height = height;
        self
    }

    /// Simulate the user scrolling the content, clamped to its extent
    pub fn scroll_content_to(&mut self, offset: f32) {
        self.content_offset = offset.min(self.max_content_offset());
    }

    /// Largest offset the content can rest at
    pub fn max_content_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    pub fn visible_offset(&self) -> f32 {
        self.visible_offset
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn appearance(&self) -> Option<&Appearance> {
        self.appearance.as_ref()
    }
}

impl SheetHost for HeadlessHost {
    fn measure_intrinsic_content_height(&self) -> f32 {
        self.content_height
    }

    fn chrome_height(&self) -> f32 {
        self.chrome_height
    }

    fn set_visible_offset(&mut self, offset: f32) {
        self.visible_offset = offset;
        self.offsets.push(offset);
    }

    fn set_content_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    fn content_scroll_offset(&self) -> f32 {
        self.content_offset
    }

    fn set_content_scroll_offset(&mut self, offset: f32, animated: bool) {
        self.content_offset = offset;
        self.scroll_writes.push((offset, animated));
    }

    fn apply_appearance(&mut self, appearance: &Appearance) {
        self.appearance = Some(*appearance);
    }
}
