use ratatui::widgets::ScrollbarState;

/// Lines moved by PageUp/PageDown
const PAGE_LINES: usize = 10;

/// Scroll position of a text dialog together with its scrollbar state
///
/// The offset is clamped to the content when rendering, so scrolling past the
/// end here is harmless.
#[derive(Debug, Default, Clone)]
pub struct DialogScroll {
    pub offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl DialogScroll {
    pub fn reset(&mut self) {
        self.offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar_state = self.scrollbar_state.position(offset);
    }

    pub fn up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE_LINES));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE_LINES));
    }

    pub fn to_top(&mut self) {
        self.set(0);
    }

    pub fn to_bottom(&mut self) {
        self.set(usize::MAX);
    }
}
