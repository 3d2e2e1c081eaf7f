/// Offset in px past which the header turns opaque.
pub const SCROLL_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Transparent,
    Solid,
}

impl HeaderStyle {
    pub fn for_offset(offset: u32) -> Self {
        if offset > SCROLL_THRESHOLD {
            HeaderStyle::Solid
        } else {
            HeaderStyle::Transparent
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            HeaderStyle::Transparent => "bg-transparent",
            HeaderStyle::Solid => "bg-background/80 backdrop-blur-md shadow-sm",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: u32,
}

impl ScrollState {
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLL_THRESHOLD
    }

    pub fn header_style(&self) -> HeaderStyle {
        HeaderStyle::for_offset(self.offset)
    }
}

/// Scroll offset bookkeeping for the header, alive between attach and detach.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    state: Option<ScrollState>,
}

impl ScrollTracker {
    pub fn attach(&mut self) {
        self.state = Some(ScrollState::default());
    }

    pub fn detach(&mut self) {
        self.state = None;
    }

    pub fn is_attached(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<ScrollState> {
        self.state
    }

    /// Records a raw `scrollY` reading. Browsers report fractional and,
    /// while rubber-banding, negative values.
    pub fn record(&mut self, scroll_y: f64) -> Option<HeaderStyle> {
        let state = self.state.as_mut()?;
        state.offset = clamp_offset(scroll_y);
        Some(state.header_style())
    }

    pub fn header_style(&self) -> HeaderStyle {
        self.state
            .map(|s| s.header_style())
            .unwrap_or(HeaderStyle::Transparent)
    }
}

fn clamp_offset(scroll_y: f64) -> u32 {
    if scroll_y.is_nan() || scroll_y <= 0.0 {
        0
    } else if scroll_y >= u32::MAX as f64 {
        u32::MAX
    } else {
        scroll_y.round() as u32
    }
}
