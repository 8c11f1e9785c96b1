//! Window metrics, measured content geometry and slide-offset math.

/// Logical size of the host window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMetrics {
    pub width: f32,
    pub height: f32,
}

impl WindowMetrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Screen-space measurement of a piece of content, captured once per layout
/// pass by the host's measurement callback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasuredGeometry {
    pub width: f32,
    pub height: f32,
    /// Distance from the left window edge.
    pub page_x: f32,
    /// Distance from the top window edge.
    pub page_y: f32,
}

impl MeasuredGeometry {
    pub fn new(width: f32, height: f32, page_x: f32, page_y: f32) -> Self {
        Self {
            width,
            height,
            page_x,
            page_y,
        }
    }
}

/// Which edge slide-in content enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    Left,
    Right,
    Top,
    #[default]
    Bottom,
}

/// Resting translate offset for fully-hidden slide content.
///
/// `keep_offset` is the portion of the content left peeking on screen.
/// Without a measurement yet this returns 0, so content shown before its
/// first layout pass appears in place rather than sliding.
pub fn hidden_offset(
    direction: SlideDirection,
    window: WindowMetrics,
    measured: Option<&MeasuredGeometry>,
    keep_offset: f32,
) -> f32 {
    let Some(m) = measured else {
        return 0.0;
    };

    match direction {
        SlideDirection::Left => -(m.page_x + m.width) + keep_offset,
        SlideDirection::Right => window.width - m.page_x - keep_offset,
        SlideDirection::Top => -(m.page_y + m.height) + keep_offset,
        SlideDirection::Bottom => window.height - m.page_y - keep_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> WindowMetrics {
        WindowMetrics::new(400.0, 800.0)
    }

    #[test]
    fn offset_defaults_to_zero_before_measurement() {
        for direction in [
            SlideDirection::Left,
            SlideDirection::Right,
            SlideDirection::Top,
            SlideDirection::Bottom,
        ] {
            assert_eq!(hidden_offset(direction, window(), None, 0.0), 0.0);
        }
    }

    #[test]
    fn bottom_offset_pushes_content_past_window_bottom() {
        let m = MeasuredGeometry::new(400.0, 200.0, 0.0, 600.0);
        // Needs to travel its full height to clear the bottom edge.
        assert_eq!(
            hidden_offset(SlideDirection::Bottom, window(), Some(&m), 0.0),
            200.0
        );
    }

    #[test]
    fn top_offset_is_negative() {
        let m = MeasuredGeometry::new(400.0, 150.0, 0.0, 0.0);
        assert_eq!(
            hidden_offset(SlideDirection::Top, window(), Some(&m), 0.0),
            -150.0
        );
    }

    #[test]
    fn horizontal_offsets_account_for_page_position() {
        let m = MeasuredGeometry::new(100.0, 50.0, 40.0, 300.0);
        assert_eq!(
            hidden_offset(SlideDirection::Left, window(), Some(&m), 0.0),
            -140.0
        );
        assert_eq!(
            hidden_offset(SlideDirection::Right, window(), Some(&m), 0.0),
            360.0
        );
    }

    #[test]
    fn keep_offset_shortens_the_travel() {
        let m = MeasuredGeometry::new(400.0, 200.0, 0.0, 600.0);
        assert_eq!(
            hidden_offset(SlideDirection::Bottom, window(), Some(&m), 30.0),
            170.0
        );
    }
}
