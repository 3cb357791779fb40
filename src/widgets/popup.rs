use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Horizontal anchor for a floating rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAnchor {
    Left,
    Center,
    Right,
}

/// Vertical anchor for a floating rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAnchor {
    Top,
    Bottom,
}

/// Place a `width` x `height` rectangle against an edge of `frame_area`,
/// keeping `margin` cells from the anchored edges.
///
/// `row_offset` pushes the rectangle away from the anchored vertical edge,
/// which lets several floating rectangles stack without overlapping.
/// The result is clamped to the frame; an offset that pushes the rectangle
/// entirely past the frame yields height 0.
pub fn anchored_rect(
    frame_area: Rect,
    width: u16,
    height: u16,
    margin: u16,
    row_offset: u16,
    h: HAnchor,
    v: VAnchor,
) -> Rect {
    let width = width.min(frame_area.width.saturating_sub(margin.saturating_mul(2)));
    let height = height.min(frame_area.height.saturating_sub(margin.saturating_mul(2)));

    let x = match h {
        HAnchor::Left => frame_area.x.saturating_add(margin),
        HAnchor::Center => frame_area
            .x
            .saturating_add(frame_area.width.saturating_sub(width) / 2),
        HAnchor::Right => frame_area
            .x
            .saturating_add(frame_area.width.saturating_sub(width.saturating_add(margin))),
    };

    // Stacked rects that run past the frame are shrunk rather than overflowing
    let (y, height) = match v {
        VAnchor::Top => {
            let y = frame_area
                .y
                .saturating_add(margin)
                .saturating_add(row_offset);
            let bottom = frame_area.y.saturating_add(frame_area.height);
            (y, height.min(bottom.saturating_sub(y)))
        }
        VAnchor::Bottom => {
            // Rows between the frame top and the rect's bottom edge
            let available = frame_area
                .height
                .saturating_sub(margin.saturating_add(row_offset));
            let height = height.min(available);
            (frame_area.y.saturating_add(available - height), height)
        }
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
