use ratatui::layout::Rect;

/// Rect of `width` x `height` centered in `area`, clipped to `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_smaller_content() {
        let rect = centered_rect_by_size(Rect::new(0, 0, 80, 24), 20, 10);
        assert_eq!(rect, Rect::new(30, 7, 20, 10));
    }

    #[test]
    fn clips_oversized_content() {
        let rect = centered_rect_by_size(Rect::new(2, 3, 10, 5), 40, 12);
        assert_eq!(rect, Rect::new(2, 3, 10, 5));
    }

    #[test]
    fn zero_area_stays_empty() {
        let rect = centered_rect_by_size(Rect::default(), 40, 12);
        assert!(rect.is_empty());
    }
}
