//! Rendering for the playhead widget.

use super::model::Model;
use crate::seek::seek_target_ms;
use crate::timefmt::format_time;
use lipgloss_extras::prelude::*;

/// What a single bar cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Filled,
    Empty,
    LabelOnFill(char),
    LabelOnEmpty(char),
}

impl Model {
    /// Renders the bar at the displayed position.
    ///
    /// While scrubbing, the time of the scrub position is drawn on the bar:
    /// right-aligned against the end of the fill, or just after it when the
    /// position is below `label_threshold`.
    pub fn view(&self) -> String {
        self.view_as(self.displayed())
    }

    /// Renders the bar at `percent`, with the scrub label if scrubbing.
    pub fn view_as(&self, percent: f64) -> String {
        let label = self
            .is_scrubbing()
            .then(|| format_time(seek_target_ms(percent, self.truth().duration_ms)));
        self.render(&self.layout(percent, label.as_deref()))
    }

    fn layout(&self, percent: f64, label: Option<&str>) -> Vec<Cell> {
        let tw = self.width.max(0) as usize;
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        let fw = ((tw as f64) * percent / 100.0).round() as usize;
        let fw = fw.min(tw);

        let mut cells: Vec<Cell> = (0..tw)
            .map(|i| if i < fw { Cell::Filled } else { Cell::Empty })
            .collect();

        if let Some(label) = label {
            let chars: Vec<char> = label.chars().collect();
            let start = if percent < self.label_threshold {
                fw
            } else {
                fw.saturating_sub(chars.len())
            };
            for (offset, ch) in chars.into_iter().enumerate() {
                let Some(cell) = cells.get_mut(start + offset) else {
                    break;
                };
                *cell = match *cell {
                    Cell::Filled => Cell::LabelOnFill(ch),
                    _ => Cell::LabelOnEmpty(ch),
                };
            }
        }

        cells
    }

    fn render(&self, cells: &[Cell]) -> String {
        let filled = Style::new().foreground(Color::from(self.full_color.as_str()));
        let empty = Style::new().foreground(Color::from(self.empty_color.as_str()));
        let label_on_fill = Style::new()
            .foreground(Color::from(self.label_color.as_str()))
            .background(Color::from(self.full_color.as_str()));
        let label_on_empty = Style::new().foreground(Color::from(self.label_color.as_str()));

        let mut result = String::new();
        let mut run = String::new();
        let mut run_style: Option<&Style> = None;

        for cell in cells {
            let (style, ch) = match *cell {
                Cell::Filled => (&filled, self.full),
                Cell::Empty => (&empty, self.empty),
                Cell::LabelOnFill(ch) => (&label_on_fill, ch),
                Cell::LabelOnEmpty(ch) => (&label_on_empty, ch),
            };
            if run_style.is_some_and(|current| !std::ptr::eq(current, style)) {
                if let Some(current) = run_style {
                    result.push_str(&current.render(&run));
                }
                run.clear();
            }
            run_style = Some(style);
            run.push(ch);
        }
        if let Some(current) = run_style {
            result.push_str(&current.render(&run));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playhead::{new, with_fill_characters, with_width};
    use crate::truth::Truth;
    use lipgloss_extras::lipgloss;

    fn plain(view: &str) -> String {
        lipgloss::strip_ansi(view).to_string()
    }

    fn ascii_bar(width: i32, truth: Truth) -> Model {
        new(truth, &[with_width(width), with_fill_characters('#', '-')])
    }

    #[test]
    fn test_idle_bar_has_no_label() {
        let bar = ascii_bar(10, Truth::new(50.0, false, 200_000));
        assert_eq!(plain(&bar.view()), "#####-----");
    }

    #[test]
    fn test_bounds() {
        let bar = ascii_bar(10, Truth::default());
        assert_eq!(plain(&bar.view_as(0.0)), "----------");
        assert_eq!(plain(&bar.view_as(100.0)), "##########");
        assert_eq!(plain(&bar.view_as(250.0)), "##########");
        assert_eq!(plain(&bar.view_as(f64::NAN)), "----------");
    }

    #[test]
    fn test_width_is_constant() {
        let bar = ascii_bar(20, Truth::new(0.0, false, 200_000));
        for percent in [0.0, 3.0, 50.0, 97.0, 100.0] {
            assert_eq!(lipgloss::width_visible(&bar.view_as(percent)), 20);
        }
    }

    #[test]
    fn test_label_inside_fill() {
        // 50% of 200s is 1:40.
        let mut bar = ascii_bar(20, Truth::new(50.0, false, 200_000));
        bar.press();
        assert_eq!(plain(&bar.view()), "######1:40----------");
    }

    #[test]
    fn test_label_outside_near_start() {
        let mut bar = ascii_bar(20, Truth::new(5.0, false, 200_000));
        bar.press();
        // 5% of 20 cells is one filled cell, 5% of 200s is 0:10.
        assert_eq!(plain(&bar.view()), "#0:10---------------");
    }

    #[test]
    fn test_label_clipped_at_edges() {
        let mut bar = ascii_bar(3, Truth::new(100.0, false, 200_000));
        bar.press();
        assert_eq!(plain(&bar.view()), "3:2");

        let mut bar = ascii_bar(3, Truth::new(0.0, false, 200_000));
        bar.press();
        assert_eq!(plain(&bar.view()), "0:0");
    }

    #[test]
    fn test_zero_width() {
        let bar = ascii_bar(0, Truth::new(50.0, false, 1_000));
        assert_eq!(bar.view(), "");
    }
}
