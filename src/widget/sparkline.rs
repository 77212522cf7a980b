use iced::widget::canvas::{self, Cache, Frame, Path, Stroke};
use iced::{Point, Rectangle, Renderer, Size, Theme, mouse};

const GRID_TARGET_LINES: usize = 4;
const VERTICAL_PADDING: f32 = 8.0;

/// Static line chart used as the market-trend placeholder.
pub struct Sparkline {
    points: Vec<f32>,
    cache: Cache,
}

impl Sparkline {
    pub fn new(points: Vec<f32>) -> Self {
        Self {
            points,
            cache: Cache::new(),
        }
    }

    /// Forces a redraw, needed after the theme changes
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    fn extents(&self) -> Option<(f32, f32)> {
        let min = self.points.iter().copied().reduce(f32::min)?;
        let max = self.points.iter().copied().reduce(f32::max)?;
        Some((min, max))
    }
}

impl<Message> canvas::Program<Message> for Sparkline {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let Some((min, max)) = self.extents() else {
                return;
            };
            let palette = theme.extended_palette();

            let (grid, _) = ticks(min, max, GRID_TARGET_LINES);
            let (lo, hi) = match (grid.first(), grid.last()) {
                (Some(lo), Some(hi)) if hi > lo => (*lo, *hi),
                _ => (min, max),
            };

            let grid_color = palette.background.strong.color.scale_alpha(0.35);
            for value in &grid {
                let y = to_y(*value, lo, hi, frame.height());
                frame.fill_rectangle(
                    Point::new(0.0, y),
                    Size::new(frame.width(), 1.0),
                    grid_color,
                );
            }

            draw_line(frame, &self.points, lo, hi, palette.primary.base.color);
        });

        vec![geometry]
    }
}

fn draw_line(frame: &mut Frame, points: &[f32], lo: f32, hi: f32, color: iced::Color) {
    let projected = project(points, lo, hi, frame.size());
    let Some((first, rest)) = projected.split_first() else {
        return;
    };

    let line = Path::new(|builder| {
        builder.move_to(*first);
        for point in rest {
            builder.line_to(*point);
        }
    });

    frame.stroke(&line, Stroke::default().with_color(color).with_width(2.0));
}

fn to_y(value: f32, lo: f32, hi: f32, height: f32) -> f32 {
    let usable = (height - VERTICAL_PADDING * 2.0).max(1.0);
    let span = (hi - lo).max(f32::EPSILON);
    VERTICAL_PADDING + usable * (1.0 - (value - lo) / span)
}

/// Spreads points evenly across the width, higher values nearer the top.
fn project(points: &[f32], lo: f32, hi: f32, size: Size) -> Vec<Point> {
    let step = if points.len() > 1 {
        size.width / (points.len() - 1) as f32
    } else {
        0.0
    };

    points
        .iter()
        .enumerate()
        .map(|(i, value)| Point::new(i as f32 * step, to_y(*value, lo, hi, size.height)))
        .collect()
}

/// Compute a "nice" step close to range/target using 1/2/5*10^k
fn nice_step(range: f32, target: usize) -> f32 {
    let target = target.max(2) as f32;
    let raw = (range / target).max(f32::EPSILON);
    let power = raw.log10().floor();
    let base = 10f32.powf(power);
    let n = raw / base;
    let nice = if n <= 1.0 {
        1.0
    } else if n <= 2.0 {
        2.0
    } else if n <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

fn ticks(min: f32, max: f32, target: usize) -> (Vec<f32>, f32) {
    let span = (max - min).abs().max(1e-6);
    let step = nice_step(span, target);
    let start = (min / step).floor() * step;
    let end = (max / step).ceil() * step;

    let mut v = Vec::new();
    let mut t = start;
    for _ in 0..100 {
        if t > end + step * 0.5 {
            break;
        }
        v.push(t);
        t += step;
    }
    (v, step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(10.0, 5), 2.0);
        assert_eq!(nice_step(100.0, 4), 50.0);
    }

    #[test]
    fn ticks_cover_range() {
        let (v, step) = ticks(12.0, 58.0, 4);
        assert_eq!(step, 20.0);
        assert_eq!(v, vec![0.0, 20.0, 40.0, 60.0]);
    }

    #[test]
    fn projection_puts_max_on_top() {
        let points = project(&[0.0, 10.0], 0.0, 10.0, Size::new(100.0, 116.0));

        assert_eq!(points[0], Point::new(0.0, 108.0));
        assert_eq!(points[1], Point::new(100.0, VERTICAL_PADDING));
    }

    #[test]
    fn empty_series_has_no_extents() {
        assert!(Sparkline::new(Vec::new()).extents().is_none());
        assert_eq!(Sparkline::new(vec![3.0, 1.0, 2.0]).extents(), Some((1.0, 3.0)));
    }
}
