//! X-axis tick selection for weekly charts.
//!
//! Pure presentation helper; it has no knowledge of box-office data beyond
//! the number of points being plotted.

/// Minimum widths, in CSS pixels, of the tablet and desktop layouts.
const TABLET_MIN_WIDTH: u32 = 640;
const DESKTOP_MIN_WIDTH: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    #[must_use]
    pub fn from_width(width: u32) -> Self {
        if width < TABLET_MIN_WIDTH {
            ViewportClass::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }

    fn tick_limit(self) -> usize {
        match self {
            ViewportClass::Mobile => 3,
            ViewportClass::Tablet => 5,
            ViewportClass::Desktop => 9,
        }
    }
}

/// Upper bound on the number of ticks, first and last included.
#[must_use]
pub fn max_ticks(data_length: usize, viewport: ViewportClass) -> usize {
    viewport.tick_limit().min(data_length)
}

/// Indices to label: always the first and last point, with the rest spread
/// evenly between them. Sorted and free of duplicates.
#[must_use]
pub fn explicit_ticks(data_length: usize, viewport: ViewportClass) -> Vec<usize> {
    if data_length <= 1 {
        return vec![0];
    }
    let count = max_ticks(data_length, viewport);
    if count >= data_length {
        return (0..data_length).collect();
    }

    let last = data_length - 1;
    let mut ticks = vec![0];
    if count > 2 {
        let step = usize_to_f64(last) / usize_to_f64(count - 1);
        for i in 1..=count - 2 {
            ticks.push(round_index(step * usize_to_f64(i)));
        }
    }
    ticks.push(last);

    ticks.sort_unstable();
    ticks.dedup();
    ticks
}

#[must_use]
pub fn tick_count(data_length: usize, viewport: ViewportClass) -> usize {
    explicit_ticks(data_length, viewport).len()
}

#[allow(clippy::cast_precision_loss)]
fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_index(value: f64) -> usize {
    value.round() as usize
}
