//! Squarified treemap layout.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Shrink by `gap` on every side, never below zero size.
    pub fn inset(&self, gap: f64) -> Rect {
        let dx = gap.min(self.w / 2.0);
        let dy = gap.min(self.h / 2.0);
        Rect::new(self.x + dx, self.y + dy, self.w - 2.0 * dx, self.h - 2.0 * dy)
    }
}

/// Worst aspect ratio of a row of `areas` laid along a side of length `side`.
fn worst(areas: &[f64], side: f64) -> f64 {
    let sum: f64 = areas.iter().sum();
    if sum <= 0.0 || side <= 0.0 {
        return f64::INFINITY;
    }
    let max = areas.iter().copied().fold(f64::MIN, f64::max);
    let min = areas.iter().copied().fold(f64::MAX, f64::min);
    let side2 = side * side;
    let sum2 = sum * sum;
    (side2 * max / sum2).max(sum2 / (side2 * min))
}

/// Lay `values` (sorted descending for best results) into `bounds`, one
/// rectangle per value with area proportional to it.
pub fn squarify(values: &[f64], bounds: Rect) -> Vec<Rect> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return vec![Rect::new(bounds.x, bounds.y, 0.0, 0.0); values.len()];
    }
    let scale = bounds.area() / total;
    let areas: Vec<f64> = values.iter().map(|v| v.max(0.0) * scale).collect();

    let mut rects = vec![Rect::default(); areas.len()];
    let mut free = bounds;
    let mut start = 0;
    while start < areas.len() {
        let side = free.w.min(free.h);
        let mut end = start + 1;
        let mut best = worst(&areas[start..end], side);
        while end < areas.len() {
            let next = worst(&areas[start..=end], side);
            if next > best {
                break;
            }
            best = next;
            end += 1;
        }

        let row_area: f64 = areas[start..end].iter().sum();
        if free.w >= free.h {
            // Column along the left edge.
            let col_w = if free.h > 0.0 { row_area / free.h } else { 0.0 };
            let mut y = free.y;
            for (rect, area) in rects[start..end].iter_mut().zip(&areas[start..end]) {
                let h = if col_w > 0.0 { area / col_w } else { 0.0 };
                *rect = Rect::new(free.x, y, col_w, h);
                y += h;
            }
            free.x += col_w;
            free.w = (free.w - col_w).max(0.0);
        } else {
            // Row along the top edge.
            let row_h = if free.w > 0.0 { row_area / free.w } else { 0.0 };
            let mut x = free.x;
            for (rect, area) in rects[start..end].iter_mut().zip(&areas[start..end]) {
                let w = if row_h > 0.0 { area / row_h } else { 0.0 };
                *rect = Rect::new(x, free.y, w, row_h);
                x += w;
            }
            free.y += row_h;
            free.h = (free.h - row_h).max(0.0);
        }
        start = end;
    }
    rects
}
