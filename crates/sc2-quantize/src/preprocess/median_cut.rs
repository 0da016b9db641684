//! Median-cut color reduction used by the posterize stage.
//!
//! The color histogram is recursively split into boxes: the box with the
//! largest `population x channel range` is cut on its widest channel at the
//! pixel-weighted median. Each box is represented by the weighted mean of its
//! colors and every pixel takes the color of the box it landed in.

use std::collections::HashMap;

use crate::color::Rgb;

/// One histogram entry: a distinct color and its pixel count.
type Entry = (Rgb, u32);

struct ColorBox {
    entries: Vec<Entry>,
    population: u64,
}

impl ColorBox {
    fn new(entries: Vec<Entry>) -> Self {
        let population = entries.iter().map(|&(_, n)| n as u64).sum();
        Self {
            entries,
            population,
        }
    }

    /// Widest channel (0 = r, 1 = g, 2 = b) and its range.
    ///
    /// Ties pick the earlier channel.
    fn widest_channel(&self) -> (usize, u8) {
        let mut best = (0, 0);
        for channel in 0..3 {
            let (lo, hi) = self
                .entries
                .iter()
                .map(|(c, _)| c.to_bytes()[channel])
                .fold((u8::MAX, u8::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
            let range = hi.saturating_sub(lo);
            if range > best.1 {
                best = (channel, range);
            }
        }
        best
    }

    fn priority(&self) -> u64 {
        if self.entries.len() < 2 {
            return 0;
        }
        self.population * self.widest_channel().1 as u64
    }

    /// Split at the weighted median of the widest channel.
    fn split(mut self) -> (ColorBox, ColorBox) {
        let (channel, _) = self.widest_channel();
        self.entries
            .sort_by_key(|(c, _)| (c.to_bytes()[channel], c.to_bytes()));

        let half = self.population.div_ceil(2);
        let mut running = 0u64;
        let mut cut = self.entries.len() - 1;
        for (i, &(_, n)) in self.entries.iter().enumerate() {
            running += n as u64;
            if running >= half {
                cut = i + 1;
                break;
            }
        }
        // Both halves must keep at least one color.
        let cut = cut.clamp(1, self.entries.len() - 1);

        let upper = self.entries.split_off(cut);
        (ColorBox::new(self.entries), ColorBox::new(upper))
    }

    fn mean(&self) -> Rgb {
        let mut sums = [0u64; 3];
        for &(color, n) in &self.entries {
            for (sum, v) in sums.iter_mut().zip(color.to_bytes()) {
                *sum += v as u64 * n as u64;
            }
        }
        let pop = self.population.max(1);
        let avg = |sum: u64| ((sum + pop / 2) / pop).min(255) as u8;
        Rgb::new(avg(sums[0]), avg(sums[1]), avg(sums[2]))
    }
}

/// Reduce `pixels` to at most `colors` distinct colors in place.
///
/// Images that already have `colors` or fewer distinct colors are left
/// untouched.
pub(crate) fn posterize(pixels: &mut [Rgb], colors: u32) {
    let mut histogram: HashMap<Rgb, u32> = HashMap::new();
    for &p in pixels.iter() {
        *histogram.entry(p).or_default() += 1;
    }
    if histogram.len() <= colors as usize {
        return;
    }

    let mut entries: Vec<Entry> = histogram.into_iter().collect();
    entries.sort_by_key(|(c, _)| c.to_bytes());

    let mut boxes = vec![ColorBox::new(entries)];
    while boxes.len() < colors as usize {
        let Some((pos, priority)) = boxes
            .iter()
            .enumerate()
            .map(|(i, b)| (i, b.priority()))
            .fold(None, |best: Option<(usize, u64)>, (i, p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((i, p)),
            })
        else {
            break;
        };
        if priority == 0 {
            break;
        }
        let (lower, upper) = boxes.swap_remove(pos).split();
        boxes.push(lower);
        boxes.push(upper);
    }

    let mut mapping: HashMap<Rgb, Rgb> = HashMap::new();
    for b in &boxes {
        let mean = b.mean();
        for &(color, _) in &b.entries {
            mapping.insert(color, mean);
        }
    }
    for p in pixels.iter_mut() {
        if let Some(&mapped) = mapping.get(p) {
            *p = mapped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn distinct(pixels: &[Rgb]) -> usize {
        pixels.iter().collect::<HashSet<_>>().len()
    }

    #[test]
    fn test_reduces_to_requested_count() {
        let mut pixels: Vec<Rgb> = (0..=255u8).map(|v| Rgb::new(v, v / 2, 255 - v)).collect();
        posterize(&mut pixels, 4);
        assert!(distinct(&pixels) <= 4);
        assert!(distinct(&pixels) >= 2);
    }

    #[test]
    fn test_few_colors_untouched() {
        let original = vec![
            Rgb::new(10, 20, 30),
            Rgb::new(200, 100, 0),
            Rgb::new(10, 20, 30),
        ];
        let mut pixels = original.clone();
        posterize(&mut pixels, 2);
        assert_eq!(pixels, original);
    }

    #[test]
    fn test_two_clusters_split_cleanly() {
        let mut pixels = Vec::new();
        for i in 0..8u8 {
            pixels.push(Rgb::new(i, i, i));
            pixels.push(Rgb::new(240 + i, 240 + i, 240 + i));
        }
        posterize(&mut pixels, 2);

        let dark: HashSet<_> = pixels.iter().filter(|c| c.r < 128).collect();
        let light: HashSet<_> = pixels.iter().filter(|c| c.r >= 128).collect();
        assert_eq!(dark.len(), 1);
        assert_eq!(light.len(), 1);
        // 0..=7 averages to 3.5, rounded up.
        assert!(dark.contains(&Rgb::new(4, 4, 4)));
    }

    #[test]
    fn test_single_color_image() {
        let mut pixels = vec![Rgb::new(7, 7, 7); 10];
        posterize(&mut pixels, 3);
        assert!(pixels.iter().all(|&p| p == Rgb::new(7, 7, 7)));
    }
}
