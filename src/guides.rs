//! Handwriting guide lines drawn under every line of text

use crate::constants::*;
use crate::style::{GuideLineStyles, LineStyle};

/// Which of the four guide lines a [`GuideLine`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideKind {
    /// Approximate cap height
    Top,
    /// Dashed x-height guide
    Mid,
    Baseline,
    /// Dashed guide for descending strokes
    Descender,
}

impl GuideKind {
    /// Drawing order of the guide lines
    pub const ALL: [GuideKind; 4] = [Self::Top, Self::Mid, Self::Baseline, Self::Descender];

    /// Vertical offset from the baseline, as a multiple of the font size (down is positive)
    pub fn offset_ratio(self) -> f32 {
        match self {
            Self::Top => -TOP_LINE_RATIO,
            Self::Mid => -MID_LINE_RATIO,
            Self::Baseline => 0.0,
            Self::Descender => DESCENDER_LINE_RATIO,
        }
    }
}

/// A single horizontal guide line
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLine {
    pub kind: GuideKind,
    pub y: f32,
    pub x_start: f32,
    pub x_end: f32,
    pub style: LineStyle,
}

/// The four guide lines belonging to one baseline
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLineSet {
    pub lines: [GuideLine; 4],
}

impl GuideLineSet {
    /// Compute the guide lines for a text line whose baseline is at `baseline`,
    /// spanning horizontally from `x_start` to `x_end`.
    pub fn at_baseline(
        baseline: f32,
        font_size: f32,
        x_start: f32,
        x_end: f32,
        styles: &GuideLineStyles,
    ) -> Self {
        let line = |kind: GuideKind| {
            let style = match kind {
                GuideKind::Top => &styles.top,
                GuideKind::Mid => &styles.mid,
                GuideKind::Baseline => &styles.baseline,
                GuideKind::Descender => &styles.descender,
            };
            GuideLine {
                kind,
                y: baseline + font_size * kind.offset_ratio(),
                x_start,
                x_end,
                style: style.clone(),
            }
        };

        Self {
            lines: GuideKind::ALL.map(line),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &GuideLine> {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_relative_to_baseline() {
        let set = GuideLineSet::at_baseline(100.0, 20.0, 50.0, 562.0, &GuideLineStyles::default());
        let ys: Vec<f32> = set.iter().map(|l| l.y).collect();
        let expected = [100.0 - 12.2, 100.0 - 7.1, 100.0, 100.0 + 3.6];
        for (y, e) in ys.iter().zip(expected) {
            assert!((y - e).abs() < 1e-4, "{y} != {e}");
        }
    }

    #[test]
    fn test_order_and_styles() {
        let styles = GuideLineStyles::default();
        let set = GuideLineSet::at_baseline(80.0, 10.0, 50.0, 562.0, &styles);
        let kinds: Vec<GuideKind> = set.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, GuideKind::ALL.to_vec());
        assert_eq!(set.lines[0].style, styles.top);
        assert_eq!(set.lines[1].style, styles.mid);
        assert_eq!(set.lines[2].style, styles.baseline);
        assert_eq!(set.lines[3].style, styles.descender);
        assert!(set.iter().all(|l| l.x_start == 50.0 && l.x_end == 562.0));
    }
}
