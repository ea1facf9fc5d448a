//! Base color selection.

use chroma_lexicon::KnowledgeBase;
use chroma_model::{
    BaseColorSource, ContextualWeights, HslColor, PromptAnalysis, WeightedColor, weighted_hue_mean,
};
use tracing::debug;

/// Intention score above which the contextual primary is used as-is.
const PRIMARY_INTENTION: f64 = 0.6;
const BLEND_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseSelection {
    pub color: HslColor,
    pub source: BaseColorSource,
}

/// Picks the unperturbed base color.
///
/// Priority: contextual primary (when intention is strong), a blend of the
/// top contextual colors, a blend of every extracted color, then the
/// industry, emotion and mood fallback tables.
pub fn select_base(
    kb: &KnowledgeBase,
    analysis: &PromptAnalysis,
    weights: &ContextualWeights,
) -> BaseSelection {
    let selection = choose(kb, analysis, weights);
    debug!(
        source = ?selection.source,
        base = %selection.color,
        "base color selected"
    );
    selection
}

fn choose(
    kb: &KnowledgeBase,
    analysis: &PromptAnalysis,
    weights: &ContextualWeights,
) -> BaseSelection {
    if weights.intention_score > PRIMARY_INTENTION
        && let Some(primary) = &weights.primary_color
    {
        return BaseSelection {
            color: primary.color.to_hsl(),
            source: BaseColorSource::ContextPrimary,
        };
    }
    let top: Vec<&WeightedColor> = weights.top_colors().take(BLEND_COUNT).collect();
    if let Some(color) = blend(&top) {
        return BaseSelection {
            color,
            source: BaseColorSource::ContextBlend,
        };
    }
    let all: Vec<&WeightedColor> = analysis.colors.iter().collect();
    if let Some(color) = blend(&all) {
        return BaseSelection {
            color,
            source: BaseColorSource::ExtractedBlend,
        };
    }
    if let Some(color) = analysis
        .industries
        .iter()
        .find_map(|industry| kb.industry_color(industry))
    {
        return BaseSelection {
            color: color.to_hsl(),
            source: BaseColorSource::Industry,
        };
    }
    if let Some(color) = analysis
        .emotions
        .iter()
        .find_map(|emotion| kb.emotion_color(emotion))
    {
        return BaseSelection {
            color: color.to_hsl(),
            source: BaseColorSource::Emotion,
        };
    }
    BaseSelection {
        color: kb.mood_default(analysis.mood).to_hsl(),
        source: BaseColorSource::MoodDefault,
    }
}

/// Weighted blend; hue is averaged on the circle.
///
/// When the hues cancel out (red and teal at equal weight) the hue of the
/// heaviest color is kept. `None` only when the total weight is zero.
pub fn blend(colors: &[&WeightedColor]) -> Option<HslColor> {
    let total: f64 = colors.iter().map(|c| c.weight).sum();
    if total <= 0.0 {
        return None;
    }
    let hue = weighted_hue_mean(colors.iter().map(|c| (f64::from(c.color.hue), c.weight)))
        .or_else(|| heaviest_hue(colors))?;
    let saturation = colors
        .iter()
        .map(|c| f64::from(c.color.saturation) * c.weight)
        .sum::<f64>()
        / total;
    let lightness = colors
        .iter()
        .map(|c| f64::from(c.color.lightness) * c.weight)
        .sum::<f64>()
        / total;
    Some(HslColor::new(hue, saturation, lightness))
}

/// Hue of the heaviest color; the first one wins ties.
fn heaviest_hue(colors: &[&WeightedColor]) -> Option<f64> {
    colors
        .iter()
        .copied()
        .reduce(|best, color| if color.weight > best.weight { color } else { best })
        .map(|color| f64::from(color.color.hue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_model::{ColorEntry, MatchType};

    fn weighted(hue: u16, saturation: u8, lightness: u8, weight: f64) -> WeightedColor {
        WeightedColor::new(
            ColorEntry::new(hue, saturation, lightness),
            weight,
            MatchType::Exact,
            "test",
        )
    }

    #[test]
    fn blend_wraps_hue_around_red() {
        let a = weighted(350, 80, 40, 1.0);
        let b = weighted(10, 60, 60, 1.0);
        let color = blend(&[&a, &b]).expect("non-empty blend");
        assert!(color.h < 0.5 || color.h > 359.5);
        assert!((color.s - 70.0).abs() < 1e-9);
        assert!((color.l - 50.0).abs() < 1e-9);
    }

    #[test]
    fn opposite_hues_keep_the_heaviest_hue() {
        let red = weighted(0, 85, 50, 1.0);
        let teal = weighted(180, 65, 35, 1.0);
        let color = blend(&[&red, &teal]).expect("weighted blend");
        assert!(color.h.abs() < 1e-9);
        assert!((color.s - 75.0).abs() < 1e-9);
        assert!((color.l - 42.5).abs() < 1e-9);

        let color = blend(&[&teal, &red]).expect("weighted blend");
        assert!((color.h - 180.0).abs() < 1e-9);
    }

    #[test]
    fn zero_weight_blend_is_none() {
        let a = weighted(120, 50, 50, 0.0);
        assert!(blend(&[&a]).is_none());
        assert!(blend(&[]).is_none());
    }
}
