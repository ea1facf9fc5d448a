//! Fallback colors and the hue/saturation envelopes of moods and industries.

use chroma_model::Mood;

pub(super) const EMOTION_COLORS: &[(&str, u16, u8, u8)] = &[
    ("joy", 50, 95, 60),
    ("calm", 200, 40, 70),
    ("energy", 15, 95, 55),
    ("love", 345, 75, 55),
    ("sadness", 220, 35, 45),
    ("mystery", 270, 55, 25),
    ("elegance", 280, 30, 30),
    ("confidence", 0, 75, 45),
    ("nostalgia", 30, 40, 60),
    ("playfulness", 320, 80, 65),
    ("trust", 215, 60, 45),
    ("freshness", 160, 60, 60),
];

pub(super) const INDUSTRY_COLORS: &[(&str, u16, u8, u8)] = &[
    ("technology", 210, 80, 50),
    ("finance", 215, 65, 35),
    ("healthcare", 190, 55, 50),
    ("education", 35, 80, 55),
    ("food", 15, 80, 55),
    ("fashion", 330, 40, 40),
    ("beauty", 340, 55, 75),
    ("travel", 195, 75, 55),
    ("real-estate", 30, 30, 45),
    ("entertainment", 280, 75, 50),
    ("music", 270, 70, 45),
    ("art", 20, 70, 55),
    ("sports", 5, 85, 50),
    ("environment", 130, 50, 40),
    ("legal", 220, 40, 30),
    ("luxury", 45, 60, 40),
];

pub(super) const MOOD_DEFAULTS: &[(Mood, u16, u8, u8)] = &[
    (Mood::Energetic, 15, 90, 55),
    (Mood::Calm, 200, 40, 70),
    (Mood::Bold, 0, 80, 45),
    (Mood::Elegant, 270, 30, 35),
    (Mood::Playful, 320, 80, 65),
    (Mood::Natural, 120, 40, 40),
    (Mood::Mysterious, 265, 50, 25),
    (Mood::Romantic, 345, 65, 60),
    (Mood::Professional, 215, 55, 40),
    (Mood::Warm, 25, 80, 55),
    (Mood::Cool, 200, 60, 55),
    (Mood::Balanced, 210, 50, 50),
];

/// `(mood, hue spans, saturation span)`; balanced has no envelope.
pub(super) const MOOD_RANGES: &[(Mood, &[(u16, u16)], (u8, u8))] = &[
    (Mood::Energetic, &[], (60, 100)),
    (Mood::Calm, &[(150, 290)], (0, 65)),
    (Mood::Bold, &[], (55, 100)),
    (Mood::Elegant, &[(240, 330), (30, 50)], (0, 70)),
    (Mood::Playful, &[], (45, 100)),
    (Mood::Natural, &[(20, 170)], (15, 75)),
    (Mood::Mysterious, &[(220, 320)], (0, 80)),
    (Mood::Romantic, &[(290, 360), (0, 30)], (25, 85)),
    (Mood::Professional, &[(190, 250)], (10, 70)),
    (Mood::Warm, &[(330, 360), (0, 70)], (30, 100)),
    (Mood::Cool, &[(150, 260)], (15, 90)),
];

pub(super) const INDUSTRY_RANGES: &[(&str, &[(u16, u16)], (u8, u8))] = &[
    ("technology", &[(180, 260)], (40, 100)),
    ("finance", &[(190, 240)], (20, 80)),
    ("healthcare", &[(160, 220)], (20, 70)),
    ("education", &[(20, 60), (180, 230)], (40, 90)),
    ("food", &[(0, 50)], (50, 100)),
    ("fashion", &[], (0, 70)),
    ("beauty", &[(300, 360), (0, 30)], (20, 70)),
    ("travel", &[(170, 220)], (40, 100)),
    ("real-estate", &[(20, 60), (190, 230)], (10, 50)),
    ("entertainment", &[(260, 330)], (50, 100)),
    ("music", &[(240, 320)], (40, 100)),
    ("art", &[], (40, 100)),
    ("sports", &[(0, 30), (200, 240)], (60, 100)),
    ("environment", &[(80, 160)], (25, 80)),
    ("legal", &[(200, 240)], (10, 50)),
    ("luxury", &[(30, 55), (260, 300)], (20, 70)),
];
