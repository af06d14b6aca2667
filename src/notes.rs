//! Sticky Note Colours
//!
//! Random pastel backgrounds and a text colour that stays readable on them.

use crate::clock::RandomSource;
use crate::models::PostItNote;

pub const DARK_TEXT: &str = "#000000";
pub const LIGHT_TEXT: &str = "#FFFFFF";

/// Backgrounds lighter than this get dark text
const LIGHTNESS_THRESHOLD: u8 = 60;

/// HSL colour with integer channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    /// Hue 0-359, saturation 70-99%, lightness 70-89%
    pub fn random(rng: &mut impl RandomSource) -> Self {
        Self {
            hue: rng.below(360) as u16,
            saturation: 70 + rng.below(30) as u8,
            lightness: 70 + rng.below(20) as u8,
        }
    }

    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }

    /// Parse `hsl(h, s%, l%)`; the first three integers are taken as the
    /// channels
    pub fn parse(css: &str) -> Option<Self> {
        let mut numbers = css
            .split(|c: char| !c.is_ascii_digit())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<u16>().ok());
        let hue = numbers.next()??;
        let saturation = u8::try_from(numbers.next()??).ok()?;
        let lightness = u8::try_from(numbers.next()??).ok()?;
        Some(Self { hue, saturation, lightness })
    }

    pub fn text_color(&self) -> &'static str {
        if self.lightness > LIGHTNESS_THRESHOLD {
            DARK_TEXT
        } else {
            LIGHT_TEXT
        }
    }
}

/// Readable text colour for a CSS `hsl(...)` background
pub fn contrast_color(background: &str) -> &'static str {
    Hsl::parse(background).map_or(DARK_TEXT, |hsl| hsl.text_color())
}

/// Empty note with a fresh random colour
pub fn new_note(id: i64, rng: &mut impl RandomSource) -> PostItNote {
    let color = Hsl::random(rng).to_css();
    PostItNote {
        id,
        content: String::new(),
        text_color: contrast_color(&color).to_string(),
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::testing::SequenceRandom;

    #[test]
    fn test_random_colour_ranges() {
        let mut low = SequenceRandom::new(vec![0.0]);
        assert_eq!(Hsl::random(&mut low), Hsl { hue: 0, saturation: 70, lightness: 70 });

        let mut high = SequenceRandom::new(vec![0.999_999]);
        assert_eq!(Hsl::random(&mut high), Hsl { hue: 359, saturation: 99, lightness: 89 });
    }

    #[test]
    fn test_css_round_trip_and_parse() {
        let hsl = Hsl { hue: 200, saturation: 85, lightness: 72 };
        assert_eq!(hsl.to_css(), "hsl(200, 85%, 72%)");
        assert_eq!(Hsl::parse(&hsl.to_css()), Some(hsl));
        assert_eq!(Hsl::parse("red"), None);
        assert_eq!(Hsl::parse("hsl(10, 500%, 20%)"), None);
    }

    #[test]
    fn test_contrast_reads_lightness() {
        // hue and saturation are high, lightness decides
        assert_eq!(contrast_color("hsl(300, 90%, 40%)"), LIGHT_TEXT);
        assert_eq!(contrast_color("hsl(10, 20%, 75%)"), DARK_TEXT);
        assert_eq!(contrast_color("hsl(10, 20%, 60%)"), LIGHT_TEXT);
        assert_eq!(contrast_color("not a colour"), DARK_TEXT);
    }

    #[test]
    fn test_new_note_is_empty_and_readable() {
        let mut rng = SequenceRandom::new(vec![0.5, 0.5, 0.5]);
        let note = new_note(42, &mut rng);
        assert_eq!(note.id, 42);
        assert!(note.content.is_empty());
        assert_eq!(note.color, "hsl(180, 85%, 80%)");
        assert_eq!(note.text_color, DARK_TEXT);
    }
}
