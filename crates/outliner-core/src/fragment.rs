//! Positioned text fragments and page content as supplied by the
//! text-layout collaborator.

use std::collections::HashMap;

/// Round a coordinate or height to the nearest 0.5 unit.
///
/// Half-unit rounding is used for both line baselines and font heights so
/// that equality checks downstream (merging, level ranking) compare exact
/// values instead of raw float metrics.
pub fn round_half(v: f64) -> f64 {
    (v * 2.0).round() / 2.0
}

/// A single run of glyphs with a position and style.
///
/// Fragments are immutable and owned by the page they came from. The font
/// height is derived from the vertical glyph-space scale factor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextFragment {
    /// The glyph string for this run.
    pub text: String,
    /// Baseline x position.
    pub x: f64,
    /// Baseline y position (origin at the page bottom, increasing upward).
    pub y: f64,
    /// Horizontal glyph-space scale factor.
    pub scale_x: f64,
    /// Vertical glyph-space scale factor. Its absolute value approximates
    /// the font size.
    pub scale_y: f64,
    /// Advance width of the run.
    pub width: f64,
    /// Resource name of the font used by this run (key into the page's
    /// font map).
    pub font: String,
}

impl TextFragment {
    /// Approximate font height: the absolute value of the vertical scale
    /// component.
    pub fn height(&self) -> f64 {
        self.scale_y.abs()
    }

    /// Font height rounded to the nearest 0.5 unit.
    pub fn rounded_height(&self) -> f64 {
        round_half(self.height())
    }

    /// Horizontal position where the run ends.
    pub fn end_x(&self) -> f64 {
        self.x + self.width
    }
}

/// Font information shared by all fragments using the font on a page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontDescriptor {
    /// Font family name as reported by the layout facility.
    pub name: String,
    /// Explicit numeric weight, when the font carries one.
    pub weight: Option<u32>,
}

impl FontDescriptor {
    /// Whether this font reads as bold: the family name contains "bold"
    /// or the explicit weight is 700 or more.
    pub fn is_bold(&self) -> bool {
        self.name.to_lowercase().contains("bold") || self.weight.is_some_and(|w| w >= 700)
    }
}

/// One page of positioned text.
///
/// Produced externally per page and owned transiently by the extraction
/// pass that consumes it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageContent {
    /// 1-based page number.
    pub number: usize,
    /// Ordered text fragments as reported by the layout facility.
    pub fragments: Vec<TextFragment>,
    /// Font descriptors for this page, keyed by resource name.
    pub fonts: HashMap<String, FontDescriptor>,
}

impl PageContent {
    /// Create a page with no fragments or fonts.
    pub fn empty(number: usize) -> Self {
        Self {
            number,
            fragments: Vec::new(),
            fonts: HashMap::new(),
        }
    }

    /// Look up the font descriptor for a fragment, if the page knows it.
    pub fn font(&self, fragment: &TextFragment) -> Option<&FontDescriptor> {
        self.fonts.get(&fragment.font)
    }

    /// Whether a fragment is set in a bold face. Unknown fonts read as
    /// not bold.
    pub fn is_bold(&self, fragment: &TextFragment) -> bool {
        self.font(fragment).is_some_and(FontDescriptor::is_bold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_fragment(text: &str, size: f64) -> TextFragment {
        TextFragment {
            text: text.to_string(),
            x: 72.0,
            y: 700.0,
            scale_x: size,
            scale_y: size,
            width: 50.0,
            font: "F1".to_string(),
        }
    }

    #[test]
    fn round_half_rounds_to_nearest_half_unit() {
        assert_eq!(round_half(11.74), 11.5);
        assert_eq!(round_half(11.76), 12.0);
        assert_eq!(round_half(12.0), 12.0);
        assert_eq!(round_half(0.24), 0.0);
        assert_eq!(round_half(0.26), 0.5);
    }

    #[test]
    fn fragment_height_is_absolute_vertical_scale() {
        let mut frag = make_fragment("Hello", 12.0);
        assert_eq!(frag.height(), 12.0);

        // Negative vertical scale (flipped coordinate space) still yields
        // a positive height.
        frag.scale_y = -12.0;
        assert_eq!(frag.height(), 12.0);
    }

    #[test]
    fn fragment_rounded_height() {
        let frag = make_fragment("Hello", 11.76);
        assert_eq!(frag.rounded_height(), 12.0);
    }

    #[test]
    fn fragment_end_x() {
        let frag = make_fragment("Hello", 12.0);
        assert_eq!(frag.end_x(), 122.0);
    }

    #[test]
    fn font_bold_by_name() {
        let font = FontDescriptor {
            name: "Times-BoldItalic".to_string(),
            weight: None,
        };
        assert!(font.is_bold());

        let font = FontDescriptor {
            name: "times-bold".to_string(),
            weight: None,
        };
        assert!(font.is_bold());
    }

    #[test]
    fn font_bold_by_weight() {
        let font = FontDescriptor {
            name: "Roboto".to_string(),
            weight: Some(700),
        };
        assert!(font.is_bold());

        let font = FontDescriptor {
            name: "Roboto".to_string(),
            weight: Some(400),
        };
        assert!(!font.is_bold());
    }

    #[test]
    fn font_regular_is_not_bold() {
        let font = FontDescriptor {
            name: "Helvetica".to_string(),
            weight: None,
        };
        assert!(!font.is_bold());
    }

    #[test]
    fn page_font_lookup() {
        let mut page = PageContent::empty(1);
        page.fonts.insert(
            "F1".to_string(),
            FontDescriptor {
                name: "Helvetica-Bold".to_string(),
                weight: None,
            },
        );
        let frag = make_fragment("Title", 14.0);
        assert!(page.is_bold(&frag));

        let unknown = TextFragment {
            font: "F9".to_string(),
            ..frag
        };
        assert!(page.font(&unknown).is_none());
        assert!(!page.is_bold(&unknown));
    }
}
