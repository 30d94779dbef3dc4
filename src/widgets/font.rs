//! Font descriptors for text-bearing widgets.
//!
//! Fonts are referenced by logical family name; resolving a name to a face
//! is the rendering backend's job.

/// Font family specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// The platform's default UI font
    #[default]
    System,
    /// Custom font by name, e.g. "HelveticaNeue-Bold"
    Name(String),
}

/// Font weight on a 100-900 scale, matching CSS font-weight values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const LIGHT: Self = Self(300);
    /// Normal/regular weight (400) - default
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A complete font descriptor: family, size and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    /// Size in logical pixels
    pub size: f32,
    pub weight: FontWeight,
}

impl Font {
    /// The system font at the given size.
    pub fn system(size: f32) -> Self {
        Self {
            family: FontFamily::System,
            size,
            weight: FontWeight::NORMAL,
        }
    }

    /// A named font at the given size. Weight is implied by the face name.
    pub fn named(name: impl Into<String>, size: f32) -> Self {
        Self {
            family: FontFamily::Name(name.into()),
            size,
            weight: FontWeight::NORMAL,
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_family_default() {
        assert_eq!(FontFamily::default(), FontFamily::System);
    }

    #[test]
    fn system_font() {
        let font = Font::system(13.0);
        assert_eq!(font.family, FontFamily::System);
        assert_eq!(font.size, 13.0);
        assert_eq!(font.weight, FontWeight::NORMAL);
    }

    #[test]
    fn named_font_builder() {
        let font = Font::named("HelveticaNeue-Bold", 13.0).weight(FontWeight::BOLD);
        assert_eq!(font.family, FontFamily::Name("HelveticaNeue-Bold".into()));
        assert_eq!(font.weight.0, 700);
        assert_eq!(font.size(15.0).size, 15.0);
    }
}
