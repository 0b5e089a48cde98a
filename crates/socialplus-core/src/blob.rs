//! Blob handles and image resize tiers.
//!
//! Uploaded images are resized server-side. A resized variant is addressed by
//! appending a one-character tier suffix to the handle returned by the upload.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ImageType;

/// Opaque identifier of an uploaded blob or image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobHandle(String);

impl BlobHandle {
    /// Wrap a handle returned by the service.
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// The raw handle.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Handle addressing the given resize tier of this image.
    #[must_use]
    pub fn resized(&self, size: ImageSize) -> Self {
        Self(format!("{}{}", self.0, size.suffix()))
    }
}

impl fmt::Display for BlobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BlobHandle {
    fn from(handle: String) -> Self {
        Self(handle)
    }
}

impl From<&str> for BlobHandle {
    fn from(handle: &str) -> Self {
        Self(handle.to_string())
    }
}

impl AsRef<str> for BlobHandle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Fixed-width resize tier. Aspect ratio is preserved and EXIF orientation
/// is honored by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageSize {
    /// 25 pixels wide (`d`)
    Px25,
    /// 50 pixels wide (`h`)
    Px50,
    /// 100 pixels wide (`l`)
    Px100,
    /// 250 pixels wide (`p`)
    Px250,
    /// 500 pixels wide (`t`)
    Px500,
    /// 1000 pixels wide (`x`)
    Px1000,
}

impl ImageSize {
    /// Every tier, narrowest first.
    pub const ALL: [Self; 6] = [
        Self::Px25,
        Self::Px50,
        Self::Px100,
        Self::Px250,
        Self::Px500,
        Self::Px1000,
    ];

    /// Character appended to a blob handle to select this tier.
    #[must_use]
    pub const fn suffix(self) -> char {
        match self {
            Self::Px25 => 'd',
            Self::Px50 => 'h',
            Self::Px100 => 'l',
            Self::Px250 => 'p',
            Self::Px500 => 't',
            Self::Px1000 => 'x',
        }
    }

    /// Width of this tier in pixels.
    #[must_use]
    pub const fn width_px(self) -> u32 {
        match self {
            Self::Px25 => 25,
            Self::Px50 => 50,
            Self::Px100 => 100,
            Self::Px250 => 250,
            Self::Px500 => 500,
            Self::Px1000 => 1000,
        }
    }

    /// Tier selected by a suffix character.
    #[must_use]
    pub const fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            'd' => Some(Self::Px25),
            'h' => Some(Self::Px50),
            'l' => Some(Self::Px100),
            'p' => Some(Self::Px250),
            't' => Some(Self::Px500),
            'x' => Some(Self::Px1000),
            _ => None,
        }
    }

    /// Narrowest tier at least `width` pixels wide, or the widest tier.
    #[must_use]
    pub fn at_least(width: u32) -> Self {
        Self::ALL
            .into_iter()
            .find(|size| size.width_px() >= width)
            .unwrap_or(Self::Px1000)
    }
}

impl ImageType {
    /// Resize tiers generated for images of this type.
    #[must_use]
    pub const fn supported_sizes(self) -> &'static [ImageSize] {
        match self {
            Self::UserPhoto | Self::ContentBlob => &ImageSize::ALL,
            Self::AppIcon => &[ImageSize::Px100],
        }
    }

    /// Whether images of this type are available in `size`.
    #[must_use]
    pub fn supports(self, size: ImageSize) -> bool {
        self.supported_sizes().contains(&size)
    }
}
