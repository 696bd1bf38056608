//! Enum and flags value tables shared across operation families.

use crate::builder::value_table;
use crate::model::EnumValue;

/// How to extend an image past its edges.
pub fn extend() -> Vec<EnumValue> {
    value_table(
        "VIPS_EXTEND",
        &[
            (0, "black"),
            (1, "copy"),
            (2, "repeat"),
            (3, "mirror"),
            (4, "white"),
            (5, "background"),
        ],
    )
}

/// Pixel access pattern.
pub fn access() -> Vec<EnumValue> {
    value_table(
        "VIPS_ACCESS",
        &[(0, "random"), (1, "sequential"), (2, "sequential-unbuffered")],
    )
}

/// Error level to fail on.
pub fn fail_on() -> Vec<EnumValue> {
    value_table(
        "VIPS_FAIL_ON",
        &[(0, "none"), (1, "truncated"), (2, "error"), (3, "warning")],
    )
}

/// Band format of pixels.
pub fn band_format() -> Vec<EnumValue> {
    value_table(
        "VIPS_FORMAT",
        &[
            (-1, "notset"),
            (0, "uchar"),
            (1, "char"),
            (2, "ushort"),
            (3, "short"),
            (4, "uint"),
            (5, "int"),
            (6, "float"),
            (7, "complex"),
            (8, "double"),
            (9, "dpcomplex"),
        ],
    )
}

/// Interpretation of pixel values.
pub fn interpretation() -> Vec<EnumValue> {
    value_table(
        "VIPS_INTERPRETATION",
        &[
            (-1, "error"),
            (0, "multiband"),
            (1, "b-w"),
            (10, "histogram"),
            (12, "xyz"),
            (13, "lab"),
            (15, "cmyk"),
            (16, "labq"),
            (17, "rgb"),
            (18, "cmc"),
            (19, "lch"),
            (21, "labs"),
            (22, "srgb"),
            (23, "yxy"),
            (24, "fourier"),
            (25, "rgb16"),
            (26, "grey16"),
            (27, "matrix"),
            (28, "scrgb"),
            (29, "hsv"),
        ],
    )
}

/// Flip direction.
pub fn direction() -> Vec<EnumValue> {
    value_table("VIPS_DIRECTION", &[(0, "horizontal"), (1, "vertical")])
}

/// Alignment along an axis.
pub fn align() -> Vec<EnumValue> {
    value_table("VIPS_ALIGN", &[(0, "low"), (1, "centre"), (2, "high")])
}

/// Resampling kernel.
pub fn kernel() -> Vec<EnumValue> {
    value_table(
        "VIPS_KERNEL",
        &[
            (0, "nearest"),
            (1, "linear"),
            (2, "cubic"),
            (3, "mitchell"),
            (4, "lanczos2"),
            (5, "lanczos3"),
        ],
    )
}

/// Thumbnail size constraint.
pub fn size() -> Vec<EnumValue> {
    value_table(
        "VIPS_SIZE",
        &[(0, "both"), (1, "up"), (2, "down"), (3, "force")],
    )
}

/// Strategy for finding the interesting region of an image.
pub fn interesting() -> Vec<EnumValue> {
    value_table(
        "VIPS_INTERESTING",
        &[
            (0, "none"),
            (1, "centre"),
            (2, "entropy"),
            (3, "attention"),
            (4, "low"),
            (5, "high"),
            (6, "all"),
        ],
    )
}

/// Rendering intent.
pub fn intent() -> Vec<EnumValue> {
    value_table(
        "VIPS_INTENT",
        &[
            (0, "perceptual"),
            (1, "relative"),
            (2, "saturation"),
            (3, "absolute"),
        ],
    )
}

/// Profile connection space.
pub fn pcs() -> Vec<EnumValue> {
    value_table("VIPS_PCS", &[(0, "lab"), (1, "xyz")])
}

/// Chroma subsampling mode.
pub fn subsample() -> Vec<EnumValue> {
    value_table(
        "VIPS_FOREIGN_SUBSAMPLE",
        &[(0, "auto"), (1, "on"), (2, "off")],
    )
}

/// Text wrapping mode.
pub fn text_wrap() -> Vec<EnumValue> {
    value_table(
        "VIPS_TEXT_WRAP",
        &[(0, "word"), (1, "char"), (2, "word-char"), (3, "none")],
    )
}

/// Flags reported by a loader.
pub fn foreign_flags() -> Vec<EnumValue> {
    value_table(
        "VIPS_FOREIGN",
        &[
            (0, "none"),
            (1, "partial"),
            (2, "bigendian"),
            (4, "sequential"),
            (7, "all"),
        ],
    )
}

/// Metadata kept by a saver.
pub fn foreign_keep() -> Vec<EnumValue> {
    value_table(
        "VIPS_FOREIGN_KEEP",
        &[
            (0, "none"),
            (1, "exif"),
            (2, "xmp"),
            (4, "iptc"),
            (8, "icc"),
            (16, "other"),
            (31, "all"),
        ],
    )
}
