//! Conversion family: geometry, format and band manipulation.

use crate::builder::arg;
use crate::catalog::args::{background, image_in, image_out};
use crate::catalog::enums;
use crate::model::{types, OperationClass, OperationFlags};

const OPERATION: &[&str] = &[types::VIPS_OPERATION, types::VIPS_OBJECT, types::G_OBJECT];
const CONVERSION: &[&str] = &[
    "VipsConversion",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];
const BANDARY: &[&str] = &[
    "VipsBandary",
    "VipsConversion",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];

/// Returns the conversion family in registration order.
pub fn classes() -> Vec<OperationClass> {
    vec![
        OperationClass::abstract_class("VipsConversion", OPERATION, "conversion", "conversion operations")
            .with_arguments(vec![image_out("VipsConversion", 1)]),
        embed(),
        OperationClass::new("VipsFlip", CONVERSION, "flip", "flip an image")
            .with_arguments(vec![
                image_in("VipsFlip", 0),
                arg("VipsFlip", "direction", "Direction", "Direction to flip image")
                    .enumeration("VipsDirection", enums::direction(), 0)
                    .required_input(2),
            ]),
        OperationClass::new("VipsCast", CONVERSION, "cast", "cast an image")
            .with_flags(OperationFlags::SEQUENTIAL)
            .with_arguments(vec![
                image_in("VipsCast", 0),
                arg("VipsCast", "format", "Format", "Format to cast to")
                    .enumeration("VipsBandFormat", enums::band_format(), 0)
                    .required_input(2),
                arg("VipsCast", "shift", "Shift", "Shift integer values up and down")
                    .boolean(false)
                    .optional_input(3),
            ]),
        copy(),
        OperationClass::abstract_class("VipsBandary", CONVERSION, "bandary", "operations on image bands"),
        OperationClass::new("VipsBandjoin", BANDARY, "bandjoin", "bandwise join a set of images")
            .with_flags(OperationFlags::SEQUENTIAL)
            .with_arguments(vec![arg("VipsBandjoin", "in", "Input", "Array of input images")
                .array_image()
                .required_input(0)]),
        arrayjoin(),
        OperationClass::new("VipsCache", CONVERSION, "cache", "cache an image")
            .with_flags(OperationFlags::DEPRECATED)
            .with_arguments(vec![
                image_in("VipsCache", 0),
                arg("VipsCache", "tile_width", "Tile width", "Tile width in pixels")
                    .int(1, 1_000_000, 128)
                    .optional_input(3),
            ]),
    ]
}

fn embed() -> OperationClass {
    let owner = "VipsEmbed";
    OperationClass::new(owner, CONVERSION, "embed", "embed an image in a larger image")
        .with_flags(OperationFlags::SEQUENTIAL)
        .with_arguments(vec![
            image_in(owner, 0),
            arg(owner, "x", "x", "Left edge of input in output")
                .int(-1_000_000_000, 1_000_000_000, 0)
                .required_input(3),
            arg(owner, "y", "y", "Top edge of input in output")
                .int(-1_000_000_000, 1_000_000_000, 0)
                .required_input(4),
            arg(owner, "width", "Width", "Image width in pixels")
                .int(1, 1_000_000_000, 1)
                .required_input(5),
            arg(owner, "height", "Height", "Image height in pixels")
                .int(1, 1_000_000_000, 1)
                .required_input(6),
            arg(owner, "extend", "Extend", "How to generate the extra pixels")
                .enumeration("VipsExtend", enums::extend(), 0)
                .optional_input(7),
            background(owner, 12),
        ])
}

fn copy() -> OperationClass {
    let owner = "VipsCopy";
    OperationClass::new(owner, CONVERSION, "copy", "copy an image")
        .with_flags(OperationFlags::SEQUENTIAL)
        .with_arguments(vec![
            image_in(owner, 0),
            arg(owner, "swap", "Swap", "Swap bytes in image between little and big-endian")
                .boolean(false)
                .optional_input(3)
                .deprecated(),
            arg(owner, "width", "Width", "Image width in pixels")
                .int(0, 1_000_000_000, 0)
                .optional_input(4),
            arg(owner, "height", "Height", "Image height in pixels")
                .int(0, 1_000_000_000, 0)
                .optional_input(5),
            arg(owner, "bands", "Bands", "Number of bands in image")
                .int(0, 1_000_000_000, 0)
                .optional_input(6),
            arg(owner, "format", "Format", "Pixel format in image")
                .enumeration("VipsBandFormat", enums::band_format(), 0)
                .optional_input(7),
            arg(owner, "interpretation", "Interpretation", "Pixel interpretation")
                .enumeration("VipsInterpretation", enums::interpretation(), 0)
                .optional_input(8),
            arg(owner, "xres", "Xres", "Horizontal resolution in pixels/mm")
                .double(0.0, 1_000_000.0, 0.0)
                .optional_input(9),
            arg(owner, "yres", "Yres", "Vertical resolution in pixels/mm")
                .double(0.0, 1_000_000.0, 0.0)
                .optional_input(10),
        ])
}

fn arrayjoin() -> OperationClass {
    let owner = "VipsArrayjoin";
    OperationClass::new(owner, CONVERSION, "arrayjoin", "join an array of images")
        .with_arguments(vec![
            arg(owner, "in", "Input", "Array of input images")
                .array_image()
                .required_input(-1),
            arg(owner, "across", "Across", "Number of images across grid")
                .int(1, 1_000_000, 1)
                .optional_input(4),
            arg(owner, "shim", "Shim", "Pixels between images")
                .int(0, 1_000_000, 0)
                .optional_input(5),
            background(owner, 6),
            arg(owner, "halign", "Horizontal align", "Align on the left, centre or right")
                .enumeration("VipsAlign", enums::align(), 0)
                .optional_input(7),
            arg(owner, "valign", "Vertical align", "Align on the top, centre or bottom")
                .enumeration("VipsAlign", enums::align(), 0)
                .optional_input(8),
            arg(owner, "hspacing", "Horizontal spacing", "Horizontal spacing between images")
                .int(1, 1_000_000, 1)
                .optional_input(9),
            arg(owner, "vspacing", "Vertical spacing", "Vertical spacing between images")
                .int(1, 1_000_000, 1)
                .optional_input(10),
        ])
}
