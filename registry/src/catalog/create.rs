//! Create family: operations that make images from nothing, plus the
//! external-command runner.

use crate::builder::arg;
use crate::catalog::args::image_out;
use crate::catalog::enums;
use crate::model::{types, OperationClass, OperationFlags};

const OPERATION: &[&str] = &[types::VIPS_OPERATION, types::VIPS_OBJECT, types::G_OBJECT];
const CREATE: &[&str] = &[
    "VipsCreate",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];

/// Returns the create family in registration order.
pub fn classes() -> Vec<OperationClass> {
    vec![
        OperationClass::abstract_class("VipsCreate", OPERATION, "create", "create operations")
            .with_arguments(vec![image_out("VipsCreate", 1)]),
        OperationClass::new("VipsBlack", CREATE, "black", "make a black image")
            .with_flags(OperationFlags::SEQUENTIAL)
            .with_arguments(vec![
                arg("VipsBlack", "width", "Width", "Image width in pixels")
                    .int(1, 10_000_000, 1)
                    .required_input(4),
                arg("VipsBlack", "height", "Height", "Image height in pixels")
                    .int(1, 10_000_000, 1)
                    .required_input(5),
                arg("VipsBlack", "bands", "Bands", "Number of bands in image")
                    .int(1, 10_000_000, 1)
                    .optional_input(6),
            ]),
        text(),
        system(),
    ]
}

fn text() -> OperationClass {
    let owner = "VipsText";
    OperationClass::new(owner, CREATE, "text", "make a text image").with_arguments(vec![
        arg(owner, "text", "Text", "Text to render")
            .string(Some(""))
            .required_input(4),
        arg(owner, "font", "Font", "Font to render with")
            .string(None)
            .optional_input(5),
        arg(owner, "width", "Width", "Maximum image width in pixels")
            .int(0, 10_000_000, 0)
            .optional_input(6),
        arg(owner, "height", "Height", "Maximum image height in pixels")
            .int(0, 10_000_000, 0)
            .optional_input(7),
        arg(owner, "align", "Align", "Align on the low, centre or high edge")
            .enumeration("VipsAlign", enums::align(), 0)
            .optional_input(8),
        arg(owner, "dpi", "DPI", "DPI to render at")
            .int(1, 1_000_000, 72)
            .optional_input(9),
        arg(owner, "justify", "Justify", "Justify lines")
            .boolean(false)
            .optional_input(10),
        arg(owner, "autofit_dpi", "Autofit DPI", "DPI selected by autofit")
            .int(1, 1_000_000, 72)
            .optional_output(11),
        arg(owner, "spacing", "Spacing", "Line spacing")
            .int(0, 1_000_000, 0)
            .optional_input(12),
        arg(owner, "fontfile", "Font file", "Load this font file")
            .string(None)
            .optional_input(13),
        arg(owner, "rgba", "RGBA", "Enable RGBA output")
            .boolean(false)
            .optional_input(14),
        arg(owner, "wrap", "Wrap", "Wrap lines on word or character boundaries")
            .enumeration("VipsTextWrap", enums::text_wrap(), 0)
            .optional_input(15),
    ])
}

fn system() -> OperationClass {
    let owner = "VipsSystem";
    OperationClass::new(owner, OPERATION, "system", "run an external command")
        .with_flags(OperationFlags {
            nocache: true,
            ..OperationFlags::UNTRUSTED
        })
        .with_arguments(vec![
            arg(owner, "in", "Input", "Array of input images")
                .array_image()
                .optional_input(0),
            arg(owner, "out", "Output", "Output image")
                .image()
                .optional_output(1),
            arg(owner, "cmd_format", "Command", "Command to run")
                .string(None)
                .required_input(2),
            arg(owner, "in_format", "Input format", "Format for input filename")
                .string(None)
                .optional_input(2),
            arg(owner, "out_format", "Output format", "Format for output filename")
                .string(None)
                .optional_input(2),
            arg(owner, "log", "Log", "Command log")
                .string(None)
                .optional_output(2),
        ])
}
