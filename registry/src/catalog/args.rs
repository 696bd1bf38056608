//! Argument declarations reused by several operation families.

use crate::builder::arg;
use crate::model::{types, Argument, ArgumentFlags};

/// Object-level properties every operation inherits. Neither is a
/// construction argument.
pub fn object_properties() -> Vec<Argument> {
    vec![
        arg(types::VIPS_OBJECT, "nickname", "Nickname", "Class nickname")
            .string(None)
            .with_flags(ArgumentFlags::SET_ONCE, 0),
        arg(types::VIPS_OBJECT, "description", "Description", "Class description")
            .string(None)
            .with_flags(ArgumentFlags::SET_ONCE, 0),
    ]
}

/// Required input image named `in`.
pub fn image_in(owner: &str, priority: i32) -> Argument {
    arg(owner, "in", "Input", "Input image")
        .image()
        .required_input(priority)
}

/// Required output image named `out`.
pub fn image_out(owner: &str, priority: i32) -> Argument {
    arg(owner, "out", "Output", "Output image")
        .image()
        .required_output(priority)
}

/// Optional background colour.
pub fn background(owner: &str, priority: i32) -> Argument {
    arg(owner, "background", "Background", "Background value")
        .array_double()
        .optional_input(priority)
}

/// Required filename to read or write.
pub fn filename(owner: &str, blurb: &str, priority: i32) -> Argument {
    arg(owner, "filename", "Filename", blurb)
        .string(None)
        .required_input(priority)
}

/// Optional rendering intent.
pub fn intent(owner: &str, priority: i32) -> Argument {
    arg(owner, "intent", "Intent", "Rendering intent")
        .enumeration("VipsIntent", super::enums::intent(), 1)
        .optional_input(priority)
}

/// Optional failure threshold.
pub fn fail_on(owner: &str, priority: i32) -> Argument {
    arg(owner, "fail_on", "Fail on", "Error level to fail on")
        .enumeration("VipsFailOn", super::enums::fail_on(), 0)
        .optional_input(priority)
}
