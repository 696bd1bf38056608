//! Colour family: ICC transforms and profile loading.

use crate::builder::arg;
use crate::catalog::args::{image_in, image_out, intent};
use crate::catalog::enums;
use crate::model::{types, OperationClass, OperationFlags};

const OPERATION: &[&str] = &[types::VIPS_OPERATION, types::VIPS_OBJECT, types::G_OBJECT];
const COLOUR: &[&str] = &[
    "VipsColour",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];
const ICC: &[&str] = &[
    "VipsIcc",
    "VipsColour",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];

/// Returns the colour family in registration order.
pub fn classes() -> Vec<OperationClass> {
    vec![
        OperationClass::abstract_class("VipsColour", OPERATION, "colour", "color operations")
            .with_arguments(vec![image_out("VipsColour", 1)]),
        OperationClass::abstract_class("VipsIcc", COLOUR, "icc", "transform using ICC profiles")
            .with_arguments(vec![
                image_in("VipsIcc", 1),
                intent("VipsIcc", 6),
                arg("VipsIcc", "pcs", "PCS", "Set Profile Connection Space")
                    .enumeration("VipsPCS", enums::pcs(), 0)
                    .optional_input(6),
                arg(
                    "VipsIcc",
                    "black_point_compensation",
                    "Black point compensation",
                    "Enable black point compensation",
                )
                .boolean(false)
                .optional_input(7),
            ]),
        OperationClass::new("VipsIccImport", ICC, "icc_import", "import from device with ICC profile")
            .with_flags(OperationFlags::SEQUENTIAL)
            .with_arguments(vec![
                arg("VipsIccImport", "embedded", "Embedded", "Use embedded input profile, if available")
                    .boolean(false)
                    .optional_input(110),
                arg("VipsIccImport", "input_profile", "Input profile", "Filename to load input profile from")
                    .string(None)
                    .optional_input(120),
            ]),
        OperationClass::new(
            "VipsIccTransform",
            ICC,
            "icc_transform",
            "transform between devices with ICC profiles",
        )
        .with_flags(OperationFlags::SEQUENTIAL)
        .with_arguments(vec![
            arg("VipsIccTransform", "output_profile", "Output profile", "Filename to load output profile from")
                .string(None)
                .required_input(110),
            arg("VipsIccTransform", "embedded", "Embedded", "Use embedded input profile, if available")
                .boolean(false)
                .optional_input(120),
            arg("VipsIccTransform", "input_profile", "Input profile", "Filename to load input profile from")
                .string(None)
                .optional_input(130),
            arg("VipsIccTransform", "depth", "Depth", "Output device space depth in bits")
                .int(8, 16, 8)
                .optional_input(140),
        ]),
        // The only consumer that treats its blob output as a colour profile.
        OperationClass::new("VipsProfileLoad", OPERATION, "profile_load", "load named ICC profile")
            .with_arguments(vec![
                arg("VipsProfileLoad", "name", "Name", "Profile name")
                    .string(None)
                    .required_input(1),
                arg("VipsProfileLoad", "profile", "Profile", "Loaded profile")
                    .blob()
                    .required_output(2),
            ]),
    ]
}
