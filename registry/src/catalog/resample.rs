//! Resample family: geometric transforms and thumbnailing.

use crate::builder::arg;
use crate::catalog::args::{background, fail_on, image_in, image_out, intent};
use crate::catalog::enums;
use crate::model::{types, OperationClass, OperationFlags, TypeHandle};

const OPERATION: &[&str] = &[types::VIPS_OPERATION, types::VIPS_OBJECT, types::G_OBJECT];
const RESAMPLE: &[&str] = &[
    "VipsResample",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];
const THUMBNAIL: &[&str] = &[
    "VipsThumbnail",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];

/// Returns the resample family in registration order.
pub fn classes() -> Vec<OperationClass> {
    vec![
        OperationClass::abstract_class("VipsResample", OPERATION, "resample", "resample operations")
            .with_arguments(vec![image_in("VipsResample", 1), image_out("VipsResample", 2)]),
        affine(),
        resize(),
        thumbnail(),
        OperationClass::new("VipsThumbnailFile", THUMBNAIL, "thumbnail", "generate thumbnail from file")
            .with_arguments(vec![arg(
                "VipsThumbnailFile",
                "filename",
                "Filename",
                "Filename to read from",
            )
            .string(None)
            .required_input(1)]),
        OperationClass::new(
            "VipsThumbnailBuffer",
            THUMBNAIL,
            "thumbnail_buffer",
            "generate thumbnail from buffer",
        )
        .with_arguments(vec![
            arg("VipsThumbnailBuffer", "buffer", "Buffer", "Buffer to load from")
                .blob()
                .required_input(1),
            arg("VipsThumbnailBuffer", "option_string", "Extra options", "Options that are passed on to the underlying loader")
                .string(Some(""))
                .optional_input(20),
        ]),
    ]
}

fn affine() -> OperationClass {
    let owner = "VipsAffine";
    OperationClass::new(owner, RESAMPLE, "affine", "affine transform of an image")
        .with_flags(OperationFlags::SEQUENTIAL)
        .with_arguments(vec![
            arg(owner, "matrix", "Matrix", "Transformation matrix")
                .array_double()
                .required_input(110),
            arg(owner, "interpolate", "Interpolate", "Interpolate pixels with this")
                .object(TypeHandle::object(
                    types::VIPS_INTERPOLATE,
                    "interpolate",
                    "VIPS interpolators",
                ))
                .optional_input(2),
            arg(owner, "oarea", "Output rect", "Area of output to generate")
                .array_int()
                .optional_input(111),
            arg(owner, "odx", "Output offset", "Horizontal output displacement")
                .double(-10_000_000.0, 10_000_000.0, 0.0)
                .optional_input(112),
            arg(owner, "ody", "Output offset", "Vertical output displacement")
                .double(-10_000_000.0, 10_000_000.0, 0.0)
                .optional_input(113),
            arg(owner, "idx", "Input offset", "Horizontal input displacement")
                .double(-10_000_000.0, 10_000_000.0, 0.0)
                .optional_input(114),
            arg(owner, "idy", "Input offset", "Vertical input displacement")
                .double(-10_000_000.0, 10_000_000.0, 0.0)
                .optional_input(115),
            background(owner, 116),
            arg(owner, "premultiplied", "Premultiplied", "Images have premultiplied alpha")
                .boolean(false)
                .optional_input(117),
            arg(owner, "extend", "Extend", "How to generate the extra pixels")
                .enumeration("VipsExtend", enums::extend(), 5)
                .optional_input(118),
        ])
}

fn resize() -> OperationClass {
    let owner = "VipsResize";
    OperationClass::new(owner, RESAMPLE, "resize", "resize an image")
        .with_flags(OperationFlags::SEQUENTIAL)
        .with_arguments(vec![
            arg(owner, "scale", "Scale factor", "Scale image by this factor")
                .double(0.0, 10_000_000.0, 0.0)
                .required_input(113),
            arg(owner, "vscale", "Vertical scale factor", "Vertical scale image by this factor")
                .double(0.0, 10_000_000.0, 0.0)
                .optional_input(114),
            arg(owner, "kernel", "Kernel", "Resampling kernel")
                .enumeration("VipsKernel", enums::kernel(), 5)
                .optional_input(3),
            arg(owner, "gap", "Gap", "Reducing gap")
                .double(0.0, 1_000_000.0, 2.0)
                .optional_input(4),
            arg(owner, "centre", "Centre", "Use centre sampling convention")
                .boolean(false)
                .optional_input(7)
                .deprecated(),
            arg(owner, "idx", "Input offset", "Horizontal input displacement")
                .double(-10_000_000.0, 10_000_000.0, 0.0)
                .optional_input(115)
                .deprecated(),
            arg(owner, "idy", "Input offset", "Vertical input displacement")
                .double(-10_000_000.0, 10_000_000.0, 0.0)
                .optional_input(116)
                .deprecated(),
        ])
}

fn thumbnail() -> OperationClass {
    let owner = "VipsThumbnail";
    OperationClass::abstract_class(owner, OPERATION, "thumbnail_base", "thumbnail generation")
        .with_arguments(vec![
            image_out(owner, 2),
            arg(owner, "width", "Target width", "Size to this width")
                .int(1, 10_000_000, 1)
                .required_input(3),
            arg(owner, "height", "Target height", "Size to this height")
                .int(1, 10_000_000, 1)
                .optional_input(113),
            arg(owner, "size", "Size", "Only upsize, only downsize, or both")
                .enumeration("VipsSize", enums::size(), 0)
                .optional_input(114),
            arg(owner, "no_rotate", "No rotate", "Don't use orientation tags to rotate image upright")
                .boolean(false)
                .optional_input(115),
            arg(owner, "crop", "Crop", "Reduce to fill target rectangle, then crop")
                .enumeration("VipsInteresting", enums::interesting(), 0)
                .optional_input(116),
            arg(owner, "linear", "Linear", "Reduce in linear light")
                .boolean(false)
                .optional_input(117),
            arg(owner, "import_profile", "Import profile", "Fallback import profile")
                .string(None)
                .optional_input(118),
            arg(owner, "export_profile", "Export profile", "Fallback export profile")
                .string(None)
                .optional_input(119),
            intent(owner, 120),
            fail_on(owner, 121),
            arg(owner, "auto_rotate", "Auto rotate", "Use orientation tags to rotate image upright")
                .boolean(true)
                .optional_input(122)
                .deprecated(),
        ])
}
