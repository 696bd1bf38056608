//! Foreign family: loaders and savers for file, memory and stream I/O.

use crate::builder::arg;
use crate::catalog::args::{background, fail_on, filename, image_in, image_out};
use crate::catalog::enums;
use crate::model::{types, OperationClass, OperationFlags, TypeHandle};

const OPERATION: &[&str] = &[types::VIPS_OPERATION, types::VIPS_OBJECT, types::G_OBJECT];
const FOREIGN: &[&str] = &[
    "VipsForeign",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];
const LOAD: &[&str] = &[
    "VipsForeignLoad",
    "VipsForeign",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];
const LOAD_JPEG: &[&str] = &[
    "VipsForeignLoadJpeg",
    "VipsForeignLoad",
    "VipsForeign",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];
const SAVE: &[&str] = &[
    "VipsForeignSave",
    "VipsForeign",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];
const SAVE_JPEG: &[&str] = &[
    "VipsForeignSaveJpeg",
    "VipsForeignSave",
    "VipsForeign",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];

/// Returns the foreign family in registration order.
pub fn classes() -> Vec<OperationClass> {
    vec![
        OperationClass::abstract_class("VipsForeign", OPERATION, "foreign", "load and save images"),
        load(),
        OperationClass::abstract_class("VipsForeignLoadJpeg", LOAD, "jpegload_base", "load jpeg")
            .with_arguments(vec![
                arg("VipsForeignLoadJpeg", "shrink", "Shrink", "Shrink factor on load")
                    .int(1, 16, 1)
                    .optional_input(20),
                arg("VipsForeignLoadJpeg", "autorotate", "Autorotate", "Rotate image using exif orientation")
                    .boolean(false)
                    .optional_input(21),
                arg("VipsForeignLoadJpeg", "unlimited", "Unlimited", "Remove all denial of service limits")
                    .boolean(false)
                    .optional_input(22),
            ]),
        OperationClass::new("VipsForeignLoadJpegFile", LOAD_JPEG, "jpegload", "load jpeg from file")
            .with_arguments(vec![filename("VipsForeignLoadJpegFile", "Filename to load from", 1)]),
        OperationClass::new(
            "VipsForeignLoadJpegBuffer",
            LOAD_JPEG,
            "jpegload_buffer",
            "load jpeg from buffer",
        )
        .with_arguments(vec![arg("VipsForeignLoadJpegBuffer", "buffer", "Buffer", "Buffer to load from")
            .blob()
            .required_input(1)]),
        OperationClass::new(
            "VipsForeignLoadJpegSource",
            LOAD_JPEG,
            "jpegload_source",
            "load image from jpeg source",
        )
        .with_arguments(vec![arg("VipsForeignLoadJpegSource", "source", "Source", "Source to load from")
            .object(TypeHandle::object(types::VIPS_SOURCE, "source", "input source"))
            .required_input(1)]),
        raw_load(),
        save(),
        OperationClass::abstract_class("VipsForeignSaveJpeg", SAVE, "jpegsave_base", "save jpeg")
            .with_arguments(jpeg_save_options()),
        OperationClass::new("VipsForeignSaveJpegFile", SAVE_JPEG, "jpegsave", "save image to jpeg file")
            .with_arguments(vec![filename("VipsForeignSaveJpegFile", "Filename to save to", 1)]),
        OperationClass::new(
            "VipsForeignSaveJpegBuffer",
            SAVE_JPEG,
            "jpegsave_buffer",
            "save image to jpeg buffer",
        )
        .with_arguments(vec![arg("VipsForeignSaveJpegBuffer", "buffer", "Buffer", "Buffer to save to")
            .blob()
            .required_output(1)]),
        OperationClass::new(
            "VipsForeignSaveJpegTarget",
            SAVE_JPEG,
            "jpegsave_target",
            "save image to jpeg target",
        )
        .with_arguments(vec![arg("VipsForeignSaveJpegTarget", "target", "Target", "Target to save to")
            .object(TypeHandle::object(types::VIPS_TARGET, "target", "output target"))
            .required_input(1)]),
    ]
}

fn load() -> OperationClass {
    let owner = "VipsForeignLoad";
    OperationClass::abstract_class(owner, FOREIGN, "fileload", "file loaders").with_arguments(vec![
        image_out(owner, 2),
        arg(owner, "flags", "Flags", "Flags for this file")
            .flags("VipsForeignFlags", enums::foreign_flags(), 0)
            .optional_output(6),
        arg(owner, "memory", "Memory", "Force open via memory")
            .boolean(false)
            .optional_input(7),
        arg(owner, "access", "Access", "Required access pattern for this file")
            .enumeration("VipsAccess", enums::access(), 0)
            .optional_input(8),
        fail_on(owner, 9),
        arg(owner, "revalidate", "Revalidate", "Don't use a cached result for this operation")
            .boolean(false)
            .optional_input(10),
        arg(owner, "sequential", "Sequential", "Sequential read only")
            .boolean(false)
            .optional_input(11)
            .deprecated(),
        arg(owner, "fail", "Fail", "Fail on first warning")
            .boolean(false)
            .optional_input(12)
            .deprecated(),
        arg(owner, "disc", "Disc", "Open to disc")
            .boolean(true)
            .optional_input(13)
            .deprecated(),
    ])
}

fn raw_load() -> OperationClass {
    let owner = "VipsForeignLoadRaw";
    OperationClass::new(owner, LOAD, "rawload", "load raw data from a file")
        .with_flags(OperationFlags::UNTRUSTED)
        .with_arguments(vec![
            filename(owner, "Filename to load from", 1),
            arg(owner, "width", "Width", "Image width in pixels")
                .int(0, 10_000_000, 0)
                .required_input(20),
            arg(owner, "height", "Height", "Image height in pixels")
                .int(0, 10_000_000, 0)
                .required_input(21),
            arg(owner, "bands", "Bands", "Number of bands in image")
                .int(0, 10_000_000, 0)
                .required_input(22),
            arg(owner, "offset", "Size", "Offset in bytes from start of file")
                .uint64(0, 100_000_000_000, 0)
                .optional_input(23),
            arg(owner, "format", "Format", "Pixel format in image")
                .enumeration("VipsBandFormat", enums::band_format(), 0)
                .optional_input(24),
            arg(owner, "interpretation", "Interpretation", "Pixel interpretation")
                .enumeration("VipsInterpretation", enums::interpretation(), 0)
                .optional_input(25),
        ])
}

fn save() -> OperationClass {
    let owner = "VipsForeignSave";
    OperationClass::abstract_class(owner, FOREIGN, "filesave", "file savers").with_arguments(vec![
        image_in(owner, 0),
        arg(owner, "keep", "Keep", "Which metadata to retain")
            .flags("VipsForeignKeep", enums::foreign_keep(), 31)
            .optional_input(100),
        background(owner, 101),
        arg(owner, "page_height", "Page height", "Set page height for multipage save")
            .int(0, 10_000_000, 0)
            .optional_input(102),
        arg(owner, "profile", "Profile", "Filename of ICC profile to embed")
            .string(None)
            .optional_input(103),
        arg(owner, "strip", "Strip", "Strip all metadata from image")
            .boolean(false)
            .optional_input(104)
            .deprecated(),
    ])
}

fn jpeg_save_options() -> Vec<crate::model::Argument> {
    let owner = "VipsForeignSaveJpeg";
    vec![
        arg(owner, "Q", "Q", "Q factor")
            .int(1, 100, 75)
            .optional_input(10),
        arg(owner, "optimize_coding", "Optimize coding", "Compute optimal Huffman coding tables")
            .boolean(false)
            .optional_input(12),
        arg(owner, "interlace", "Interlace", "Generate an interlaced (progressive) jpeg")
            .boolean(false)
            .optional_input(13),
        arg(owner, "no_subsample", "No subsample", "Disable chroma subsample")
            .boolean(false)
            .optional_input(14)
            .deprecated(),
        arg(owner, "trellis_quant", "Trellis quantisation", "Apply trellis quantisation to each 8x8 block")
            .boolean(false)
            .optional_input(15),
        arg(owner, "subsample_mode", "Subsample mode", "Select chroma subsample operation mode")
            .enumeration("VipsForeignSubsample", enums::subsample(), 0)
            .optional_input(19),
        arg(owner, "restart_interval", "Restart interval", "Add restart markers every specified number of mcu")
            .int(0, i64::from(i32::MAX), 0)
            .optional_input(20),
    ]
}
