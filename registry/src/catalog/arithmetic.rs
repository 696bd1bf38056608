//! Arithmetic family: pixel-wise unary and binary maths plus statistics.

use crate::builder::arg;
use crate::catalog::args::{image_in, image_out};
use crate::model::{types, OperationClass, OperationFlags};

const OPERATION: &[&str] = &[types::VIPS_OPERATION, types::VIPS_OBJECT, types::G_OBJECT];
const ARITHMETIC: &[&str] = &[
    "VipsArithmetic",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];
const UNARY: &[&str] = &[
    "VipsUnary",
    "VipsArithmetic",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];
const BINARY: &[&str] = &[
    "VipsBinary",
    "VipsArithmetic",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];
const STATISTIC: &[&str] = &[
    "VipsStatistic",
    types::VIPS_OPERATION,
    types::VIPS_OBJECT,
    types::G_OBJECT,
];

/// Returns the arithmetic family in registration order.
pub fn classes() -> Vec<OperationClass> {
    vec![
        OperationClass::abstract_class("VipsArithmetic", OPERATION, "arithmetic", "arithmetic operations")
            .with_arguments(vec![image_out("VipsArithmetic", 100)]),
        OperationClass::abstract_class("VipsBinary", ARITHMETIC, "binary", "binary operations")
            .with_arguments(vec![
                arg("VipsBinary", "left", "Left", "Left-hand image argument")
                    .image()
                    .required_input(1),
                arg("VipsBinary", "right", "Right", "Right-hand image argument")
                    .image()
                    .required_input(2),
            ]),
        OperationClass::new("VipsAdd", BINARY, "add", "add two images")
            .with_flags(OperationFlags::SEQUENTIAL),
        OperationClass::new("VipsSubtract", BINARY, "subtract", "subtract two images")
            .with_flags(OperationFlags::SEQUENTIAL),
        OperationClass::abstract_class("VipsUnary", ARITHMETIC, "unary", "unary operations")
            .with_arguments(vec![image_in("VipsUnary", 1)]),
        OperationClass::new("VipsInvert", UNARY, "invert", "invert an image")
            .with_flags(OperationFlags::SEQUENTIAL),
        OperationClass::new("VipsLinear", UNARY, "linear", "calculate (a * in + b)")
            .with_flags(OperationFlags::SEQUENTIAL)
            .with_arguments(vec![
                arg("VipsLinear", "a", "a", "Multiply by this")
                    .array_double()
                    .required_input(110),
                arg("VipsLinear", "b", "b", "Add this")
                    .array_double()
                    .required_input(111),
                arg("VipsLinear", "uchar", "uchar", "Output should be uchar")
                    .boolean(false)
                    .optional_input(112),
            ]),
        OperationClass::new("VipsSum", ARITHMETIC, "sum", "sum an array of images")
            .with_flags(OperationFlags::SEQUENTIAL)
            .with_arguments(vec![arg("VipsSum", "in", "Input", "Array of input images")
                .array_image()
                .required_input(0)]),
        OperationClass::abstract_class("VipsStatistic", OPERATION, "statistic", "VIPS statistic operations")
            .with_arguments(vec![image_in("VipsStatistic", 0)]),
        OperationClass::new("VipsAvg", STATISTIC, "avg", "find image average")
            .with_arguments(vec![arg("VipsAvg", "out", "Output", "Output value")
                .double(-f64::MAX, f64::MAX, 0.0)
                .required_output(2)]),
        OperationClass::new("VipsMax", STATISTIC, "max", "find image maximum").with_arguments(vec![
            arg("VipsMax", "out", "Output", "Output value")
                .double(-f64::MAX, f64::MAX, 0.0)
                .required_output(1),
            arg("VipsMax", "x", "x", "Horizontal position of maximum")
                .int(0, 10_000_000, 0)
                .optional_output(2),
            arg("VipsMax", "y", "y", "Vertical position of maximum")
                .int(0, 10_000_000, 0)
                .optional_output(3),
            arg("VipsMax", "size", "Size", "Number of maximum values to find")
                .int(1, 1_000_000, 10)
                .optional_input(4),
            arg("VipsMax", "out_array", "Output array", "Array of output values")
                .array_double()
                .optional_output(5),
            arg("VipsMax", "x_array", "x array", "Array of horizontal positions")
                .array_int()
                .optional_output(6),
            arg("VipsMax", "y_array", "y array", "Array of vertical positions")
                .array_int()
                .optional_output(7),
        ]),
    ]
}
