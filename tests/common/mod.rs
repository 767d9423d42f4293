//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

/// Header of a real gamepad capture
pub const GAMEPAD_HEADER: &str = "# EVEMU 1.3
# Kernel: 5.15.0-112-generic
# Input device name: \"Microsoft X-Box 360 pad\"
# Input device ID: bus 0x03 vendor 0x45e product 0x28e version 0x114
################################
#      Waiting for events      #
################################
";

/// A gamepad capture with a stick movement and a button press
pub fn gamepad_text() -> String {
    format!(
        "{}E: 0.000001 0003 0011 -001\n\
         E: 0.000001 0000 0000 0000\n\
         E: 0.583966 0003 0011 0000\n\
         E: 0.583966 0000 0000 0000\n",
        GAMEPAD_HEADER
    )
}

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}
