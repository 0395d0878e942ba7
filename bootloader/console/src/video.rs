// Console operations on top of INT 0x10.
// Reference: https://wiki.osdev.org/BIOS#Common_functions.
use crate::{
    firmware::{Firmware, InterruptRequest, Vector},
    regs::{pair, Registers},
};

/// Interrupt vector of the BIOS video services.
pub const VIDEO_SERVICES: u8 = Vector::Video as u8;

// Function numbers, passed in AH.
pub const SCROLL_UP: u8 = 0x06;
pub const TELETYPE_OUTPUT: u8 = 0x0E;

/// Line count for SCROLL_UP (AL) that blanks the whole window.
pub const SCROLL_WHOLE_WINDOW: u8 = 0x00;
/// Light gray on black.
pub const GRAY_ON_BLACK: u8 = 0x07;
pub const DISPLAY_PAGE: u8 = 0x00;

pub const TEXT_ROWS: usize = 25;
pub const TEXT_COLUMNS: usize = 80;

/// Upper left corner of the standard text screen as (row, column).
pub const TOP_LEFT: (u8, u8) = (0, 0);
/// Lower right corner of the standard text screen as (row, column).
pub const BOTTOM_RIGHT: (u8, u8) = ((TEXT_ROWS - 1) as u8, (TEXT_COLUMNS - 1) as u8);

impl InterruptRequest {
    /// Scroll up with AL=0, which blanks the whole 80x25 screen.
    pub const fn clear_screen() -> Self {
        Self {
            vector: Vector::Video,
            regs: Registers::new(
                pair(SCROLL_UP, SCROLL_WHOLE_WINDOW),
                pair(GRAY_ON_BLACK, 0x00),
                pair(TOP_LEFT.0, TOP_LEFT.1),
                pair(BOTTOM_RIGHT.0, BOTTOM_RIGHT.1),
            ),
        }
    }

    /// Teletype output of `c` on page 0.
    pub const fn teletype(c: u8) -> Self {
        Self {
            vector: Vector::Video,
            // BL is the foreground colour in graphics modes only.
            regs: Registers::new(pair(TELETYPE_OUTPUT, c), pair(DISPLAY_PAGE, 0x00), 0, 0),
        }
    }
}

/// Blank the whole text screen with gray on black.
///
/// Where the cursor ends up is up to the BIOS.
pub fn clear_screen<F: Firmware + ?Sized>(firmware: &mut F) {
    firmware.interrupt(InterruptRequest::clear_screen());
}

/// Write one byte at the cursor and let the BIOS advance it.
///
/// The byte is passed through untouched. CR, LF and friends are handled
/// by the BIOS teletype routine.
pub fn print_char<F: Firmware + ?Sized>(firmware: &mut F, c: u8) {
    firmware.interrupt(InterruptRequest::teletype(c));
}

pub fn print<F: Firmware + ?Sized>(firmware: &mut F, s: &str) {
    for c in s.bytes() {
        print_char(firmware, c);
    }
}
