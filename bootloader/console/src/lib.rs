// This crate prints to the screen from real mode.
// There is no display driver before the kernel is up, so everything goes
// through the BIOS video services interrupt (INT 0x10).
// Reference: https://en.wikipedia.org/wiki/INT_10H.
#![cfg_attr(not(test), no_std)]

#[cfg(any(test, feature = "sim"))]
extern crate alloc;

mod firmware;
mod regs;
mod video;

#[cfg(any(test, feature = "sim"))]
pub mod sim;

#[cfg(target_arch = "x86")]
pub use firmware::RealModeBios;
pub use firmware::{Firmware, InterruptRequest, Vector};
pub use regs::Registers;
pub use video::{
    clear_screen, print, print_char, BOTTOM_RIGHT, DISPLAY_PAGE, GRAY_ON_BLACK, SCROLL_UP,
    SCROLL_WHOLE_WINDOW, TELETYPE_OUTPUT, TEXT_COLUMNS, TEXT_ROWS, TOP_LEFT, VIDEO_SERVICES,
};

#[cfg(all(target_arch = "x86", feature = "export-symbols"))]
mod export {
    use crate::{firmware::RealModeBios, video};

    // Entry points for boot code that links against the driver without Rust.
    // Both assume the caller is running in real mode with the BIOS IVT intact.

    #[inline(never)]
    #[no_mangle]
    pub extern "C" fn bios_clear_screen() {
        let mut bios = unsafe { RealModeBios::new() };
        video::clear_screen(&mut bios);
    }

    #[inline(never)]
    #[no_mangle]
    pub extern "C" fn bios_print_char(c: u8) {
        let mut bios = unsafe { RealModeBios::new() };
        video::print_char(&mut bios, c);
    }
}
