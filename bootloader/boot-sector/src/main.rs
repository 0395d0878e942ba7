// This is a boot sector demo for the BIOS console.
// It clears the screen, prints a banner and halts.
// See boot-sector-link.ld for the disk layout.
#![no_std]
#![no_main]

use core::{arch::asm, arch::global_asm, panic::PanicInfo};

use bios_console::{clear_screen, print, print_char, RealModeBios};

global_asm!(include_str!("boot.s"));

static BANNER: &str = "BIOS console up\r\n";

#[no_mangle]
pub extern "C" fn first_stage(drive_number: u16) -> ! {
    // boot.s set up flat real mode and we haven't left it.
    let mut bios = unsafe { RealModeBios::new() };

    clear_screen(&mut bios);
    print(&mut bios, BANNER);
    print(&mut bios, "Drive ");
    print_hex_byte(&mut bios, drive_number as u8);

    halt()
}

fn print_hex_byte(bios: &mut RealModeBios, byte: u8) {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    print(bios, "0x");
    print_char(bios, DIGITS[(byte >> 4) as usize]);
    print_char(bios, DIGITS[(byte & 0xF) as usize]);
}

fn halt() -> ! {
    loop {
        unsafe {
            asm!("hlt");
        }
    }
}

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    halt()
}
