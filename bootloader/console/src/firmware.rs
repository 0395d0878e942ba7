// This module is the only place that actually traps into the BIOS.
// Everything above it builds an InterruptRequest and hands it to a Firmware,
// so tests can swap the real BIOS for a simulated one.
#[cfg(target_arch = "x86")]
use core::arch::asm;

use crate::regs::Registers;

/// Interrupt vectors this crate issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Vector {
    /// BIOS video services.
    Video = 0x10,
}

/// One firmware call: a vector plus the registers loaded before `int`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterruptRequest {
    pub vector: Vector,
    pub regs: Registers,
}

/// Raw interrupt call capability.
///
/// Implementations execute `request` and return once the firmware handler
/// does. Nothing is reported back to the caller.
pub trait Firmware {
    fn interrupt(&mut self, request: InterruptRequest);
}

impl<F: Firmware + ?Sized> Firmware for &mut F {
    fn interrupt(&mut self, request: InterruptRequest) {
        (**self).interrupt(request)
    }
}

/// The BIOS of the machine we are running on.
#[cfg(target_arch = "x86")]
pub struct RealModeBios {
    _private: (),
}

#[cfg(target_arch = "x86")]
impl RealModeBios {
    /// # Safety
    ///
    /// The CPU must be in real mode (or unreal mode) with the BIOS interrupt
    /// vector table still in place. Calls must not be issued concurrently or
    /// from inside another BIOS interrupt handler.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

#[cfg(target_arch = "x86")]
impl Firmware for RealModeBios {
    #[inline(never)]
    fn interrupt(&mut self, request: InterruptRequest) {
        let Registers { ax, bx, cx, dx } = request.regs;
        match request.vector {
            Vector::Video => unsafe {
                // LLVM may reserve BX, so it rides in DI.
                asm!(
                    "push bx",
                    "push bp",       // Some BIOSes trash BP when scrolling.
                    "mov bx, di",
                    "int 0x10",      // call BIOS video services
                    "pop bp",
                    "pop bx",
                    inout("ax") ax => _,
                    inout("di") bx => _,
                    inout("cx") cx => _,
                    inout("dx") dx => _,
                );
            },
        }
    }
}
