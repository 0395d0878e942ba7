//! A stand-in for the BIOS that traps INT 0x10 instead of executing it.
//!
//! [`SimulatedBios`] keeps every request it receives and applies the
//! scroll and teletype functions to an in-memory [`TextScreen`], so console
//! code can be checked on the host.

mod screen;

use alloc::vec::Vec;

use crate::{
    firmware::{Firmware, InterruptRequest, Vector},
    video::{DISPLAY_PAGE, SCROLL_UP, TELETYPE_OUTPUT},
};

pub use screen::{Cell, TextScreen};

#[derive(Debug, Default)]
pub struct SimulatedBios {
    traps: Vec<InterruptRequest>,
    screen: TextScreen,
}

impl SimulatedBios {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_screen(screen: TextScreen) -> Self {
        Self {
            traps: Vec::new(),
            screen,
        }
    }

    /// Requests trapped so far, oldest first.
    pub fn traps(&self) -> &[InterruptRequest] {
        &self.traps
    }

    pub fn take_traps(&mut self) -> Vec<InterruptRequest> {
        core::mem::take(&mut self.traps)
    }

    pub fn screen(&self) -> &TextScreen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut TextScreen {
        &mut self.screen
    }

    fn video(&mut self, request: &InterruptRequest) {
        let regs = &request.regs;
        match regs.ah() {
            SCROLL_UP => self.screen.scroll_up(
                regs.al() as usize,
                regs.bh(),
                (regs.ch() as usize, regs.cl() as usize),
                (regs.dh() as usize, regs.dl() as usize),
            ),
            TELETYPE_OUTPUT if regs.bh() == DISPLAY_PAGE => self.screen.teletype(regs.al()),
            TELETYPE_OUTPUT => {
                log::warn!("int 0x10: teletype to page {} not simulated", regs.bh());
            }
            function => {
                log::warn!("int 0x10: function {:#04x} not simulated", function);
            }
        }
    }
}

impl Firmware for SimulatedBios {
    fn interrupt(&mut self, request: InterruptRequest) {
        log::trace!(
            "int {:#04x} ax={:#06x} bx={:#06x} cx={:#06x} dx={:#06x}",
            request.vector as u8,
            request.regs.ax,
            request.regs.bx,
            request.regs.cx,
            request.regs.dx,
        );

        match request.vector {
            Vector::Video => self.video(&request),
        }
        self.traps.push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs::Registers;

    fn video(ax: u16, bx: u16, cx: u16, dx: u16) -> InterruptRequest {
        InterruptRequest {
            vector: Vector::Video,
            regs: Registers::new(ax, bx, cx, dx),
        }
    }

    #[test]
    fn unknown_function_is_recorded_and_ignored() {
        let mut bios = SimulatedBios::new();
        // AH=0x02 set cursor position.
        bios.interrupt(video(0x0200, 0, 0, 0x0505));

        assert_eq!(bios.traps().len(), 1);
        assert_eq!(bios.screen(), &TextScreen::new());
    }

    #[test]
    fn teletype_to_other_page_leaves_page_zero() {
        let mut bios = SimulatedBios::new();
        bios.interrupt(video(0x0E41, 0x0100, 0, 0));

        assert_eq!(bios.screen(), &TextScreen::new());
        assert_eq!(bios.traps()[0].regs.bh(), 1);
    }

    #[test]
    fn scroll_uses_requested_attribute() {
        let mut bios = SimulatedBios::with_screen(TextScreen::filled(b'#', 0x07));
        bios.interrupt(video(0x0600, 0x1F00, 0x0000, 0x184F));

        assert_eq!(bios.screen(), &TextScreen::filled(b' ', 0x1F));
    }

    #[test]
    fn take_traps_drains() {
        let mut bios = SimulatedBios::new();
        bios.interrupt(video(0x0E41, 0, 0, 0));

        assert_eq!(bios.take_traps().len(), 1);
        assert!(bios.traps().is_empty());
        assert_eq!(bios.screen().cell(0, 0).ch, b'A');
    }
}
