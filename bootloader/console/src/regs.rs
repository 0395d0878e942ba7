// Register frame passed to a BIOS interrupt.
// Only the general purpose registers the video services read are modelled.
// Each 16 bit register can also be addressed as its high and low byte,
// e.g. AX is AH:AL.

/// General purpose registers loaded right before `int` is executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(C)]
pub struct Registers {
    pub ax: u16,
    pub bx: u16,
    pub cx: u16,
    pub dx: u16,
}

// pair joins a high and low byte into a 16 bit register value.
#[inline(always)]
pub(crate) const fn pair(high: u8, low: u8) -> u16 {
    (high as u16) << 8 | low as u16
}

#[inline(always)]
const fn high(reg: u16) -> u8 {
    (reg >> 8) as u8
}

#[inline(always)]
const fn low(reg: u16) -> u8 {
    reg as u8
}

#[inline(always)]
fn set_high(reg: &mut u16, value: u8) {
    *reg = pair(value, low(*reg));
}

#[inline(always)]
fn set_low(reg: &mut u16, value: u8) {
    *reg = pair(high(*reg), value);
}

impl Registers {
    pub const fn new(ax: u16, bx: u16, cx: u16, dx: u16) -> Self {
        Self { ax, bx, cx, dx }
    }

    pub const fn ah(&self) -> u8 {
        high(self.ax)
    }

    pub const fn al(&self) -> u8 {
        low(self.ax)
    }

    pub const fn bh(&self) -> u8 {
        high(self.bx)
    }

    pub const fn bl(&self) -> u8 {
        low(self.bx)
    }

    pub const fn ch(&self) -> u8 {
        high(self.cx)
    }

    pub const fn cl(&self) -> u8 {
        low(self.cx)
    }

    pub const fn dh(&self) -> u8 {
        high(self.dx)
    }

    pub const fn dl(&self) -> u8 {
        low(self.dx)
    }

    pub fn set_ah(&mut self, value: u8) {
        set_high(&mut self.ax, value);
    }

    pub fn set_al(&mut self, value: u8) {
        set_low(&mut self.ax, value);
    }

    pub fn set_bh(&mut self, value: u8) {
        set_high(&mut self.bx, value);
    }

    pub fn set_bl(&mut self, value: u8) {
        set_low(&mut self.bx, value);
    }

    pub fn set_ch(&mut self, value: u8) {
        set_high(&mut self.cx, value);
    }

    pub fn set_cl(&mut self, value: u8) {
        set_low(&mut self.cx, value);
    }

    pub fn set_dh(&mut self, value: u8) {
        set_high(&mut self.dx, value);
    }

    pub fn set_dl(&mut self, value: u8) {
        set_low(&mut self.dx, value);
    }
}
