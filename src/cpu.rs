//   Copyright 2026 Martin Åkesson
//
//   Licensed under the Apache License, Version 2.0 (the "License");
//   you may not use this file except in compliance with the License.
//   You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
//
//   Unless required by applicable law or agreed to in writing, software
//   distributed under the License is distributed on an "AS IS" BASIS,
//   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//   See the License for the specific language governing permissions and
//   limitations under the License.

use std::fmt;

use crate::bus::Bus;
use crate::pins::PinState;
use crate::registers::Registers;

mod opcodes;

// ---------------------------------------------------------------------------
// Interrupt vector addresses
// ---------------------------------------------------------------------------

pub const VEC_RESET: u16 = 0xFFFE;
pub const VEC_NMI: u16 = 0xFFFC;
pub const VEC_SWI: u16 = 0xFFFA;
pub const VEC_IRQ: u16 = 0xFFF8;
pub const VEC_FIRQ: u16 = 0xFFF6;
pub const VEC_SWI2: u16 = 0xFFF4;
pub const VEC_SWI3: u16 = 0xFFF2;

// ---------------------------------------------------------------------------
// CPU state
// ---------------------------------------------------------------------------

/// Motorola 6809 CPU emulator.
pub struct Cpu {
    /// Programmer-visible registers.
    pub reg: Registers,
    /// Total elapsed cycles since reset.
    pub cycles: u64,
    /// CPU is halted (HALT line asserted by the host).
    pub halted: bool,
    /// CPU encountered an illegal opcode (invalid in current state).
    pub illegal: bool,
    /// Bus/control pin state, updated by the core and read by the host.
    pub pins: PinState,

    // ---- interrupt state ----
    /// NMI is armed (becomes true after the first write that moves S).
    nmi_armed: bool,
    /// NMI pending (edge-triggered).
    nmi_pending: bool,
    /// FIRQ line asserted (level-triggered).
    firq_line: bool,
    /// IRQ line asserted (level-triggered).
    irq_line: bool,
    /// IRQ recognition deferred by one instruction (see `trigger_irq`).
    delay_irq: bool,
    /// CWAI: entire state already pushed, waiting for interrupt.
    cwai: bool,
    /// SYNC/CWAI: waiting for any interrupt edge.
    syncing: bool,
}

impl Cpu {
    /// Create a new CPU with all state zeroed.
    pub fn new() -> Self {
        Self {
            reg: Registers::new(),
            cycles: 0,
            halted: false,
            illegal: false,
            pins: PinState::new(),
            nmi_armed: false,
            nmi_pending: false,
            firq_line: false,
            irq_line: false,
            delay_irq: false,
            cwai: false,
            syncing: false,
        }
    }

    /// Hardware reset: read PC from reset vector, set I+F, clear state.
    pub fn reset(&mut self, bus: &mut impl Bus) {
        self.reg = Registers::new();
        self.reg.cc.set_irq_inhibit(true);
        self.reg.cc.set_firq_inhibit(true);
        self.halted = false;
        self.illegal = false;
        self.nmi_armed = false;
        self.nmi_pending = false;
        self.firq_line = false;
        self.irq_line = false;
        self.delay_irq = false;
        self.cwai = false;
        self.syncing = false;
        self.cycles = 0;
        self.pins.set_mpu_state(true, false);
        self.reg.pc = self.read_word(bus, VEC_RESET);
        self.pins.set_mpu_state(false, false);
        log::trace!("reset: pc={:04X}", self.reg.pc);
    }

    /// Assert the HALT line. The core stops fetching until cleared.
    pub fn set_halt(&mut self, active: bool) {
        self.halted = active;
    }

    /// Assert the IRQ line (level-triggered).
    ///
    /// `delay`, when true, defers recognition by exactly one instruction —
    /// the instruction already in flight when an interrupt source raises
    /// IRQ is allowed to complete, and the one that follows it, before the
    /// core samples IRQ again. Pass `false` for the common case.
    pub fn trigger_irq(&mut self, delay: bool) {
        self.irq_line = true;
        if delay {
            self.delay_irq = true;
        }
    }

    /// De-assert the IRQ line.
    pub fn clear_irq(&mut self) {
        self.irq_line = false;
        self.delay_irq = false;
    }

    /// Assert the FIRQ line (level-triggered).
    pub fn trigger_firq(&mut self) {
        self.firq_line = true;
    }

    /// De-assert the FIRQ line.
    pub fn clear_firq(&mut self) {
        self.firq_line = false;
    }

    /// Trigger an NMI (edge-triggered). Only effective if NMI is armed
    /// (i.e. some instruction has already written to S since reset).
    pub fn trigger_nmi(&mut self) {
        if self.nmi_armed {
            self.nmi_pending = true;
        }
    }

    /// Execute a single instruction (or service a pending interrupt, or
    /// spend one cycle halted/waiting). Returns the number of cycles
    /// consumed.
    pub fn step(&mut self, bus: &mut impl Bus) -> u64 {
        if self.halted {
            self.pins.set_mpu_state(true, true);
            self.cycles += 1;
            return 1;
        }

        let start_cycles = self.cycles;

        // Handle SYNC/CWAI: wait for any interrupt edge.
        if self.syncing {
            if self.nmi_pending || self.firq_line || self.irq_line {
                self.syncing = false;
            } else {
                self.pins.set_mpu_state(false, true);
                self.cycles += 1;
                return 1;
            }
        }

        // Check pending interrupts (priority: NMI > FIRQ > IRQ).
        let deferred = self.delay_irq;
        if self.check_interrupts(bus) {
            return self.cycles - start_cycles;
        }
        if deferred {
            // The instruction that follows the delayed trigger is allowed
            // to run; recognition resumes on the step after it.
            self.delay_irq = false;
        }

        self.pins.set_mpu_state(false, false);
        let opcode = self.fetch_byte(bus);
        self.dispatch(bus, opcode);
        self.pins.set_lic(true);

        self.cycles - start_cycles
    }

    /// Run until at least `cycles` cycles have been consumed (or the core
    /// halts). Returns the signed drift: `cycles - consumed`. A positive
    /// drift means the core stopped early (it halted); a negative drift
    /// means it overshot the budget servicing the last instruction or
    /// interrupt, which the caller should carry over into its next call.
    pub fn execute(&mut self, bus: &mut impl Bus, cycles: u64) -> i64 {
        let target = self.cycles + cycles;
        while self.cycles < target && !self.halted {
            self.step(bus);
        }
        target as i64 - self.cycles as i64
    }

    // ---- interrupt logic ----

    fn check_interrupts(&mut self, bus: &mut impl Bus) -> bool {
        // NMI (edge-triggered, highest priority)
        if self.nmi_pending {
            self.nmi_pending = false;
            log::trace!("NMI: servicing");
            if !self.cwai {
                self.reg.cc.set_entire(true);
                self.push_entire_state(bus);
            }
            self.cwai = false;
            self.reg.cc.set_irq_inhibit(true);
            self.reg.cc.set_firq_inhibit(true);
            self.pins.set_mpu_state(true, false);
            self.reg.pc = self.read_word(bus, VEC_NMI);
            self.pins.set_mpu_state(false, false);
            self.cycles += 19;
            return true;
        }

        // FIRQ (level-triggered)
        if self.firq_line && !self.reg.cc.firq_inhibit() {
            log::trace!("FIRQ: servicing");
            if !self.cwai {
                self.reg.cc.set_entire(false);
                self.push_word_s(bus, self.reg.pc);
                self.push_byte_s(bus, self.reg.cc.to_byte());
            }
            self.cwai = false;
            self.reg.cc.set_irq_inhibit(true);
            self.reg.cc.set_firq_inhibit(true);
            self.pins.set_mpu_state(true, false);
            self.reg.pc = self.read_word(bus, VEC_FIRQ);
            self.pins.set_mpu_state(false, false);
            self.cycles += 10;
            return true;
        }

        // IRQ (level-triggered, subject to one-instruction deferral)
        if self.irq_line && !self.delay_irq && !self.reg.cc.irq_inhibit() {
            log::trace!("IRQ: servicing");
            if !self.cwai {
                self.reg.cc.set_entire(true);
                self.push_entire_state(bus);
            }
            self.cwai = false;
            self.reg.cc.set_irq_inhibit(true);
            self.pins.set_mpu_state(true, false);
            self.reg.pc = self.read_word(bus, VEC_IRQ);
            self.pins.set_mpu_state(false, false);
            self.cycles += 19;
            return true;
        }

        false
    }

    // ---- bus access helpers ----
    //
    // The only place in the core that touches `PinState` directly. Every
    // opcode handler and addressing-mode helper reads and writes memory
    // through these.

    pub(crate) fn read(&mut self, bus: &mut impl Bus, addr: u16) -> u8 {
        self.pins.set_address(addr);
        self.pins.set_rw(true);
        bus.access(&mut self.pins);
        self.pins.data()
    }

    pub(crate) fn write(&mut self, bus: &mut impl Bus, addr: u16, val: u8) {
        self.pins.set_address(addr);
        self.pins.set_rw(false);
        self.pins.set_data(val);
        bus.access(&mut self.pins);
    }

    pub(crate) fn read_word(&mut self, bus: &mut impl Bus, addr: u16) -> u16 {
        let hi = self.read(bus, addr) as u16;
        let lo = self.read(bus, addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    pub(crate) fn write_word(&mut self, bus: &mut impl Bus, addr: u16, val: u16) {
        self.write(bus, addr, (val >> 8) as u8);
        self.write(bus, addr.wrapping_add(1), val as u8);
    }

    // ---- stack helpers ----

    /// Push a byte onto the hardware stack (S).
    pub(crate) fn push_byte_s(&mut self, bus: &mut impl Bus, val: u8) {
        self.reg.s = self.reg.s.wrapping_sub(1);
        self.write(bus, self.reg.s, val);
        self.arm_nmi();
    }

    /// Push a 16-bit word onto the hardware stack (S), high byte first.
    pub(crate) fn push_word_s(&mut self, bus: &mut impl Bus, val: u16) {
        self.push_byte_s(bus, val as u8); // low byte pushed first (ends at higher address)
        self.push_byte_s(bus, (val >> 8) as u8);
    }

    /// Pull a byte from the hardware stack (S).
    pub(crate) fn pull_byte_s(&mut self, bus: &mut impl Bus) -> u8 {
        let val = self.read(bus, self.reg.s);
        self.reg.s = self.reg.s.wrapping_add(1);
        self.arm_nmi();
        val
    }

    /// Pull a 16-bit word from the hardware stack (S).
    pub(crate) fn pull_word_s(&mut self, bus: &mut impl Bus) -> u16 {
        let hi = self.pull_byte_s(bus) as u16;
        let lo = self.pull_byte_s(bus) as u16;
        (hi << 8) | lo
    }

    /// Push a byte onto the user stack (U).
    pub(crate) fn push_byte_u(&mut self, bus: &mut impl Bus, val: u8) {
        self.reg.u = self.reg.u.wrapping_sub(1);
        self.write(bus, self.reg.u, val);
    }

    /// Push a 16-bit word onto the user stack (U).
    pub(crate) fn push_word_u(&mut self, bus: &mut impl Bus, val: u16) {
        self.push_byte_u(bus, val as u8);
        self.push_byte_u(bus, (val >> 8) as u8);
    }

    /// Pull a byte from the user stack (U).
    pub(crate) fn pull_byte_u(&mut self, bus: &mut impl Bus) -> u8 {
        let val = self.read(bus, self.reg.u);
        self.reg.u = self.reg.u.wrapping_add(1);
        val
    }

    /// Pull a 16-bit word from the user stack (U).
    pub(crate) fn pull_word_u(&mut self, bus: &mut impl Bus) -> u16 {
        let hi = self.pull_byte_u(bus) as u16;
        let lo = self.pull_byte_u(bus) as u16;
        (hi << 8) | lo
    }

    /// Push the entire register state onto S (used by NMI, IRQ, SWI).
    /// Order: CC, A, B, DP, X, Y, U, PC (PC pushed first = highest address).
    pub(crate) fn push_entire_state(&mut self, bus: &mut impl Bus) {
        self.push_word_s(bus, self.reg.pc);
        self.push_word_s(bus, self.reg.u);
        self.push_word_s(bus, self.reg.y);
        self.push_word_s(bus, self.reg.x);
        self.push_byte_s(bus, self.reg.dp);
        self.push_byte_s(bus, self.reg.b());
        self.push_byte_s(bus, self.reg.a());
        self.push_byte_s(bus, self.reg.cc.to_byte());
    }

    // ---- instruction fetch helpers ----

    /// Fetch a byte from [PC] and advance PC.
    pub(crate) fn fetch_byte(&mut self, bus: &mut impl Bus) -> u8 {
        let val = self.read(bus, self.reg.pc);
        self.reg.pc = self.reg.pc.wrapping_add(1);
        val
    }

    /// Fetch a big-endian 16-bit word from [PC] and advance PC by 2.
    pub(crate) fn fetch_word(&mut self, bus: &mut impl Bus) -> u16 {
        let hi = self.fetch_byte(bus) as u16;
        let lo = self.fetch_byte(bus) as u16;
        (hi << 8) | lo
    }

    // ---- addressing mode helpers ----

    /// Direct addressing: DP:fetch_byte → effective address.
    pub(crate) fn addr_direct(&mut self, bus: &mut impl Bus) -> u16 {
        let lo = self.fetch_byte(bus) as u16;
        ((self.reg.dp as u16) << 8) | lo
    }

    /// Extended addressing: fetch 16-bit absolute address.
    pub(crate) fn addr_extended(&mut self, bus: &mut impl Bus) -> u16 {
        self.fetch_word(bus)
    }

    /// Indexed addressing: decode post-byte and return (effective_address, extra_cycles).
    pub(crate) fn addr_indexed(&mut self, bus: &mut impl Bus) -> (u16, u8) {
        crate::addressing::indexed(self, bus)
    }

    /// Relative 8-bit: signed offset from current PC.
    pub(crate) fn addr_relative8(&mut self, bus: &mut impl Bus) -> u16 {
        let offset = self.fetch_byte(bus) as i8 as i16 as u16;
        self.reg.pc.wrapping_add(offset)
    }

    /// Relative 16-bit: signed offset from current PC.
    pub(crate) fn addr_relative16(&mut self, bus: &mut impl Bus) -> u16 {
        let offset = self.fetch_word(bus);
        self.reg.pc.wrapping_add(offset)
    }

    /// Arm the NMI (called on any write that moves S).
    pub(crate) fn arm_nmi(&mut self) {
        self.nmi_armed = true;
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cyc={}", self.reg, self.cycles)
    }
}
