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

//! Pin-level state for the 6809 bus interface.
//!
//! Every field here corresponds to a physical pin on the MC6809E package.
//! The core publishes address/data/direction onto these fields before each
//! [`crate::Bus::access`] call; the host reads and drives the rest.

/// Packed bus/control pin state.
///
/// `BS`/`BA` are always updated together through [`set_mpu_state`](PinState::set_mpu_state)
/// so the four legal combinations (00 normal, 01 interrupt/reset ack,
/// 10 sync ack, 11 halt ack) are the only reachable states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinState {
    address: u16,
    data: u8,
    /// true = read, false = write.
    rw: bool,
    nmi: bool,
    irq: bool,
    firq: bool,
    halt: bool,
    reset: bool,
    bs: bool,
    ba: bool,
    lic: bool,
    avma: bool,
    busy: bool,
    tsc: bool,
}

impl PinState {
    pub const fn new() -> Self {
        Self {
            address: 0,
            data: 0,
            rw: true,
            nmi: false,
            irq: false,
            firq: false,
            halt: false,
            reset: false,
            bs: false,
            ba: false,
            lic: false,
            avma: false,
            busy: false,
            tsc: false,
        }
    }

    pub const fn address(&self) -> u16 {
        self.address
    }
    pub fn set_address(&mut self, addr: u16) {
        self.address = addr;
    }

    pub const fn data(&self) -> u8 {
        self.data
    }
    pub fn set_data(&mut self, val: u8) {
        self.data = val;
    }

    /// true while the core is performing a read (host must populate `data`).
    pub const fn rw(&self) -> bool {
        self.rw
    }
    pub fn set_rw(&mut self, read: bool) {
        self.rw = read;
    }

    pub const fn nmi(&self) -> bool {
        self.nmi
    }
    pub fn set_nmi(&mut self, v: bool) {
        self.nmi = v;
    }

    pub const fn irq(&self) -> bool {
        self.irq
    }
    pub fn set_irq(&mut self, v: bool) {
        self.irq = v;
    }

    pub const fn firq(&self) -> bool {
        self.firq
    }
    pub fn set_firq(&mut self, v: bool) {
        self.firq = v;
    }

    pub const fn halt(&self) -> bool {
        self.halt
    }
    pub fn set_halt(&mut self, v: bool) {
        self.halt = v;
    }

    pub const fn reset(&self) -> bool {
        self.reset
    }
    pub fn set_reset(&mut self, v: bool) {
        self.reset = v;
    }

    pub const fn bs(&self) -> bool {
        self.bs
    }
    pub const fn ba(&self) -> bool {
        self.ba
    }

    /// Set BS/BA together. `(false, false)` = normal, `(true, false)` =
    /// interrupt/reset vector fetch, `(false, true)` = SYNC/CWAI wait,
    /// `(true, true)` = HALT acknowledge.
    pub fn set_mpu_state(&mut self, bs: bool, ba: bool) {
        self.bs = bs;
        self.ba = ba;
    }

    pub const fn lic(&self) -> bool {
        self.lic
    }
    pub fn set_lic(&mut self, v: bool) {
        self.lic = v;
    }

    pub const fn avma(&self) -> bool {
        self.avma
    }
    pub fn set_avma(&mut self, v: bool) {
        self.avma = v;
    }

    pub const fn busy(&self) -> bool {
        self.busy
    }
    pub fn set_busy(&mut self, v: bool) {
        self.busy = v;
    }

    pub const fn tsc(&self) -> bool {
        self.tsc
    }
    pub fn set_tsc(&mut self, v: bool) {
        self.tsc = v;
    }
}

impl Default for PinState {
    fn default() -> Self {
        Self::new()
    }
}
