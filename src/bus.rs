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

use crate::pins::PinState;

/// Interrupt and control signals a [`Bus::tick`] implementation may report
/// back to the host, for wiring into [`crate::Cpu::trigger_irq`] and friends.
///
/// The default is all signals de-asserted (inactive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusSignals {
    /// IRQ line state (active = asserted, level-triggered).
    pub irq: bool,
    /// FIRQ line state (active = asserted, level-triggered).
    pub firq: bool,
    /// NMI request (edge-triggered — set `true` to trigger once).
    pub nmi: bool,
    /// Request the CPU to halt (e.g. watchdog expiry).
    pub halt: bool,
}

/// Memory bus trait for the 6809 CPU.
///
/// The 6809 has a 16-bit address bus and an 8-bit data bus. The core never
/// reads or writes memory directly: every touch goes through one
/// [`access`](Bus::access) event. The core publishes `pins.address()` and
/// `pins.rw()` (and, for writes, `pins.data()`) before calling `access`; for
/// reads the implementation must populate `pins`' data byte before
/// returning.
pub trait Bus {
    /// Service one bus access. `pins.rw()` tells you the direction;
    /// `pins.address()` the address; for writes, `pins.data()` holds the
    /// byte to store. For reads, call `pins.set_data(..)` with the byte at
    /// that address before returning.
    fn access(&mut self, pins: &mut PinState);

    /// Advance peripherals by `cycles` CPU cycles and return interrupt/
    /// control signals.
    ///
    /// Called once after each CPU step (or batch of steps) at the host's
    /// discretion. Implementations should update timers, trigger IRQs, etc.
    /// and report the resulting signal states; the host is responsible for
    /// feeding these into the CPU via [`crate::Cpu::trigger_irq`] and
    /// friends. The default implementation is a no-op, which is correct for
    /// simple test buses with no peripherals.
    fn tick(&mut self, _cycles: u64) -> BusSignals {
        BusSignals::default()
    }
}
