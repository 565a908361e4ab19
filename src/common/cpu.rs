// Take a look at the license at the top of the repository in the LICENSE file.

/// CPU time counters, in clock ticks since boot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cpu {
    /// Time spent in user mode.
    pub user: u64,
    /// Time spent in user mode with low priority.
    pub nice: u64,
    /// Time spent in kernel mode.
    pub sys: u64,
    /// Time spent idle.
    pub idle: u64,
    /// Time spent waiting for I/O.
    pub wait: u64,
    /// Time spent servicing interrupts.
    pub irq: u64,
    /// Time spent servicing soft interrupts.
    pub soft_irq: u64,
    /// Time stolen by the hypervisor.
    pub stolen: u64,
}

impl Cpu {
    /// Sum of all the counters.
    pub fn total(&self) -> u64 {
        self.user
            .saturating_add(self.nice)
            .saturating_add(self.sys)
            .saturating_add(self.idle)
            .saturating_add(self.wait)
            .saturating_add(self.irq)
            .saturating_add(self.soft_irq)
            .saturating_add(self.stolen)
    }
}

impl_get!(Cpu => cpu);

/// Per core CPU counters, in the order the OS reports the cores.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuList {
    /// One entry per core.
    pub list: Vec<Cpu>,
}

impl_get!(CpuList => cpu_list);

#[cfg(test)]
mod test {
    use super::Cpu;

    #[test]
    fn check_cpu_total() {
        let cpu = Cpu {
            user: 1,
            nice: 2,
            sys: 3,
            idle: 4,
            wait: 5,
            irq: 6,
            soft_irq: 7,
            stolen: 8,
        };
        assert_eq!(cpu.total(), 36);
        assert_eq!(Cpu::default().total(), 0);
    }
}
