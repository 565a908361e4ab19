// Take a look at the license at the top of the repository in the LICENSE file.

use crate::sys::utils::{get_all_data, malformed};
use crate::{Cpu, CpuList, LoadAverage, Memory, Result, Swap, Uptime};

use std::path::Path;
use std::str::FromStr;

const MEMINFO: &str = "read(meminfo)";
const STAT: &str = "read(stat)";
const LOADAVG: &str = "read(loadavg)";
const UPTIME: &str = "read(uptime)";

pub(crate) fn memory(proc_root: &Path) -> Result<Memory> {
    let content = get_all_data(proc_root.join("meminfo"), 16_635, MEMINFO)?;
    parse_meminfo(&content).map(|(mem, _)| mem)
}

pub(crate) fn swap(proc_root: &Path) -> Result<Swap> {
    let content = get_all_data(proc_root.join("meminfo"), 16_635, MEMINFO)?;
    parse_meminfo(&content).map(|(_, swap)| swap)
}

pub(crate) fn cpu(proc_root: &Path) -> Result<Cpu> {
    let content = get_all_data(proc_root.join("stat"), 4_096, STAT)?;
    parse_stat_cpus(&content).map(|(cpu, _)| cpu)
}

pub(crate) fn cpu_list(proc_root: &Path) -> Result<CpuList> {
    let content = get_all_data(proc_root.join("stat"), 4_096, STAT)?;
    parse_stat_cpus(&content).map(|(_, list)| CpuList { list })
}

pub(crate) fn load_average(proc_root: &Path) -> Result<LoadAverage> {
    let content = get_all_data(proc_root.join("loadavg"), 50, LOADAVG)?;
    parse_loadavg(&content).ok_or_else(|| malformed(LOADAVG))
}

pub(crate) fn uptime(proc_root: &Path) -> Result<Uptime> {
    let content = get_all_data(proc_root.join("uptime"), 50, UPTIME)?;
    parse_uptime(&content).ok_or_else(|| malformed(UPTIME))
}

/// Returns the boot time, in seconds since the Unix epoch.
pub(crate) fn boot_time(proc_root: &Path) -> Result<u64> {
    let content = get_all_data(proc_root.join("stat"), 4_096, STAT)?;
    parse_boot_time(&content).ok_or_else(|| malformed(STAT))
}

fn read_table<F>(content: &str, colsep: char, mut f: F)
where
    F: FnMut(&str, u64),
{
    content
        .split('\n')
        .flat_map(|line| {
            let mut split = line.split(colsep);
            let key = split.next()?;
            let value = split.next()?;
            let value0 = value.trim_start().split(' ').next()?;
            let value0_u64 = u64::from_str(value0).ok()?;
            Some((key, value0_u64))
        })
        .for_each(|(k, v)| f(k, v));
}

fn parse_meminfo(content: &str) -> Result<(Memory, Swap)> {
    let mut mem_total = None;
    let mut mem_free = 0;
    let mut mem_available = None;
    let mut buffers = 0;
    let mut cached = 0;
    let mut swap_total = 0;
    let mut swap_free = 0;

    read_table(content, ':', |key, value_kib| {
        // /proc/meminfo reports KiB, though it says "kB". Convert it.
        let value = value_kib.saturating_mul(1_024);
        match key {
            "MemTotal" => mem_total = Some(value),
            "MemFree" => mem_free = value,
            "MemAvailable" => mem_available = Some(value),
            "Buffers" => buffers = value,
            "Cached" => cached = value,
            "SwapTotal" => swap_total = value,
            "SwapFree" => swap_free = value,
            _ => {}
        }
    });

    let total = match mem_total {
        Some(total) if total > 0 => total,
        _ => return Err(malformed(MEMINFO)),
    };
    // Linux < 3.14 doesn't have MemAvailable.
    let actual_free = mem_available
        .unwrap_or_else(|| mem_free.saturating_add(buffers).saturating_add(cached))
        .min(total);

    Ok((
        Memory {
            total,
            used: total.saturating_sub(mem_free),
            free: mem_free,
            actual_free,
            actual_used: total - actual_free,
        },
        Swap {
            total: swap_total,
            used: swap_total.saturating_sub(swap_free),
            free: swap_free,
        },
    ))
}

// Fields after the label: user nice system idle iowait irq softirq steal [guest guest_nice].
// Kernels older than 2.6.11 stop after idle/iowait.
fn parse_cpu_line(line: &str) -> Option<Cpu> {
    let mut fields = line.split_whitespace().skip(1).map(u64::from_str);
    let mut next = || fields.next().transpose();

    let user = next().ok()??;
    let nice = next().ok()??;
    let sys = next().ok()??;
    let idle = next().ok()??;
    Some(Cpu {
        user,
        nice,
        sys,
        idle,
        wait: next().ok()?.unwrap_or(0),
        irq: next().ok()?.unwrap_or(0),
        soft_irq: next().ok()?.unwrap_or(0),
        stolen: next().ok()?.unwrap_or(0),
    })
}

fn parse_stat_cpus(content: &str) -> Result<(Cpu, Vec<Cpu>)> {
    let mut total = None;
    let mut cores = Vec::new();

    for line in content.lines() {
        let Some(label) = line.split_whitespace().next() else {
            continue;
        };
        if label == "cpu" {
            total = Some(parse_cpu_line(line).ok_or_else(|| malformed(STAT))?);
        } else if label
            .strip_prefix("cpu")
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        {
            cores.push(parse_cpu_line(line).ok_or_else(|| malformed(STAT))?);
        }
    }
    total.map(|t| (t, cores)).ok_or_else(|| malformed(STAT))
}

fn parse_boot_time(content: &str) -> Option<u64> {
    content
        .lines()
        .find(|l| l.starts_with("btime"))?
        .split_whitespace()
        .nth(1)
        .and_then(|v| u64::from_str(v).ok())
}

fn parse_loadavg(content: &str) -> Option<LoadAverage> {
    let mut loads = content
        .split_whitespace()
        .take(3)
        .map(|val| val.parse::<f64>().ok());
    Some(LoadAverage {
        one: loads.next()??,
        five: loads.next()??,
        fifteen: loads.next()??,
    })
}

fn parse_uptime(content: &str) -> Option<Uptime> {
    let length = content.split_whitespace().next()?.parse::<f64>().ok()?;
    Some(Uptime { length })
}
