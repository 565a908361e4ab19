// Take a look at the license at the top of the repository in the LICENSE file.

/// Number of runnable (and, on Linux, uninterruptible) tasks averaged over 1, 5 and
/// 15 minutes.
///
/// ```no_run
/// use hoststat::LoadAverage;
///
/// let mut load = LoadAverage::default();
/// match load.get() {
///     Ok(()) => println!("{} {} {}", load.one, load.five, load.fifteen),
///     Err(e) if e.is_not_implemented() => println!("no load average here"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadAverage {
    /// Average over the last minute.
    pub one: f64,
    /// Average over the last 5 minutes.
    pub five: f64,
    /// Average over the last 15 minutes.
    pub fifteen: f64,
}

impl_get!(LoadAverage => load_average);

/// Time since boot.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uptime {
    /// Seconds since boot.
    pub length: f64,
}

impl_get!(Uptime => uptime);
