// Take a look at the license at the top of the repository in the LICENSE file.

use hoststat::{
    AbsentMetric, Backend, Config, Cpu, CpuList, Error, LoadAverage, Metric, NativeBackend,
    Support, Uptime,
};

#[test]
fn test_cpu() {
    let backend = NativeBackend::default();
    if backend.support(Metric::Cpu) != Support::Supported {
        return;
    }

    let mut cpu = Cpu::default();
    cpu.get().expect("failed to get cpu");
    assert!(cpu.total() > 0);

    let mut cpus = CpuList::default();
    cpus.get().expect("failed to get cpu list");
    assert!(!cpus.list.is_empty());
    // Every core has been busy or idle for some time since boot.
    assert!(cpus.list.iter().all(|core| core.total() > 0));
}

#[test]
fn test_uptime() {
    let backend = NativeBackend::default();
    let mut uptime = Uptime::default();

    match backend.support(Metric::Uptime) {
        Support::Supported => {
            uptime.get().expect("failed to get uptime");
            assert!(uptime.length > 0.);
        }
        _ => assert_eq!(uptime.get(), Err(Error::NotImplemented)),
    }
}

#[test]
fn test_load_average() {
    let backend = NativeBackend::default();
    let mut load = LoadAverage::default();

    match backend.support(Metric::LoadAverage) {
        Support::Supported => {
            load.get().expect("failed to get load average");
            assert!(load.one >= 0.);
            assert!(load.five >= 0.);
            assert!(load.fifteen >= 0.);
        }
        _ => assert_eq!(load.get(), Err(Error::NotImplemented)),
    }
}

#[test]
fn test_absent_metric_zero() {
    let backend = NativeBackend::new(Config::new().with_absent_metric(AbsentMetric::Zero));

    // Only metrics the platform cannot acquire are affected by the policy.
    if backend.support(Metric::LoadAverage) == Support::Unwired {
        let mut load = LoadAverage {
            one: 1.,
            five: 1.,
            fifteen: 1.,
        };
        load.get_from(&backend).expect("zero policy cannot fail");
        assert_eq!(load, LoadAverage::default());
    }
    if backend.support(Metric::Uptime) == Support::Unwired {
        let mut uptime = Uptime { length: 1. };
        uptime.get_from(&backend).expect("zero policy cannot fail");
        assert_eq!(uptime, Uptime::default());
    }
}
