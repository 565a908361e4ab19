// Take a look at the license at the top of the repository in the LICENSE file.

use hoststat::{Backend, Error, Memory, Metric, NativeBackend, Support, Swap};

#[test]
fn test_memory() {
    let mut mem = Memory::default();
    if !hoststat::IS_SUPPORTED_SYSTEM {
        assert_eq!(mem.get(), Err(Error::NotImplemented));
        return;
    }
    mem.get().expect("failed to get memory");
    assert!(mem.total > 0);
    assert!(mem.free <= mem.total);
    assert!(mem.used <= mem.total);
    assert!(mem.actual_free <= mem.total);
    assert!(mem.actual_used <= mem.total);
}

#[test]
fn test_swap() {
    let backend = NativeBackend::default();
    let mut swap = Swap::default();

    match backend.support(Metric::Swap) {
        Support::Supported => {
            swap.get_from(&backend).expect("failed to get swap");
            // Some machines have no swap at all.
            assert_eq!(swap.used, swap.total - swap.free);
        }
        _ => {
            assert_eq!(swap.get_from(&backend), Err(Error::NotImplemented));
            assert_eq!(swap, Swap::default());
        }
    }
}
