// Take a look at the license at the top of the repository in the LICENSE file.

#[cfg(feature = "debug")]
#[doc(hidden)]
#[allow(unused)]
macro_rules! hoststat_debug {
    ($($x:tt)*) => {{
        tracing::debug!($($x)*);
    }}
}

#[cfg(not(feature = "debug"))]
#[doc(hidden)]
#[allow(unused)]
macro_rules! hoststat_debug {
    ($($x:tt)*) => {{}};
}

#[cfg(all(unix, not(feature = "unknown-ci")))]
#[allow(unused)]
macro_rules! retry_eintr {
    ($($t:tt)+) => {{
        loop {
            let ret = $($t)+;
            if ret < 0 && std::io::Error::last_os_error().kind() == std::io::ErrorKind::Interrupted {
                continue;
            }
            break ret;
        }
    }};
}

// Generates the single `get` entry point of a metric type, plus `get_from` which runs the
// same query against an explicit backend.
macro_rules! impl_get {
    ($ty:ident => $method:ident) => {
        impl $ty {
            #[doc = concat!("Replaces `self` with the current [`", stringify!($ty), "`] of this host.")]
            ///
            /// On error `self` is left untouched.
            pub fn get(&mut self) -> crate::Result<()> {
                self.get_from(&crate::NativeBackend::default())
            }

            #[doc = concat!("Same as [`", stringify!($ty), "::get`] but queries `backend`.")]
            pub fn get_from<B: crate::Backend + ?Sized>(&mut self, backend: &B) -> crate::Result<()> {
                *self = backend.$method()?;
                Ok(())
            }
        }
    };
    ($ty:ident => $method:ident(pid)) => {
        impl $ty {
            #[doc = concat!("Replaces `self` with the current [`", stringify!($ty), "`] of process `pid`.")]
            ///
            /// On error `self` is left untouched.
            pub fn get(&mut self, pid: crate::Pid) -> crate::Result<()> {
                self.get_from(&crate::NativeBackend::default(), pid)
            }

            #[doc = concat!("Same as [`", stringify!($ty), "::get`] but queries `backend`.")]
            pub fn get_from<B: crate::Backend + ?Sized>(
                &mut self,
                backend: &B,
                pid: crate::Pid,
            ) -> crate::Result<()> {
                *self = backend.$method(pid)?;
                Ok(())
            }
        }
    };
}
