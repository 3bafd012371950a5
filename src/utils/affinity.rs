//! Pins the benchmarking thread to one core for the duration of a measured
//! batch, restoring the previous affinity mask on drop.
//!
//! Only Linux has a real implementation (via `libc`); elsewhere the guard
//! does nothing and reports itself as unpinned.

#[cfg(target_os = "linux")]
mod platform {
    pub struct Saved(libc::cpu_set_t);

    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn save() -> Option<Saved> {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            (libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0)
                .then_some(Saved(set))
        }
    }

    pub fn pin(core: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(saved: &Saved) -> bool {
        unsafe { libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &saved.0) == 0 }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct Saved;

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn save() -> Option<Saved> {
        None
    }

    pub fn pin(_core: usize) -> bool {
        false
    }

    pub fn restore(_saved: &Saved) -> bool {
        true
    }
}

/// RAII guard: pinned to the current core while alive.
pub struct PinGuard {
    saved: Option<platform::Saved>,
    core: Option<usize>,
}

impl PinGuard {
    pub fn new() -> Self {
        let saved = platform::save();
        let core = match (&saved, platform::current_cpu()) {
            (Some(_), Some(core)) if platform::pin(core) => Some(core),
            _ => None,
        };
        if core.is_none() {
            tracing::debug!("could not pin benchmark thread; measuring unpinned");
        }
        Self { saved, core }
    }

    /// The core this thread is pinned to, if pinning succeeded.
    pub fn core(&self) -> Option<usize> {
        self.core
    }

    pub fn is_pinned(&self) -> bool {
        self.core.is_some()
    }
}

impl Default for PinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PinGuard {
    fn drop(&mut self) {
        if self.core.is_some() {
            if let Some(saved) = &self.saved {
                if !platform::restore(saved) {
                    tracing::warn!("failed to restore thread affinity");
                }
            }
        }
    }
}
