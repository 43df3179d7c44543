use crate::config::{EnvSnapshot, ACTIVE_ENV};

/// Whether this process tree is already inside an entered sandbox.
///
/// Read once from `VEND_ACTIVE` when the command context is built and passed
/// explicitly from then on. The variable itself is only written into the
/// environment of the session spawned by `vend enter`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SandboxSession {
    active: bool,
}

impl SandboxSession {
    #[must_use]
    pub const fn inactive() -> Self {
        Self { active: false }
    }

    #[must_use]
    pub const fn active() -> Self {
        Self { active: true }
    }

    pub(crate) fn from_snapshot(snapshot: &EnvSnapshot) -> Self {
        Self {
            active: snapshot.flag_is_enabled(ACTIVE_ENV),
        }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        self.active
    }
}
