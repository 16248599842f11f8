// src/domain/reveal.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Readiness {
    #[default]
    Pending,
    Ready,
}

/// One-way gate for sections that wait on the status check.
/// `Pending -> Ready` once; never back.
#[derive(Debug, Default)]
pub struct RevealCoordinator {
    state: Readiness,
}

impl RevealCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Readiness {
        self.state
    }

    /// Returns `true` only for the call that actually opened the gate.
    pub fn mark_ready(&mut self) -> bool {
        match self.state {
            Readiness::Pending => {
                self.state = Readiness::Ready;
                true
            }
            Readiness::Ready => false,
        }
    }
}
