//! Boundary traits for host collaborators

use deck_core::PresentationAgent;

/// Host-side persistence seam.
///
/// On explicit save the controller hands over the full agent snapshot;
/// what the host does with it (network call, local write) is its own
/// business, and nothing comes back.
pub trait SaveHost {
    fn persist(&mut self, agent: &PresentationAgent);
}
